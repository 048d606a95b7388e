use crate::output::{html, json, text};
use crate::{DiffArgs, OutputFormat};
use anyhow::{Context, Result, bail};
use std::io;
use std::process::ExitCode;
use word_diff::{DiffConfig, DiffResult, LimitBehavior, TieBreak, try_diff_texts};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

pub fn run(args: &DiffArgs) -> Result<ExitCode> {
    if args.quiet && args.verbose {
        bail!("Cannot use both --quiet and --verbose flags together");
    }

    if !args.text && args.old == "-" && args.new == "-" {
        bail!("Only one of OLD and NEW may be read from stdin");
    }

    let verbosity = if args.quiet {
        Verbosity::Quiet
    } else if args.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };

    let config = build_config(args)?;

    let (old_text, new_text, old_label, new_label) = if args.text {
        (args.old.clone(), args.new.clone(), "old", "new")
    } else {
        let old_text = super::read_input(&args.old).context("Failed to load old text")?;
        let new_text = super::read_input(&args.new).context("Failed to load new text")?;
        (old_text, new_text, args.old.as_str(), args.new.as_str())
    };

    let result = try_diff_texts(&old_text, &new_text, &config).context("Diff failed")?;

    print_warnings_to_stderr(&result);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match args.format {
        OutputFormat::Text => {
            text::write_text_report(&mut handle, &result, old_label, new_label, verbosity)?;
        }
        OutputFormat::Json => {
            json::write_json_report(&mut handle, &result)?;
        }
        OutputFormat::Html => {
            html::write_html_report(&mut handle, &result)?;
        }
    }

    Ok(exit_code_from_result(&result))
}

fn build_config(args: &DiffArgs) -> Result<DiffConfig> {
    let defaults = DiffConfig::default();
    let config = DiffConfig::builder()
        .max_tokens(args.max_tokens.unwrap_or(defaults.max_tokens))
        .max_matrix_cells(args.max_cells.unwrap_or(defaults.max_matrix_cells))
        .on_limit_exceeded(if args.fallback {
            LimitBehavior::FallbackToPositional
        } else {
            LimitBehavior::ReturnError
        })
        .tie_break(if args.prefer_removed {
            TieBreak::PreferRemoved
        } else {
            TieBreak::PreferAdded
        })
        .build()
        .context("Invalid diff limits")?;
    Ok(config)
}

fn print_warnings_to_stderr(result: &DiffResult) {
    for warning in &result.warnings {
        eprintln!("Warning: {}", warning);
    }
}

fn exit_code_from_result(result: &DiffResult) -> ExitCode {
    if !result.has_changes() && result.complete {
        ExitCode::from(0)
    } else {
        ExitCode::from(1)
    }
}
