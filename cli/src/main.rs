mod commands;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, Metadata, Record};
use std::process::ExitCode;
use word_diff::DiffError;

#[derive(Parser)]
#[command(name = "word-diff")]
#[command(about = "Compare two texts word by word and show differences")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compare two texts")]
    Diff(DiffArgs),
    #[command(about = "Show token statistics for a text file")]
    Info {
        #[arg(help = "Path to the text file ('-' for stdin)")]
        path: String,
    },
}

#[derive(Args)]
pub struct DiffArgs {
    #[arg(help = "Path to the old/base text ('-' for stdin)")]
    pub old: String,
    #[arg(help = "Path to the new/changed text ('-' for stdin)")]
    pub new: String,
    #[arg(long, help = "Treat OLD and NEW as literal text instead of paths")]
    pub text: bool,
    #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
    pub format: OutputFormat,
    #[arg(long, value_name = "N", help = "Maximum combined token count")]
    pub max_tokens: Option<u32>,
    #[arg(long, value_name = "N", help = "Maximum alignment matrix cells")]
    pub max_cells: Option<u64>,
    #[arg(long, help = "Fall back to positional alignment instead of failing on large input")]
    pub fallback: bool,
    #[arg(long, help = "On equally long alignments, mark left tokens removed before right tokens added")]
    pub prefer_removed: bool,
    #[arg(long, short, help = "Quiet mode: only show summary")]
    pub quiet: bool,
    #[arg(long, short, help = "Verbose mode: list every token with its classification")]
    pub verbose: bool,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::run(&args),
        Commands::Info { path } => commands::info::run(&path),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for_error(&e)
        }
    }
}

fn exit_code_for_error(err: &anyhow::Error) -> ExitCode {
    if is_engine_error(err) {
        ExitCode::from(3)
    } else {
        ExitCode::from(2)
    }
}

fn is_engine_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<DiffError>())
}

fn init_logging() {
    static LOGGER: StderrLogger = StderrLogger;
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log_level_from_env());
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn log_level_from_env() -> LevelFilter {
    match std::env::var("WORD_DIFF_LOG").as_deref() {
        Ok("error") => LevelFilter::Error,
        Ok("warn") => LevelFilter::Warn,
        Ok("info") => LevelFilter::Info,
        Ok("debug") => LevelFilter::Debug,
        Ok("trace") => LevelFilter::Trace,
        Ok("off") => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}
