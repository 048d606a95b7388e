use crate::commands::diff::Verbosity;
use anyhow::Result;
use std::io::Write;
use word_diff::{ClassifiedToken, DiffResult, TokenChange};

pub fn write_text_report<W: Write>(
    w: &mut W,
    result: &DiffResult,
    old_label: &str,
    new_label: &str,
    verbosity: Verbosity,
) -> Result<()> {
    if verbosity != Verbosity::Quiet {
        writeln!(w, "--- {}", old_label)?;
        writeln!(w, "+++ {}", new_label)?;

        if result.has_changes() {
            writeln!(w, "- {}", render_side(&result.left))?;
            writeln!(w, "+ {}", render_side(&result.right))?;
        } else {
            writeln!(w, "No differences found.")?;
        }
        writeln!(w)?;
    }

    write_summary(w, result)?;

    if verbosity == Verbosity::Verbose {
        writeln!(w)?;
        write_token_list(w, "Left tokens:", &result.left)?;
        write_token_list(w, "Right tokens:", &result.right)?;
    }

    Ok(())
}

fn render_side(tokens: &[ClassifiedToken]) -> String {
    tokens
        .iter()
        .map(|token| match token.change() {
            TokenChange::Unchanged => token.text.clone(),
            TokenChange::Removed => format!("[-{}-]", token.text),
            TokenChange::Added => format!("{{+{}+}}", token.text),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_summary<W: Write>(w: &mut W, result: &DiffResult) -> Result<()> {
    let summary = result.summary();
    write!(
        w,
        "{} unchanged, {} removed, {} added",
        summary.unchanged, summary.removed, summary.added
    )?;
    if !result.complete {
        write!(w, " (incomplete)")?;
    }
    writeln!(w)?;
    Ok(())
}

fn write_token_list<W: Write>(w: &mut W, title: &str, tokens: &[ClassifiedToken]) -> Result<()> {
    writeln!(w, "{}", title)?;
    for token in tokens {
        let marker = match token.change() {
            TokenChange::Unchanged => '=',
            TokenChange::Removed => '-',
            TokenChange::Added => '+',
        };
        writeln!(w, "  {} {}", marker, token.text)?;
    }
    Ok(())
}
