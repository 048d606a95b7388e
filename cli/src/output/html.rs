use anyhow::Result;
use std::io::Write;
use word_diff::{DiffResult, write_html};

pub fn write_html_report<W: Write>(w: &mut W, result: &DiffResult) -> Result<()> {
    write_html(w, result)?;
    writeln!(w)?;
    Ok(())
}
