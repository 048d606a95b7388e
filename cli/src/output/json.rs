use anyhow::Result;
use std::io::Write;
use word_diff::DiffResult;

pub fn write_json_report<W: Write>(w: &mut W, result: &DiffResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, result)?;
    writeln!(w)?;
    Ok(())
}
