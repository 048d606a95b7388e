pub mod diff;
pub mod info;

use anyhow::{Context, Result};
use std::io::Read;

/// Reads a text input; `-` means stdin.
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read text from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read text file: {}", path))
}
