use anyhow::Result;
use std::collections::HashSet;
use std::process::ExitCode;
use word_diff::{AlignmentMatrix, DiffConfig, tokenize};

pub fn run(path: &str) -> Result<ExitCode> {
    let text = super::read_input(path)?;
    let tokens = tokenize(&text);
    let distinct: HashSet<&str> = tokens.iter().copied().collect();
    let defaults = DiffConfig::default();

    println!("Text: {}", path);
    println!("Bytes: {}", text.len());
    println!("Tokens: {}", tokens.len());
    println!("Distinct tokens: {}", distinct.len());

    match AlignmentMatrix::cell_count(tokens.len(), tokens.len()) {
        Some(cells) => {
            println!("Self-diff matrix cells: {}", cells);
            let within = (tokens.len() as u64) * 2 <= u64::from(defaults.max_tokens)
                && cells <= defaults.max_matrix_cells;
            println!(
                "Within default limits: {}",
                if within { "yes" } else { "no" }
            );
        }
        None => println!("Self-diff matrix cells: overflow"),
    }

    Ok(ExitCode::SUCCESS)
}
