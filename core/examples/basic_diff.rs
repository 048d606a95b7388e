use word_diff::{DiffConfig, try_diff_texts};

fn usage() -> ! {
    eprintln!("Usage: basic_diff <OLD.txt> <NEW.txt> [N]");
    eprintln!("  N: optionally print the first N tokens of each side (debug)");
    std::process::exit(2);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let old_path = args.next().unwrap_or_else(|| usage());
    let new_path = args.next().unwrap_or_else(|| usage());
    let show_n: Option<usize> = args.next().map(|s| s.parse()).transpose()?;

    let old_text = std::fs::read_to_string(&old_path)?;
    let new_text = std::fs::read_to_string(&new_path)?;

    let result = try_diff_texts(&old_text, &new_text, &DiffConfig::default())?;
    let summary = result.summary();

    println!("complete: {}", result.complete);
    println!("warnings: {}", result.warnings.len());
    println!(
        "unchanged: {}, removed: {}, added: {}",
        summary.unchanged, summary.removed, summary.added
    );

    if let Some(n) = show_n {
        for (i, token) in result.left.iter().take(n).enumerate() {
            println!("L{:>4}: {:?}", i, token);
        }
        for (i, token) in result.right.iter().take(n).enumerate() {
            println!("R{:>4}: {:?}", i, token);
        }
    }

    Ok(())
}
