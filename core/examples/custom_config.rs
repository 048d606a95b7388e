use word_diff::{DiffConfig, LimitBehavior, TieBreak, render_html, try_diff_texts};

fn usage() -> ! {
    eprintln!("Usage: custom_config <OLD.txt> <NEW.txt>");
    std::process::exit(2);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let old_path = args.next().unwrap_or_else(|| usage());
    let new_path = args.next().unwrap_or_else(|| usage());

    let old_text = std::fs::read_to_string(&old_path)?;
    let new_text = std::fs::read_to_string(&new_path)?;

    let cfg = DiffConfig::builder()
        .max_tokens(5_000)
        .on_limit_exceeded(LimitBehavior::FallbackToPositional)
        .tie_break(TieBreak::PreferRemoved)
        .build()?;

    let result = try_diff_texts(&old_text, &new_text, &cfg)?;

    for warning in &result.warnings {
        eprintln!("warning: {}", warning);
    }

    println!("{}", render_html(&result));
    Ok(())
}
