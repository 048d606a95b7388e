#![no_main]

use libfuzzer_sys::fuzz_target;

use word_diff::{DiffConfig, LimitBehavior, TieBreak, render_html, try_diff_texts};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let split = data.first().copied().unwrap_or(0) as usize % (text.len() + 1);
    let split = (0..=split).rev().find(|i| text.is_char_boundary(*i)).unwrap_or(0);
    let (a, b) = text.split_at(split);

    let tie_break = if data.len() % 2 == 0 {
        TieBreak::PreferAdded
    } else {
        TieBreak::PreferRemoved
    };
    let config = DiffConfig {
        max_tokens: 256,
        on_limit_exceeded: LimitBehavior::FallbackToPositional,
        tie_break,
        ..Default::default()
    };

    let Ok(result) = try_diff_texts(a, b, &config) else {
        return;
    };

    let left: Vec<&str> = result.left.iter().map(|t| t.text.as_str()).collect();
    let right: Vec<&str> = result.right.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(left, a.split_whitespace().collect::<Vec<_>>());
    assert_eq!(right, b.split_whitespace().collect::<Vec<_>>());

    let kept_left: Vec<&str> = result
        .left
        .iter()
        .filter(|t| t.is_unchanged())
        .map(|t| t.text.as_str())
        .collect();
    let kept_right: Vec<&str> = result
        .right
        .iter()
        .filter(|t| t.is_unchanged())
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(kept_left, kept_right);

    let _ = render_html(&result);
});
