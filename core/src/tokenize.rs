//! Word tokenization.

/// Splits `text` into whitespace-delimited tokens, preserving order.
///
/// Runs of whitespace (including Unicode whitespace) act as a single
/// separator and never produce empty tokens, so an empty or blank input
/// yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
