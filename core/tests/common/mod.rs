//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use word_diff::{ClassifiedToken, DiffResult, TokenChange};

/// Compact `text(tag)` rendering of one side: `u` unchanged, `+` added, `-` removed.
pub fn tagged(tokens: &[ClassifiedToken]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| {
            let tag = match t.change() {
                TokenChange::Unchanged => "u",
                TokenChange::Added => "+",
                TokenChange::Removed => "-",
            };
            format!("{}({})", t.text, tag)
        })
        .collect()
}

pub fn texts(tokens: &[ClassifiedToken]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

pub fn unchanged_texts(tokens: &[ClassifiedToken]) -> Vec<&str> {
    tokens
        .iter()
        .filter(|t| t.is_unchanged())
        .map(|t| t.text.as_str())
        .collect()
}

pub fn normalized(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Checks the structural invariants every diff result must satisfy.
pub fn assert_result_invariants(text1: &str, text2: &str, result: &DiffResult) {
    assert_eq!(texts(&result.left).join(" "), normalized(text1), "left fidelity");
    assert_eq!(texts(&result.right).join(" "), normalized(text2), "right fidelity");
    assert!(
        result.left.iter().all(|t| !t.added),
        "left side must never contain added tokens"
    );
    assert!(
        result.right.iter().all(|t| !t.removed),
        "right side must never contain removed tokens"
    );
    assert_eq!(
        unchanged_texts(&result.left),
        unchanged_texts(&result.right),
        "unchanged subsequences must match"
    );
}

/// Small deterministic generator so property-style tests stay reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    pub fn words(&mut self, vocab: &[&str], len: usize) -> String {
        (0..len)
            .map(|_| vocab[self.next_u32() as usize % vocab.len()])
            .collect::<Vec<_>>()
            .join(" ")
    }
}
