//! Diff results for word-level text comparison.
//!
//! This module defines the types produced by the diff engine:
//! - [`ClassifiedToken`]: one token of either input, tagged as unchanged, added or removed
//! - [`DiffResult`]: the two annotated token sequences plus completeness metadata
//! - [`DiffError`]: errors that can occur when size limits are enforced

use crate::error_codes;
use thiserror::Error;

/// How a single token relates to the other side of the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenChange {
    /// Present in both inputs, in the same relative order.
    Unchanged,
    /// Present only in the second input.
    Added,
    /// Present only in the first input.
    Removed,
}

/// A token annotated with its classification.
///
/// At most one of `added`/`removed` is set; both false means unchanged.
/// The flag layout is kept for consumers of the JSON output; deserializing a
/// token with both flags set fails.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawClassifiedToken")]
pub struct ClassifiedToken {
    pub text: String,
    pub added: bool,
    pub removed: bool,
}

#[derive(serde::Deserialize)]
struct RawClassifiedToken {
    text: String,
    added: bool,
    removed: bool,
}

impl TryFrom<RawClassifiedToken> for ClassifiedToken {
    type Error = String;

    fn try_from(raw: RawClassifiedToken) -> Result<Self, Self::Error> {
        if raw.added && raw.removed {
            return Err(format!(
                "token {:?} cannot be both added and removed",
                raw.text
            ));
        }
        Ok(ClassifiedToken {
            text: raw.text,
            added: raw.added,
            removed: raw.removed,
        })
    }
}

impl ClassifiedToken {
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            added: false,
            removed: false,
        }
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            added: true,
            removed: false,
        }
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            added: false,
            removed: true,
        }
    }

    pub fn change(&self) -> TokenChange {
        debug_assert!(
            !(self.added && self.removed),
            "token cannot be both added and removed"
        );
        if self.added {
            TokenChange::Added
        } else if self.removed {
            TokenChange::Removed
        } else {
            TokenChange::Unchanged
        }
    }

    pub fn is_unchanged(&self) -> bool {
        !self.added && !self.removed
    }
}

/// Errors produced by diffing APIs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DiffError {
    #[error(
        "[WDIFF_DIFF_001] input too large: left={left_tokens} tokens, right={right_tokens} tokens (limits: tokens={max_tokens}, matrix cells={max_cells}). Suggestion: raise `max_tokens`/`max_matrix_cells` or set `on_limit_exceeded` to fallback_to_positional."
    )]
    LimitsExceeded {
        left_tokens: usize,
        right_tokens: usize,
        max_tokens: u32,
        max_cells: u64,
    },
}

impl DiffError {
    pub fn code(&self) -> &'static str {
        match self {
            DiffError::LimitsExceeded { .. } => error_codes::DIFF_LIMITS_EXCEEDED,
        }
    }
}

/// Token counts per classification across both sides of a [`DiffResult`].
///
/// Unchanged tokens appear once on each side and are counted once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
}

/// The two annotated token sequences of a word-level diff.
///
/// `left` holds every token of the first text in order, each either
/// unchanged or removed; `right` holds every token of the second text, each
/// either unchanged or added. The unchanged tokens of both sides are the
/// same sequence.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiffResult {
    /// Schema version (currently "1").
    pub version: String,
    pub left: Vec<ClassifiedToken>,
    pub right: Vec<ClassifiedToken>,
    /// Whether the unchanged tokens form a longest common subsequence. `false`
    /// when a size limit forced the positional fallback.
    #[serde(default = "default_complete")]
    pub complete: bool,
    /// Warnings explaining why the result is incomplete.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

fn default_complete() -> bool {
    true
}

impl DiffResult {
    pub const SCHEMA_VERSION: &'static str = "1";

    pub fn new(left: Vec<ClassifiedToken>, right: Vec<ClassifiedToken>) -> DiffResult {
        DiffResult {
            version: Self::SCHEMA_VERSION.to_string(),
            left,
            right,
            complete: true,
            warnings: Vec::new(),
        }
    }

    pub fn with_partial_result(
        left: Vec<ClassifiedToken>,
        right: Vec<ClassifiedToken>,
        warning: String,
    ) -> DiffResult {
        DiffResult {
            version: Self::SCHEMA_VERSION.to_string(),
            left,
            right,
            complete: false,
            warnings: vec![warning],
        }
    }

    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();
        for token in &self.left {
            match token.change() {
                TokenChange::Unchanged => summary.unchanged += 1,
                TokenChange::Removed => summary.removed += 1,
                TokenChange::Added => {}
            }
        }
        summary.added = self.right.iter().filter(|t| t.added).count();
        summary
    }

    /// True when any token was added or removed.
    pub fn has_changes(&self) -> bool {
        self.left.iter().any(|t| t.removed) || self.right.iter().any(|t| t.added)
    }
}
