//! Word Diff: word-level comparison of two texts.
//!
//! This crate provides functionality for:
//! - Splitting texts into whitespace-delimited tokens
//! - Aligning the token sequences with an exact longest-common-subsequence walk
//! - Classifying every token as unchanged, removed (left) or added (right)
//! - Rendering the result as escaped side-by-side markup or JSON
//!
//! # Quick Start
//!
//! ```
//! use word_diff::{DiffConfig, try_diff_texts};
//!
//! let result = try_diff_texts("the cat sat", "the big cat sat", &DiffConfig::default())?;
//! let added: Vec<_> = result.right.iter().filter(|t| t.added).map(|t| t.text.as_str()).collect();
//! assert_eq!(added, ["big"]);
//! # Ok::<(), word_diff::DiffError>(())
//! ```

pub mod alignment;
mod config;
mod diff;
mod engine;
pub mod error_codes;
mod escape;
mod output;
mod tokenize;

pub use alignment::{AlignOp, AlignmentMatrix, align_lcs, align_positional};
pub use config::{ConfigError, DiffConfig, DiffConfigBuilder, LimitBehavior, TieBreak};
pub use diff::{ClassifiedToken, DiffError, DiffResult, DiffSummary, TokenChange};
pub use engine::{diff_texts, try_diff_texts};
pub use escape::escape_html;
pub use output::html::{render_html, write_html};
pub use output::json::{deserialize_diff_result, serialize_diff_result};
pub use tokenize::tokenize;
