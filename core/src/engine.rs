//! Diff entry points: tokenize, align, classify.

use crate::alignment::{AlignOp, AlignmentMatrix, align_lcs, align_positional};
use crate::config::{DiffConfig, LimitBehavior, TieBreak};
use crate::diff::{ClassifiedToken, DiffError, DiffResult};
use crate::tokenize::tokenize;

/// Computes the word-level diff of `text1` against `text2`.
///
/// Total over all inputs: no size limits are applied and ties between
/// equally long alignments are resolved in favour of "added". Callers
/// diffing untrusted input should use [`try_diff_texts`] so the quadratic
/// alignment step is bounded.
pub fn diff_texts(text1: &str, text2: &str) -> DiffResult {
    let left = tokenize(text1);
    let right = tokenize(text2);
    log::debug!(
        "diffing {} left tokens against {} right tokens",
        left.len(),
        right.len()
    );
    let ops = align_lcs(&left, &right, TieBreak::default());
    let (left, right) = classify(&left, &right, &ops);
    DiffResult::new(left, right)
}

/// Computes the word-level diff with the limits and tie-break from `config`.
///
/// Returns [`DiffError::LimitsExceeded`] when the inputs are too large and
/// `config.on_limit_exceeded` is [`LimitBehavior::ReturnError`]. With
/// [`LimitBehavior::FallbackToPositional`] an index-by-index alignment is
/// returned instead, marked incomplete.
pub fn try_diff_texts(
    text1: &str,
    text2: &str,
    config: &DiffConfig,
) -> Result<DiffResult, DiffError> {
    let left = tokenize(text1);
    let right = tokenize(text2);
    log::debug!(
        "diffing {} left tokens against {} right tokens",
        left.len(),
        right.len()
    );

    if !within_limits(left.len(), right.len(), config) {
        return match config.on_limit_exceeded {
            LimitBehavior::ReturnError => Err(DiffError::LimitsExceeded {
                left_tokens: left.len(),
                right_tokens: right.len(),
                max_tokens: config.max_tokens,
                max_cells: config.max_matrix_cells,
            }),
            LimitBehavior::FallbackToPositional => {
                let warning = format!(
                    "alignment limits exceeded (left={} tokens, right={} tokens, max_tokens={}, max_matrix_cells={}); fell back to positional alignment; unchanged tokens may not be a longest common subsequence",
                    left.len(),
                    right.len(),
                    config.max_tokens,
                    config.max_matrix_cells,
                );
                log::info!("{warning}");
                let ops = align_positional(&left, &right);
                let (left, right) = classify(&left, &right, &ops);
                Ok(DiffResult::with_partial_result(left, right, warning))
            }
        };
    }

    let ops = align_lcs(&left, &right, config.tie_break);
    let (left, right) = classify(&left, &right, &ops);
    Ok(DiffResult::new(left, right))
}

fn within_limits(left_len: usize, right_len: usize, config: &DiffConfig) -> bool {
    let total = left_len as u64 + right_len as u64;
    if total > u64::from(config.max_tokens) {
        return false;
    }
    match AlignmentMatrix::cell_count(left_len, right_len) {
        Some(cells) => cells <= config.max_matrix_cells,
        None => false,
    }
}

fn classify(
    left: &[&str],
    right: &[&str],
    ops: &[AlignOp],
) -> (Vec<ClassifiedToken>, Vec<ClassifiedToken>) {
    let mut left_out = Vec::with_capacity(left.len());
    let mut right_out = Vec::with_capacity(right.len());

    for op in ops {
        match *op {
            AlignOp::Keep { left: l, right: r } => {
                left_out.push(ClassifiedToken::unchanged(left[l]));
                right_out.push(ClassifiedToken::unchanged(right[r]));
            }
            AlignOp::Insert { right: r } => right_out.push(ClassifiedToken::added(right[r])),
            AlignOp::Delete { left: l } => left_out.push(ClassifiedToken::removed(left[l])),
        }
    }

    debug_assert_eq!(left_out.len(), left.len());
    debug_assert_eq!(right_out.len(), right.len());
    (left_out, right_out)
}
