//! Token alignment.
//!
//! Alignment turns two token sequences into an edit script of [`AlignOp`]s
//! in forward order:
//!
//! 1. **Matrix** (`matrix.rs`): dense LCS length table over both sequences.
//! 2. **Walk** (`lcs.rs`): backward walk over the matrix, honoring a
//!    [`TieBreak`](crate::config::TieBreak) when two alignments are equally long.
//! 3. **Positional** (`positional.rs`): linear index-by-index alignment used
//!    when inputs exceed the configured size limits.
//!
//! Every script produced here covers each left index and each right index
//! exactly once, in increasing order on both sides.

pub(crate) mod lcs;
pub(crate) mod matrix;
pub(crate) mod positional;

pub use lcs::align_lcs;
pub use matrix::AlignmentMatrix;
pub use positional::align_positional;

/// One step of an alignment, referring to token indices on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignOp {
    /// `left[left] == right[right]`; the token is shared.
    Keep { left: usize, right: usize },
    /// `right[right]` exists only on the right.
    Insert { right: usize },
    /// `left[left]` exists only on the left.
    Delete { left: usize },
}

impl AlignOp {
    pub fn is_keep(&self) -> bool {
        matches!(self, AlignOp::Keep { .. })
    }
}

#[cfg(test)]
pub(crate) fn assert_covers_both_sides(ops: &[AlignOp], left_len: usize, right_len: usize) {
    let mut next_left = 0usize;
    let mut next_right = 0usize;
    for op in ops {
        match *op {
            AlignOp::Keep { left, right } => {
                assert_eq!(left, next_left, "left index out of order in {ops:?}");
                assert_eq!(right, next_right, "right index out of order in {ops:?}");
                next_left += 1;
                next_right += 1;
            }
            AlignOp::Insert { right } => {
                assert_eq!(right, next_right, "right index out of order in {ops:?}");
                next_right += 1;
            }
            AlignOp::Delete { left } => {
                assert_eq!(left, next_left, "left index out of order in {ops:?}");
                next_left += 1;
            }
        }
    }
    assert_eq!(next_left, left_len, "left side not fully covered");
    assert_eq!(next_right, right_len, "right side not fully covered");
}
