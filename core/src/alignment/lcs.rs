//! Exact LCS alignment via a backward walk over [`AlignmentMatrix`].

use super::AlignOp;
use super::matrix::AlignmentMatrix;
use crate::config::TieBreak;

/// Aligns `left` against `right` so that the kept tokens form a longest
/// common subsequence.
///
/// The walk starts at the end of both sequences. Equal tokens are always
/// kept; otherwise the step that preserves the larger LCS length is taken,
/// and `tie_break` decides when both neighbours are equally long.
/// Time and space are `O(left.len() * right.len())`.
pub fn align_lcs<T: PartialEq>(left: &[T], right: &[T], tie_break: TieBreak) -> Vec<AlignOp> {
    let matrix = AlignmentMatrix::build(left, right);
    walk(&matrix, left, right, tie_break)
}

pub(crate) fn walk<T: PartialEq>(
    matrix: &AlignmentMatrix,
    left: &[T],
    right: &[T],
    tie_break: TieBreak,
) -> Vec<AlignOp> {
    let mut ops = Vec::with_capacity(left.len() + right.len());
    let mut i = left.len();
    let mut j = right.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && left[i - 1] == right[j - 1] {
            ops.push(AlignOp::Keep {
                left: i - 1,
                right: j - 1,
            });
            i -= 1;
            j -= 1;
            continue;
        }

        let insert = match tie_break {
            TieBreak::PreferAdded => {
                j > 0 && (i == 0 || matrix.get(i, j - 1) >= matrix.get(i - 1, j))
            }
            TieBreak::PreferRemoved => {
                !(i > 0 && (j == 0 || matrix.get(i - 1, j) >= matrix.get(i, j - 1)))
            }
        };

        if insert {
            ops.push(AlignOp::Insert { right: j - 1 });
            j -= 1;
        } else {
            ops.push(AlignOp::Delete { left: i - 1 });
            i -= 1;
        }
    }

    ops.reverse();
    ops
}
