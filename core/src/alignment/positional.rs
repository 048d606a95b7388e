//! Linear fallback alignment for inputs that exceed the LCS size limits.

use super::AlignOp;

/// Aligns tokens index-by-index in `O(left.len() + right.len())`.
///
/// Equal tokens at the same index are kept. Otherwise the left token (if
/// any) is deleted, then the right token (if any) is inserted. Kept tokens
/// are still a common subsequence, just not necessarily a longest one.
pub fn align_positional<T: PartialEq>(left: &[T], right: &[T]) -> Vec<AlignOp> {
    let len = left.len().max(right.len());
    let mut ops = Vec::with_capacity(left.len() + right.len());

    for k in 0..len {
        match (left.get(k), right.get(k)) {
            (Some(l), Some(r)) if l == r => ops.push(AlignOp::Keep { left: k, right: k }),
            (l, r) => {
                if l.is_some() {
                    ops.push(AlignOp::Delete { left: k });
                }
                if r.is_some() {
                    ops.push(AlignOp::Insert { right: k });
                }
            }
        }
    }

    ops
}
