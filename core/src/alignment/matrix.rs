/// LCS length table for two token sequences.
///
/// Cell `(i, j)` holds the length of the longest common subsequence of the
/// first `i` left tokens and the first `j` right tokens. Row 0 and column 0
/// are zero. Stored row-major in a single allocation of
/// `(left + 1) * (right + 1)` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    cells: Vec<u32>,
    width: usize,
    rows: usize,
}

impl AlignmentMatrix {
    pub fn build<T: PartialEq>(left: &[T], right: &[T]) -> Self {
        let rows = left.len() + 1;
        let width = right.len() + 1;
        let mut cells = vec![0u32; rows * width];

        for i in 1..rows {
            let row = i * width;
            let prev = (i - 1) * width;
            for j in 1..width {
                cells[row + j] = if left[i - 1] == right[j - 1] {
                    cells[prev + j - 1] + 1
                } else {
                    cells[prev + j].max(cells[row + j - 1])
                };
            }
        }

        Self { cells, width, rows }
    }

    /// Number of cells `build` allocates for sequences of these lengths, or
    /// `None` on overflow.
    pub fn cell_count(left_len: usize, right_len: usize) -> Option<u64> {
        let rows = (left_len as u64).checked_add(1)?;
        let cols = (right_len as u64).checked_add(1)?;
        rows.checked_mul(cols)
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        debug_assert!(i < self.rows && j < self.width);
        self.cells[i * self.width + j]
    }

    /// Length of the longest common subsequence of the full sequences.
    pub fn lcs_len(&self) -> u32 {
        self.get(self.rows - 1, self.width - 1)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.width
    }
}
