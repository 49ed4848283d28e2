use serde::{Deserialize, Serialize};

/// Subplot grid: one cell per group, filled row-major, at most two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    /// A single group gets the whole figure; more groups are laid out two per row.
    pub fn for_group_count(n: usize) -> Self {
        if n > 1 {
            Self {
                rows: n.div_ceil(2),
                cols: 2,
            }
        } else {
            Self { rows: 1, cols: 1 }
        }
    }

    /// `(row, col)` of the `index`-th cell.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}
