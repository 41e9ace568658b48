//! Warping window constraints for DTW computation.

use std::ops::Range;

use serde::Serialize;

/// Constraint on which cells of the cost matrix a warping path may visit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "radius", rename_all = "snake_case")]
pub enum Window {
    /// Every cell is admissible.
    #[default]
    Unconstrained,

    /// Sakoe-Chiba band: cell `(i, j)` is admissible only if `|i - j| <= radius`.
    SakoeChiba(usize),
}

impl Window {
    /// Return the admissible zero-based column range for zero-based `row`.
    ///
    /// For Sakoe-Chiba this is `[row - r, row + r]` clipped to `[0, n_cols)`,
    /// and may be empty when `row - r >= n_cols`.
    #[must_use]
    pub fn column_range(&self, row: usize, n_cols: usize) -> Range<usize> {
        match self {
            Self::Unconstrained => 0..n_cols,
            Self::SakoeChiba(r) => {
                let start = row.saturating_sub(*r).min(n_cols);
                let end = (row + r + 1).min(n_cols);
                start..end
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_full_range() {
        let w = Window::Unconstrained;
        assert_eq!(w.column_range(0, 10), 0..10);
        assert_eq!(w.column_range(9, 10), 0..10);
    }

    #[test]
    fn sakoe_chiba_clips_at_edges() {
        let w = Window::SakoeChiba(2);
        assert_eq!(w.column_range(0, 10), 0..3);
        assert_eq!(w.column_range(5, 10), 3..8);
        assert_eq!(w.column_range(9, 10), 7..10);
    }

    #[test]
    fn sakoe_chiba_radius_zero_is_diagonal() {
        let w = Window::SakoeChiba(0);
        assert_eq!(w.column_range(4, 10), 4..5);
    }

    #[test]
    fn sakoe_chiba_row_past_last_column_is_empty() {
        let w = Window::SakoeChiba(1);
        assert!(w.column_range(6, 3).is_empty());
    }
}
