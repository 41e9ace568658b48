//! Dense country-by-day stringency matrix.

/// Row-major `n_rows x n_days` matrix of stringency values.
///
/// Every cell starts as `NaN`, the "missing" sentinel. A row is complete
/// when all of its cells hold a finite value.
#[derive(Debug, Clone)]
pub struct StringencyMatrix {
    n_rows: usize,
    n_days: usize,
    values: Vec<f64>,
}

impl StringencyMatrix {
    /// Create a matrix with every cell missing.
    #[must_use]
    pub fn new(n_rows: usize, n_days: usize) -> Self {
        Self {
            n_rows,
            n_days,
            values: vec![f64::NAN; n_rows * n_days],
        }
    }

    /// Number of rows (countries).
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns (days in the window).
    #[must_use]
    pub fn n_days(&self) -> usize {
        self.n_days
    }

    /// Value at `(row, day)`; `NaN` when missing.
    ///
    /// # Panics
    ///
    /// Panics if `row >= n_rows` or `day >= n_days`.
    #[must_use]
    pub fn get(&self, row: usize, day: usize) -> f64 {
        assert!(row < self.n_rows, "row {row} out of bounds for {} rows", self.n_rows);
        assert!(day < self.n_days, "day {day} out of bounds for {} days", self.n_days);
        self.values[row * self.n_days + day]
    }

    pub(crate) fn set(&mut self, row: usize, day: usize, value: f64) {
        self.values[row * self.n_days + day] = value;
    }

    /// The full daily series of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= n_rows`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.n_rows, "row {row} out of bounds for {} rows", self.n_rows);
        &self.values[row * self.n_days..(row + 1) * self.n_days]
    }

    /// Number of missing (non-finite) days in a row.
    #[must_use]
    pub fn missing_days(&self, row: usize) -> usize {
        self.row(row).iter().filter(|v| !v.is_finite()).count()
    }

    /// Return true if every day of the row holds a value.
    #[must_use]
    pub fn is_complete(&self, row: usize) -> bool {
        self.missing_days(row) == 0
    }
}
