//! DTW distance value type.

use std::fmt;

/// Accumulated DTW cost together with its path-length normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DtwDistance {
    raw: f64,
    normalized: f64,
}

impl DtwDistance {
    /// Build a distance from the accumulated cost of an `n` by `m` alignment.
    ///
    /// The normalized distance divides by `n + m`.
    pub(crate) fn from_cost(raw: f64, n: usize, m: usize) -> Self {
        Self {
            raw,
            normalized: raw / (n + m) as f64,
        }
    }

    /// Return the accumulated cost `D[n][m]`.
    #[must_use]
    pub fn raw(self) -> f64 {
        self.raw
    }

    /// Return the cost divided by the combined sequence length `n + m`.
    #[must_use]
    pub fn normalized(self) -> f64 {
        self.normalized
    }
}

impl fmt::Display for DtwDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} (normalized {:.6})", self.raw, self.normalized)
    }
}
