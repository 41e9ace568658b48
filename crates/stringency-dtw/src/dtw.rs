//! DTW distance computation.

use tracing::instrument;

use crate::distance::DtwDistance;
use crate::error::DtwError;
use crate::series::SeriesView;
use crate::step::StepPattern;
use crate::window::Window;

/// Immutable DTW configuration. Copyable and cheap to pass by value.
///
/// The cost matrix `D` is `(n+1) x (m+1)` with `D[0][0] = 0` and every other
/// cell on row 0 or column 0 set to infinity. Local cost is `|a[i-1] - b[j-1]|`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dtw {
    step: StepPattern,
    window: Window,
}

impl Dtw {
    /// Create an unconstrained, symmetric1 DTW calculator.
    #[must_use]
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Create a symmetric1 DTW calculator restricted to a Sakoe-Chiba band.
    #[must_use]
    pub fn with_sakoe_chiba(radius: usize) -> Self {
        Self {
            step: StepPattern::Symmetric1,
            window: Window::SakoeChiba(radius),
        }
    }

    /// Replace the step pattern.
    #[must_use]
    pub fn with_step_pattern(mut self, step: StepPattern) -> Self {
        self.step = step;
        self
    }

    /// Replace the warping window.
    #[must_use]
    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    /// Return the step pattern.
    #[must_use]
    pub fn step_pattern(&self) -> StepPattern {
        self.step
    }

    /// Return the warping window.
    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }

    /// Compute the DTW distance between two sequences.
    ///
    /// Keeps only two rows of the cost matrix. Runs in O(n * m) time and
    /// O(m) space.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::NoWarpingPath`] | The window excludes every path to `(n, m)` |
    #[instrument(level = "trace", skip_all, fields(n = a.len(), m = b.len()))]
    pub fn distance(&self, a: SeriesView<'_>, b: SeriesView<'_>) -> Result<DtwDistance, DtwError> {
        let (a, b) = (a.as_slice(), b.as_slice());
        let (n, m) = (a.len(), b.len());

        let mut prev = vec![f64::INFINITY; m + 1];
        let mut curr = vec![f64::INFINITY; m + 1];
        prev[0] = 0.0;

        for i in 1..=n {
            curr.fill(f64::INFINITY);
            for col in self.window.column_range(i - 1, m) {
                let j = col + 1;
                let d = (a[i - 1] - b[col]).abs();
                curr[j] = if i == 1 && j == 1 {
                    d
                } else {
                    self.accumulate(d, prev[j - 1], prev[j], curr[j - 1])
                };
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        let total = prev[m];
        if !total.is_finite() {
            return Err(DtwError::NoWarpingPath { n, m });
        }
        Ok(DtwDistance::from_cost(total, n, m))
    }

    /// Validate two raw slices and compute their DTW distance.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptySeries`] | Either slice is empty |
    /// | [`DtwError::NonFiniteValue`] | Either slice holds NaN or infinity |
    /// | [`DtwError::NoWarpingPath`] | The window excludes every path to `(n, m)` |
    pub fn distance_slices(&self, a: &[f64], b: &[f64]) -> Result<DtwDistance, DtwError> {
        self.distance(SeriesView::new(a)?, SeriesView::new(b)?)
    }

    /// Apply the step pattern to one cell given its three predecessors.
    fn accumulate(&self, d: f64, diag: f64, above: f64, left: f64) -> f64 {
        let via_diag = diag + self.step.diagonal_weight() * d;
        via_diag.min(above + d).min(left + d)
    }
}
