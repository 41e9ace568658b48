//! Comparison query configuration.

use serde::Serialize;
use stringency_dtw::Dtw;

use crate::domain::DateWindow;
use crate::error::AnalysisError;
use crate::ranked::EngineKind;

/// Which engines a comparison runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineSelection {
    /// Euclidean then DTW.
    #[default]
    Both,
    /// Euclidean only.
    Euclidean,
    /// DTW only.
    Dtw,
}

impl EngineSelection {
    /// The selected engines in run order.
    #[must_use]
    pub fn kinds(self) -> &'static [EngineKind] {
        match self {
            Self::Both => &[EngineKind::Euclidean, EngineKind::Dtw],
            Self::Euclidean => &[EngineKind::Euclidean],
            Self::Dtw => &[EngineKind::Dtw],
        }
    }
}

/// Parameters of one comparison query.
///
/// # Example
///
/// ```
/// use stringency_core::{CompareConfig, DateWindow};
///
/// let config = CompareConfig::new(DateWindow::default())
///     .with_top_k(10)?
///     .with_min_population(1_000_000.0)?;
/// assert_eq!(config.top_k(), 10);
/// # Ok::<(), stringency_core::AnalysisError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompareConfig {
    window: DateWindow,
    min_population: f64,
    top_k: usize,
    filter_by_continent: bool,
    dtw: Dtw,
    engines: EngineSelection,
}

impl CompareConfig {
    /// Default population threshold.
    pub const DEFAULT_MIN_POPULATION: f64 = 300_000.0;
    /// Default number of charted countries.
    pub const DEFAULT_TOP_K: usize = 5;

    /// Create a configuration for `window` with default parameters.
    #[must_use]
    pub fn new(window: DateWindow) -> Self {
        Self {
            window,
            min_population: Self::DEFAULT_MIN_POPULATION,
            top_k: Self::DEFAULT_TOP_K,
            filter_by_continent: true,
            dtw: Dtw::default(),
            engines: EngineSelection::default(),
        }
    }

    /// Set the population threshold; only countries strictly above it are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidMinPopulation`] if `value` is negative
    /// or not finite.
    pub fn with_min_population(mut self, value: f64) -> Result<Self, AnalysisError> {
        if !value.is_finite() || value < 0.0 {
            return Err(AnalysisError::InvalidMinPopulation { value });
        }
        self.min_population = value;
        Ok(self)
    }

    /// Set how many countries are reported per engine.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidTopK`] if `top_k` is zero.
    pub fn with_top_k(mut self, top_k: usize) -> Result<Self, AnalysisError> {
        if top_k == 0 {
            return Err(AnalysisError::InvalidTopK);
        }
        self.top_k = top_k;
        Ok(self)
    }

    /// Restrict results to the focal country's continent.
    #[must_use]
    pub fn with_filter_by_continent(mut self, enabled: bool) -> Self {
        self.filter_by_continent = enabled;
        self
    }

    /// Set the DTW step pattern and window.
    #[must_use]
    pub fn with_dtw(mut self, dtw: Dtw) -> Self {
        self.dtw = dtw;
        self
    }

    /// Choose which engines run.
    #[must_use]
    pub fn with_engines(mut self, engines: EngineSelection) -> Self {
        self.engines = engines;
        self
    }

    /// The comparison window.
    #[must_use]
    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// The population threshold.
    #[must_use]
    pub fn min_population(&self) -> f64 {
        self.min_population
    }

    /// Number of countries reported per engine.
    #[must_use]
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Whether the continent filter is enabled.
    #[must_use]
    pub fn filter_by_continent(&self) -> bool {
        self.filter_by_continent
    }

    /// The DTW configuration.
    #[must_use]
    pub fn dtw(&self) -> Dtw {
        self.dtw
    }

    /// The engines to run.
    #[must_use]
    pub fn engines(&self) -> EngineSelection {
        self.engines
    }
}
