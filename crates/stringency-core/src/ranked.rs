//! Ranking output shared by both distance engines.

use std::fmt;

use serde::Serialize;

use crate::continent::ContinentCode;
use crate::domain::CountryName;

/// Which distance engine produced a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// Mean absolute daily deviation over day-aligned series.
    Euclidean,
    /// Dynamic Time Warping distance.
    Dtw,
}

impl EngineKind {
    /// Short identifier used in file names and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Dtw => "dtw",
        }
    }

    /// Human-readable name of the distance measure.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Euclidean => "One-dimensional Euclidean Distance",
            Self::Dtw => "Dynamic Time Warping",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One country's distance to the focal country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCountry {
    /// The compared country.
    pub country: CountryName,
    /// Engine distance: mean absolute deviation, or accumulated DTW cost.
    pub distance: f64,
    /// DTW cost divided by `n + m`; absent for the Euclidean engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_distance: Option<f64>,
    /// Continent, once resolved.
    pub continent: Option<ContinentCode>,
}

impl RankedCountry {
    /// Create an entry without a normalized distance.
    pub fn new(country: CountryName, distance: f64) -> Self {
        Self {
            country,
            distance,
            normalized_distance: None,
            continent: None,
        }
    }

    /// Attach a normalized distance.
    #[must_use]
    pub fn with_normalized(mut self, normalized: f64) -> Self {
        self.normalized_distance = Some(normalized);
        self
    }
}
