//! DTW engine: alignment-tolerant ranking against the focal country.

use stringency_dtw::{Dtw, SeriesView};
use tracing::{debug, info, instrument, warn};

use crate::builder::StringencyTable;
use crate::domain::CountryName;
use crate::engine::DistanceEngine;
use crate::error::AnalysisError;
use crate::ranked::{EngineKind, RankedCountry};

/// Ranks countries by normalized DTW distance to the focal series.
#[derive(Debug, Clone, Copy, Default)]
pub struct DtwEngine {
    dtw: Dtw,
}

impl DtwEngine {
    /// Create an engine around a configured [`Dtw`].
    #[must_use]
    pub fn new(dtw: Dtw) -> Self {
        Self { dtw }
    }

    /// Return the DTW configuration.
    #[must_use]
    pub fn dtw(&self) -> Dtw {
        self.dtw
    }

    /// Rank an arbitrary mapping of country to series against `focal`.
    ///
    /// Series may have different lengths. A country whose series is empty,
    /// holds a non-finite value, or cannot be aligned within the warping
    /// window is logged and skipped. The result is sorted ascending by
    /// normalized distance; ties keep input order.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AnalysisError::UnknownCountry`] | `focal` is not a key of `series` |
    /// | [`AnalysisError::FocalSeries`] | the focal series itself is unusable |
    #[instrument(skip(self, series), fields(n_series = series.len()))]
    pub fn rank_series(
        &self,
        series: &[(&CountryName, &[f64])],
        focal: &str,
    ) -> Result<Vec<RankedCountry>, AnalysisError> {
        let focal_values = series
            .iter()
            .find(|(name, _)| name.as_str() == focal)
            .map(|(_, values)| *values)
            .ok_or_else(|| AnalysisError::UnknownCountry { name: focal.to_string() })?;
        let reference = SeriesView::new(focal_values).map_err(|source| AnalysisError::FocalSeries {
            name: focal.to_string(),
            source,
        })?;

        let mut ranked = Vec::with_capacity(series.len());
        for &(name, values) in series {
            let result = SeriesView::new(values).and_then(|view| self.dtw.distance(reference, view));
            match result {
                Ok(d) => {
                    debug!(country = %name, raw = d.raw(), normalized = d.normalized(), "dtw distance");
                    ranked.push(RankedCountry::new(name.clone(), d.raw()).with_normalized(d.normalized()));
                }
                Err(e) => warn!(country = %name, error = %e, "dtw failed, country skipped"),
            }
        }

        ranked.sort_by(|a, b| {
            let a = a.normalized_distance.unwrap_or(f64::INFINITY);
            let b = b.normalized_distance.unwrap_or(f64::INFINITY);
            a.total_cmp(&b)
        });
        info!(n_ranked = ranked.len(), "dtw ranking complete");
        Ok(ranked)
    }
}

impl DistanceEngine for DtwEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Dtw
    }

    fn rank(&self, table: &StringencyTable, focal: &str) -> Result<Vec<RankedCountry>, AnalysisError> {
        if table.total_days() == 0 {
            debug!("empty window, nothing to rank");
            return Ok(Vec::new());
        }
        let row = table.index().id(focal)?;
        let missing_days = table.matrix().missing_days(row);
        if missing_days > 0 {
            return Err(AnalysisError::IncompleteFocal {
                name: focal.to_string(),
                missing_days,
            });
        }
        self.rank_series(&table.series_by_country(), focal)
    }
}
