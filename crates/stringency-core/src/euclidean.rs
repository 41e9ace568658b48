//! One-dimensional Euclidean engine: mean absolute daily deviation.

use tracing::{debug, info, instrument};

use crate::builder::StringencyTable;
use crate::engine::DistanceEngine;
use crate::error::AnalysisError;
use crate::index::CountryIndex;
use crate::matrix::StringencyMatrix;
use crate::ranked::{EngineKind, RankedCountry};

/// Euclidean distance engine. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl DistanceEngine for Euclidean {
    fn kind(&self) -> EngineKind {
        EngineKind::Euclidean
    }

    fn rank(&self, table: &StringencyTable, focal: &str) -> Result<Vec<RankedCountry>, AnalysisError> {
        rank_matrix(table.matrix(), table.index(), focal, table.total_days())
    }
}

/// Rank every complete row of `matrix` by
/// `(1 / total_days) * sum_day |x[day] - focal[day]|`, ascending.
///
/// Incomplete rows are skipped. Ties keep index order. A zero-day window
/// yields an empty ranking.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`AnalysisError::DayCountMismatch`] | `total_days` exceeds `matrix.n_days()` |
/// | [`AnalysisError::UnknownCountry`] | `focal` is not indexed |
/// | [`AnalysisError::IncompleteFocal`] | the focal row has missing days |
#[instrument(skip(matrix, index), fields(n_countries = index.len()))]
pub fn rank_matrix(
    matrix: &StringencyMatrix,
    index: &CountryIndex,
    focal: &str,
    total_days: usize,
) -> Result<Vec<RankedCountry>, AnalysisError> {
    if total_days > matrix.n_days() {
        return Err(AnalysisError::DayCountMismatch {
            expected: matrix.n_days(),
            got: total_days,
        });
    }
    if total_days == 0 {
        debug!("empty window, nothing to rank");
        return Ok(Vec::new());
    }

    let focal_row = index.id(focal)?;
    let missing_days = matrix.missing_days(focal_row);
    if missing_days > 0 {
        return Err(AnalysisError::IncompleteFocal {
            name: focal.to_string(),
            missing_days,
        });
    }
    let reference = &matrix.row(focal_row)[..total_days];

    let mut ranked: Vec<RankedCountry> = index
        .iter()
        .filter(|&(row, _)| matrix.is_complete(row))
        .map(|(row, name)| {
            let total: f64 = matrix.row(row)[..total_days]
                .iter()
                .zip(reference)
                .map(|(x, f)| (x - f).abs())
                .sum();
            RankedCountry::new(name.clone(), total / total_days as f64)
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    info!(n_ranked = ranked.len(), "euclidean ranking complete");
    Ok(ranked)
}
