//! Common interface of the distance engines.

use crate::builder::StringencyTable;
use crate::error::AnalysisError;
use crate::ranked::{EngineKind, RankedCountry};

/// A strategy that ranks every comparable country by distance to a focal one.
///
/// Implementations return the focal country itself (distance zero) along
/// with the others, sorted ascending by the engine's ranking distance.
/// Countries excluded by the builder never appear.
pub trait DistanceEngine {
    /// Which engine this is.
    fn kind(&self) -> EngineKind;

    /// Rank all complete countries in `table` against `focal`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AnalysisError::UnknownCountry`] | `focal` has no records in the window |
    /// | [`AnalysisError::IncompleteFocal`] | `focal` has missing days |
    fn rank(&self, table: &StringencyTable, focal: &str) -> Result<Vec<RankedCountry>, AnalysisError>;
}
