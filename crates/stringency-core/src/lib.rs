//! Stringency time-series analysis: country index, aligned daily matrix,
//! Euclidean and DTW ranking engines, population and continent filters, and the
//! chart model used by the reporter.
//!
//! Pure computation; loading CSV files and rendering charts live in
//! `stringency-io`.

mod builder;
mod config;
mod continent;
mod country_table;
mod domain;
mod dtw_engine;
mod engine;
mod error;
mod euclidean;
mod filter;
mod index;
mod matrix;
mod ranked;
mod report;

pub use builder::{build, StringencyTable};
pub use config::{CompareConfig, EngineSelection};
pub use continent::{annotate_continents, Alpha2, ContinentCode, ContinentResolver, CountryTable};
pub use domain::{CountryName, DateWindow, PopulationRecord, PopulationTable, StringencyRecord};
pub use dtw_engine::DtwEngine;
pub use engine::DistanceEngine;
pub use error::{AnalysisError, ResolveError};
pub use euclidean::{rank_matrix, Euclidean};
pub use filter::{ContinentEquals, CountryFilter, FilterChain, MinPopulation};
pub use index::CountryIndex;
pub use matrix::StringencyMatrix;
pub use ranked::{EngineKind, RankedCountry};
pub use report::{select_top, Chart, ChartLine};
