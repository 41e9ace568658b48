//! Error types for stringency analysis and continent resolution.

use chrono::NaiveDate;
use stringency_dtw::DtwError;

/// Errors that abort a single comparison query.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Returned when a country name is not present in the windowed records.
    #[error("unknown country \"{name}\" (no records in the comparison window)")]
    UnknownCountry {
        /// The name that was looked up.
        name: String,
    },

    /// Returned when a row id is outside the country index.
    #[error("row {row} out of range for an index of {len} countries")]
    UnknownRow {
        /// The row id that was looked up.
        row: usize,
        /// Number of indexed countries.
        len: usize,
    },

    /// Returned when the focal country has missing days and cannot be compared.
    #[error("focal country \"{name}\" has {missing_days} missing day(s) in the window")]
    IncompleteFocal {
        /// The focal country.
        name: String,
        /// Number of days without a usable stringency value.
        missing_days: usize,
    },

    /// Returned when a requested day count exceeds the matrix width.
    #[error("requested {got} day(s) but the matrix holds {expected}")]
    DayCountMismatch {
        /// Days stored per matrix row.
        expected: usize,
        /// Days requested by the caller.
        got: usize,
    },

    /// Returned when the window end precedes its start.
    #[error("invalid window: end {end} precedes start {start}")]
    InvalidWindow {
        /// Inclusive start date.
        start: NaiveDate,
        /// Exclusive end date.
        end: NaiveDate,
    },

    /// Returned when zero countries are requested for the report.
    #[error("top_k must be at least 1")]
    InvalidTopK,

    /// Returned when the population threshold is negative or not a number.
    #[error("minimum population must be a non-negative number, got {value}")]
    InvalidMinPopulation {
        /// The rejected threshold.
        value: f64,
    },

    /// Returned when DTW cannot run on the focal country's own series.
    #[error("focal country \"{name}\" has an unusable series: {source}")]
    FocalSeries {
        /// The focal country.
        name: String,
        /// Underlying validation error.
        source: DtwError,
    },
}

/// Errors from country-name to continent resolution. Never fatal to a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The country name has no ISO 3166-1 alpha-2 mapping.
    #[error("no alpha-2 code for country name \"{name}\"")]
    UnknownCountryName {
        /// The unresolved name.
        name: String,
    },

    /// The alpha-2 code has no continent mapping.
    #[error("no continent for alpha-2 code \"{code}\"")]
    UnknownAlpha2 {
        /// The unresolved code.
        code: String,
    },

    /// A string is not one of AF, AS, EU, NA, OC, SA.
    #[error("invalid continent code \"{code}\"")]
    UnknownContinentCode {
        /// The rejected code.
        code: String,
    },
}
