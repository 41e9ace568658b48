//! Error types for DTW computation.

/// Errors from sequence validation and DTW distance computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DtwError {
    /// Returned when an empty slice is provided as a sequence.
    #[error("sequence must be non-empty")]
    EmptySeries,

    /// Returned when a sequence contains NaN, infinity, or negative infinity.
    #[error("sequence contains non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the first non-finite value found.
        index: usize,
    },

    /// Returned when the warping window leaves the final cell unreachable.
    #[error("no warping path of a {n}x{m} alignment fits the window")]
    NoWarpingPath {
        /// Length of the query sequence.
        n: usize,
        /// Length of the reference sequence.
        m: usize,
    },
}
