//! Local step patterns for the DTW recurrence.

use serde::Serialize;

/// Recurrence used to accumulate local costs along the warping path.
///
/// With local cost `d = |a[i] - b[j]|`:
///
/// | Pattern | `D[i][j]` |
/// |---|---|
/// | `Symmetric1` | `d + min(D[i-1][j-1], D[i-1][j], D[i][j-1])` |
/// | `Symmetric2` | `min(D[i-1][j-1] + 2d, D[i-1][j] + d, D[i][j-1] + d)` |
///
/// The first cell always carries weight 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPattern {
    /// Classic recurrence; a constant offset `c` over `n` days costs `n * c`.
    #[default]
    Symmetric1,
    /// Diagonal moves weighted twice, making every path's weight total `n + m`.
    Symmetric2,
}

impl StepPattern {
    /// Weight applied to the local cost of a diagonal move.
    #[must_use]
    pub(crate) fn diagonal_weight(self) -> f64 {
        match self {
            Self::Symmetric1 => 1.0,
            Self::Symmetric2 => 2.0,
        }
    }
}

impl std::str::FromStr for StepPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "symmetric1" => Ok(Self::Symmetric1),
            "symmetric2" => Ok(Self::Symmetric2),
            other => Err(format!(
                "unknown step pattern: {other} (expected symmetric1 or symmetric2)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_patterns() {
        assert_eq!("symmetric1".parse::<StepPattern>(), Ok(StepPattern::Symmetric1));
        assert_eq!("symmetric2".parse::<StepPattern>(), Ok(StepPattern::Symmetric2));
        assert!("asymmetric".parse::<StepPattern>().is_err());
    }
}
