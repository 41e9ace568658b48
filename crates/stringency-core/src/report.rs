//! Top-K selection and the renderer-agnostic comparison chart model.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::builder::StringencyTable;
use crate::error::AnalysisError;
use crate::ranked::{EngineKind, RankedCountry};

/// Line width of the focal country.
pub const FOCAL_LINE_WIDTH: f64 = 8.0;
/// Line width of every other country.
pub const LINE_WIDTH: f64 = 3.0;

/// The first `k` entries of a ranked, filtered list.
#[must_use]
pub fn select_top(ranked: &[RankedCountry], k: usize) -> &[RankedCountry] {
    &ranked[..k.min(ranked.len())]
}

/// One country's stringency curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLine {
    /// Legend label, the country name.
    pub label: String,
    /// One value per day of the window.
    pub values: Vec<f64>,
    /// Stroke width.
    pub width: f64,
    /// True for the focal country.
    pub emphasized: bool,
}

/// Line chart of daily stringency for the selected countries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Fixed y axis range.
    pub y_range: (f64, f64),
    /// Number of days on the x axis.
    pub n_days: usize,
    /// Lines in ranking order.
    pub lines: Vec<ChartLine>,
}

impl Chart {
    /// Build the comparison chart for one engine's selection.
    ///
    /// An empty selection yields a chart with axes and no lines.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnknownCountry`] if a selected country has no
    /// row in `table`.
    #[instrument(skip(selected, table), fields(engine = %kind, n_selected = selected.len()))]
    pub fn comparison(
        kind: EngineKind,
        top_k: usize,
        selected: &[RankedCountry],
        table: &StringencyTable,
        focal: &str,
    ) -> Result<Self, AnalysisError> {
        let lines = selected
            .iter()
            .map(|entry| {
                let emphasized = entry.country.as_str() == focal;
                Ok(ChartLine {
                    label: entry.country.to_string(),
                    values: table.series(entry.country.as_str())?.to_vec(),
                    width: if emphasized { FOCAL_LINE_WIDTH } else { LINE_WIDTH },
                    emphasized,
                })
            })
            .collect::<Result<Vec<_>, AnalysisError>>()?;
        debug!(n_lines = lines.len(), "chart assembled");

        Ok(Self {
            title: format!("Top-{top_k}: {}", kind.description()),
            x_label: "Days".to_string(),
            y_label: "Stringency".to_string(),
            y_range: (0.0, 100.0),
            n_days: table.total_days(),
            lines,
        })
    }

    /// Return true if the chart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::builder::build;
    use crate::domain::{CountryName, DateWindow, StringencyRecord};

    fn table() -> StringencyTable {
        let start = NaiveDate::from_ymd_opt(2020, 4, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 4, 3).unwrap();
        let records = vec![
            StringencyRecord::new("Focal", start, Some(10.0)),
            StringencyRecord::new("Focal", start.succ_opt().unwrap(), Some(20.0)),
            StringencyRecord::new("Other", start, Some(30.0)),
            StringencyRecord::new("Other", start.succ_opt().unwrap(), Some(40.0)),
        ];
        build(&records, DateWindow::new(start, end).unwrap())
    }

    fn ranked(names: &[&str]) -> Vec<RankedCountry> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| RankedCountry::new(CountryName::new(*n), i as f64))
            .collect()
    }

    #[test]
    fn select_top_truncates_or_keeps_all() {
        let list = ranked(&["A", "B", "C"]);
        assert_eq!(select_top(&list, 2).len(), 2);
        assert_eq!(select_top(&list, 10).len(), 3);
        assert!(select_top(&[], 5).is_empty());
    }

    #[test]
    fn focal_line_is_emphasized() {
        let chart =
            Chart::comparison(EngineKind::Euclidean, 5, &ranked(&["Focal", "Other"]), &table(), "Focal").unwrap();
        assert_eq!(chart.title, "Top-5: One-dimensional Euclidean Distance");
        assert_eq!(chart.n_days, 2);
        assert_eq!(chart.y_range, (0.0, 100.0));
        assert!(chart.lines[0].emphasized);
        assert_eq!(chart.lines[0].width, FOCAL_LINE_WIDTH);
        assert_eq!(chart.lines[1].width, LINE_WIDTH);
        assert_eq!(chart.lines[1].values, vec![30.0, 40.0]);
    }

    #[test]
    fn empty_selection_gives_empty_chart() {
        let chart = Chart::comparison(EngineKind::Dtw, 3, &[], &table(), "Focal").unwrap();
        assert_eq!(chart.title, "Top-3: Dynamic Time Warping");
        assert!(chart.is_empty());
    }

    #[test]
    fn unknown_selected_country_is_an_error() {
        let err = Chart::comparison(EngineKind::Dtw, 3, &ranked(&["Nowhere"]), &table(), "Focal").unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownCountry { .. }));
    }
}
