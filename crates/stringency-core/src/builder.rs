//! Time-series builder: windowed records to an aligned country-by-day matrix.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, info, instrument, warn};

use crate::domain::{CountryName, DateWindow, StringencyRecord};
use crate::error::AnalysisError;
use crate::index::CountryIndex;
use crate::matrix::StringencyMatrix;

/// Aligned daily stringency data for every country seen in the window.
#[derive(Debug, Clone)]
pub struct StringencyTable {
    window: DateWindow,
    index: CountryIndex,
    matrix: StringencyMatrix,
    excluded: BTreeSet<CountryName>,
}

impl StringencyTable {
    /// The comparison window the table was built for.
    #[must_use]
    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// Country name to row id mapping, excluded countries included.
    #[must_use]
    pub fn index(&self) -> &CountryIndex {
        &self.index
    }

    /// The dense value matrix; missing cells hold `NaN`.
    #[must_use]
    pub fn matrix(&self) -> &StringencyMatrix {
        &self.matrix
    }

    /// Countries with at least one missing day, in name order.
    #[must_use]
    pub fn excluded(&self) -> &BTreeSet<CountryName> {
        &self.excluded
    }

    /// Return true if `country` was excluded for missing data.
    #[must_use]
    pub fn is_excluded(&self, country: &str) -> bool {
        self.excluded.contains(country)
    }

    /// Number of days in the window.
    #[must_use]
    pub fn total_days(&self) -> usize {
        self.matrix.n_days()
    }

    /// The daily series of one country.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnknownCountry`] if the country has no records
    /// in the window.
    pub fn series(&self, country: &str) -> Result<&[f64], AnalysisError> {
        Ok(self.matrix.row(self.index.id(country)?))
    }

    /// Complete series keyed by country, in index order. Excluded countries
    /// are left out.
    #[must_use]
    pub fn series_by_country(&self) -> Vec<(&CountryName, &[f64])> {
        self.index
            .iter()
            .filter(|(_, name)| !self.excluded.contains(name.as_str()))
            .map(|(row, name)| (name, self.matrix.row(row)))
            .collect()
    }
}

/// Build the aligned matrix from policy records.
///
/// Records outside the window are dropped. The remaining records are grouped
/// by country in first-seen order and placed at their day offset
/// `(date - start).days`, so the order of rows within a country does not
/// matter. When two records share a country and day, the first one wins.
///
/// A record without a stringency value leaves its day missing. Any country
/// with a missing day is excluded from ranking; its row is kept so that the
/// index still covers every country in the window.
#[instrument(skip(records), fields(n_records = records.len(), start = %window.start(), end = %window.end()))]
pub fn build(records: &[StringencyRecord], window: DateWindow) -> StringencyTable {
    let total_days = window.total_days();

    let mut index = CountryIndex::new();
    let mut placed: Vec<(usize, usize, Option<f64>)> = Vec::new();
    for record in records {
        let Some(day) = window.day_offset(record.date) else {
            continue;
        };
        let row = index.insert(record.country.clone());
        placed.push((row, day, record.stringency_index));
    }
    debug!(n_windowed = placed.len(), n_countries = index.len(), "records grouped by country");

    let mut matrix = StringencyMatrix::new(index.len(), total_days);
    let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(placed.len());
    let mut n_duplicates = 0usize;
    for (row, day, value) in placed {
        if !seen.insert((row, day)) {
            n_duplicates += 1;
            continue;
        }
        if let Some(v) = value.filter(|v| v.is_finite()) {
            matrix.set(row, day, v);
        }
    }
    if n_duplicates > 0 {
        warn!(n_duplicates, "duplicate country/day records ignored (first kept)");
    }

    let mut excluded = BTreeSet::new();
    for (row, name) in index.iter() {
        let missing_days = matrix.missing_days(row);
        if missing_days > 0 {
            warn!(country = %name, missing_days, "excluding country with incomplete series");
            excluded.insert(name.clone());
        }
    }

    info!(
        n_countries = index.len(),
        n_excluded = excluded.len(),
        total_days,
        "stringency matrix built"
    );

    StringencyTable {
        window,
        index,
        matrix,
        excluded,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};

    use super::*;

    fn april(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 4, day).unwrap()
    }

    fn window(days: u64) -> DateWindow {
        DateWindow::new(april(1), april(1) + Days::new(days)).unwrap()
    }

    fn constant(country: &str, value: f64, days: u32) -> Vec<StringencyRecord> {
        (1..=days)
            .map(|d| StringencyRecord::new(country, april(d), Some(value)))
            .collect()
    }

    #[test]
    fn places_values_by_day_offset() {
        let records = vec![
            StringencyRecord::new("Chile", april(3), Some(30.0)),
            StringencyRecord::new("Chile", april(1), Some(10.0)),
            StringencyRecord::new("Chile", april(2), Some(20.0)),
        ];
        let table = build(&records, window(3));
        assert_eq!(table.series("Chile").unwrap(), &[10.0, 20.0, 30.0]);
        assert!(table.excluded().is_empty());
    }

    #[test]
    fn interleaved_countries_do_not_reset_each_other() {
        let mut records = Vec::new();
        for d in 1..=3 {
            records.push(StringencyRecord::new("Peru", april(d), Some(d as f64)));
            records.push(StringencyRecord::new("Chile", april(d), Some(10.0 * d as f64)));
        }
        let table = build(&records, window(3));
        assert_eq!(table.index().id("Peru").unwrap(), 0);
        assert_eq!(table.index().id("Chile").unwrap(), 1);
        assert_eq!(table.series("Peru").unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(table.series("Chile").unwrap(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn records_outside_window_are_dropped() {
        let mut records = constant("Chile", 40.0, 3);
        records.push(StringencyRecord::new(
            "Mars",
            NaiveDate::from_ymd_opt(2020, 3, 31).unwrap(),
            Some(1.0),
        ));
        records.push(StringencyRecord::new("Chile", april(4), Some(99.0)));
        let table = build(&records, window(3));
        assert_eq!(table.index().len(), 1);
        assert!(!table.index().contains("Mars"));
        assert_eq!(table.series("Chile").unwrap(), &[40.0, 40.0, 40.0]);
    }

    #[test]
    fn malformed_value_marks_only_that_day_missing() {
        let mut records = constant("Chile", 40.0, 5);
        records[2].stringency_index = None;
        let table = build(&records, window(5));
        let series = table.series("Chile").unwrap();
        assert!(series[2].is_nan());
        assert_eq!(series[3], 40.0);
        assert_eq!(series[4], 40.0);
        assert!(table.is_excluded("Chile"));
    }

    #[test]
    fn short_series_is_excluded() {
        let mut records = constant("Chile", 40.0, 5);
        records.extend(constant("Peru", 40.0, 4));
        let table = build(&records, window(5));
        assert!(table.is_excluded("Peru"));
        assert!(!table.is_excluded("Chile"));
        let names: Vec<&str> = table.series_by_country().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Chile"]);
    }

    #[test]
    fn first_duplicate_wins() {
        let mut records = constant("Chile", 40.0, 2);
        records.push(StringencyRecord::new("Chile", april(1), Some(90.0)));
        let table = build(&records, window(2));
        assert_eq!(table.series("Chile").unwrap(), &[40.0, 40.0]);
    }

    #[test]
    fn zero_day_window_is_empty() {
        let records = constant("Chile", 40.0, 3);
        let table = build(&records, window(0));
        assert!(table.index().is_empty());
        assert_eq!(table.total_days(), 0);
        assert!(table.series_by_country().is_empty());
    }
}
