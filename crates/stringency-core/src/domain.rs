//! Domain types shared by the loader, builder and engines.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::AnalysisError;

/// A country name exactly as spelled in the source tables.
///
/// Matching across tables (policy, population, continent) is by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CountryName(String);

impl CountryName {
    /// Wrap a country name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Return the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CountryName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CountryName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for CountryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Half-open date range `[start, end)` over which series are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Create a window.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidWindow`] if `end < start`. An empty
    /// window (`end == start`) is valid and yields zero days.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AnalysisError> {
        if end < start {
            return Err(AnalysisError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Inclusive first day.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive last day.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the window, `(end - start).days`.
    #[must_use]
    pub fn total_days(&self) -> usize {
        usize::try_from((self.end - self.start).num_days()).unwrap_or(0)
    }

    /// Return true if `date` falls inside `[start, end)`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Zero-based day offset of `date`, or `None` outside the window.
    #[must_use]
    pub fn day_offset(&self, date: NaiveDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }
        usize::try_from((date - self.start).num_days()).ok()
    }
}

const fn calendar_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => NaiveDate::MIN,
    }
}

const DEFAULT_START: NaiveDate = calendar_date(2020, 4, 1);
const DEFAULT_END: NaiveDate = calendar_date(2020, 5, 1);

impl Default for DateWindow {
    /// April 2020: `[2020-04-01, 2020-05-01)`, 30 days.
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

/// One row of the daily policy table.
#[derive(Debug, Clone, PartialEq)]
pub struct StringencyRecord {
    /// Country the row belongs to.
    pub country: CountryName,
    /// Calendar day of the observation.
    pub date: NaiveDate,
    /// Stringency index in `[0, 100]`, or `None` when blank or non-numeric.
    pub stringency_index: Option<f64>,
}

impl StringencyRecord {
    /// Convenience constructor.
    pub fn new(country: impl Into<String>, date: NaiveDate, stringency_index: Option<f64>) -> Self {
        Self {
            country: CountryName::new(country),
            date,
            stringency_index,
        }
    }
}

/// One row of the population table.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationRecord {
    /// Country name.
    pub country: CountryName,
    /// Absolute 2020 population (the source stores thousands).
    pub population: f64,
}

/// Population lookup by exact country name.
///
/// When a name appears more than once, the first record wins.
#[derive(Debug, Clone, Default)]
pub struct PopulationTable {
    records: Vec<PopulationRecord>,
    by_name: HashMap<CountryName, usize>,
}

impl PopulationTable {
    /// Build the lookup from records in file order.
    pub fn new(records: Vec<PopulationRecord>) -> Self {
        let mut by_name = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            by_name.entry(record.country.clone()).or_insert(i);
        }
        Self { records, by_name }
    }

    /// Population of `country`, or `None` when the name is not listed.
    #[must_use]
    pub fn population(&self, country: &str) -> Option<f64> {
        self.by_name.get(country).map(|&i| self.records[i].population)
    }

    /// All records in file order, duplicates included.
    #[must_use]
    pub fn records(&self) -> &[PopulationRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Return true if the table has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_window_is_april_2020() {
        let w = DateWindow::default();
        assert_eq!(w.start(), date(2020, 4, 1));
        assert_eq!(w.end(), date(2020, 5, 1));
        assert_eq!(w.total_days(), 30);
    }

    #[test]
    fn impossible_calendar_date_does_not_panic() {
        assert_eq!(calendar_date(2020, 2, 30), NaiveDate::MIN);
        assert_eq!(calendar_date(2020, 2, 29), date(2020, 2, 29));
    }

    #[test]
    fn window_is_half_open() {
        let w = DateWindow::default();
        assert!(w.contains(date(2020, 4, 1)));
        assert!(w.contains(date(2020, 4, 30)));
        assert!(!w.contains(date(2020, 5, 1)));
        assert!(!w.contains(date(2020, 3, 31)));
        assert_eq!(w.day_offset(date(2020, 4, 30)), Some(29));
        assert_eq!(w.day_offset(date(2020, 5, 1)), None);
    }

    #[test]
    fn empty_window_has_zero_days() {
        let w = DateWindow::new(date(2020, 4, 1), date(2020, 4, 1)).unwrap();
        assert_eq!(w.total_days(), 0);
        assert!(!w.contains(date(2020, 4, 1)));
    }

    #[test]
    fn reversed_window_rejected() {
        let err = DateWindow::new(date(2020, 5, 1), date(2020, 4, 1)).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidWindow { .. }));
    }

    #[test]
    fn population_first_match_wins() {
        let table = PopulationTable::new(vec![
            PopulationRecord { country: "Georgia".into(), population: 3_989_000.0 },
            PopulationRecord { country: "Georgia".into(), population: 10_617_000.0 },
        ]);
        assert_eq!(table.population("Georgia"), Some(3_989_000.0));
        assert_eq!(table.population("Atlantis"), None);
        assert_eq!(table.len(), 2);
    }
}
