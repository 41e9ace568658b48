//! CSV reader for the daily policy stringency table.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use stringency_core::StringencyRecord;
use tracing::{debug, info, instrument, warn};

use crate::domain::{LoadStats, PolicyDataset};
use crate::LoadError;

const COUNTRY_COLUMN: &str = "CountryName";
const DATE_COLUMN: &str = "Date";
const STRINGENCY_COLUMN: &str = "StringencyIndex";
const REGION_COLUMN: &str = "RegionName";

/// Parse a calendar date written as `YYYYMMDD` or `YYYY-MM-DD`.
///
/// A trailing `.0` is tolerated, since the compact form is often exported
/// as a float.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let raw = raw.strip_suffix(".0").unwrap_or(raw);
    if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::parse_from_str(raw, "%Y%m%d").ok();
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Reads the daily policy table.
///
/// Columns are located by header name, in any order; extra columns are
/// ignored and fields are trimmed. Required: `CountryName`, `Date`,
/// `StringencyIndex`. When a `RegionName` column exists, rows with a
/// non-empty region are sub-national and skipped.
///
/// Rows with a blank country name or a date that does not parse are dropped. A blank or non-numeric
/// stringency value is kept as `None` so the day reads as missing.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`LoadError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`LoadError::CsvParse`] | Malformed CSV record |
/// | [`LoadError::MissingColumn`] | A required column is absent |
/// | [`LoadError::EmptyDataset`] | Zero data rows after header |
pub struct PolicyReader {
    path: PathBuf,
}

struct Columns {
    country: usize,
    date: usize,
    stringency: usize,
    region: Option<usize>,
}

impl PolicyReader {
    /// Create a new reader for the given CSV file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read the CSV file, returning a [`PolicyDataset`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<PolicyDataset, LoadError> {
        let file = std::fs::File::open(&self.path).map_err(|e| LoadError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        // Short rows are tolerated; absent fields read as blank.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let header = rdr.headers().map_err(|e| self.csv_error(e))?;
        let columns = Columns {
            country: self.column(header, COUNTRY_COLUMN)?,
            date: self.column(header, DATE_COLUMN)?,
            stringency: self.column(header, STRINGENCY_COLUMN)?,
            region: header.iter().position(|h| h == REGION_COLUMN),
        };
        debug!(n_columns = header.len(), has_region = columns.region.is_some(), "read CSV header");

        let mut records = Vec::new();
        let mut stats = LoadStats::default();
        for (row_index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| self.csv_error(e))?;
            stats.rows += 1;

            if let Some(region) = columns.region
                && !record.get(region).unwrap_or("").is_empty()
            {
                stats.regional_rows += 1;
                continue;
            }

            let country = record.get(columns.country).unwrap_or("");
            if country.is_empty() {
                debug!(row_index, "blank country name, row skipped");
                stats.blank_countries += 1;
                continue;
            }

            let raw_date = record.get(columns.date).unwrap_or("");
            let Some(date) = parse_date(raw_date) else {
                debug!(row_index, raw = raw_date, "malformed date, row skipped");
                stats.malformed_dates += 1;
                continue;
            };

            let raw_value = record.get(columns.stringency).unwrap_or("");
            let value = raw_value.parse::<f64>().ok().filter(|v| v.is_finite());
            if value.is_none() {
                debug!(row_index, %country, %date, raw = raw_value, "missing stringency value");
                stats.missing_values += 1;
            }

            records.push(StringencyRecord::new(country, date, value));
        }

        if stats.rows == 0 {
            return Err(LoadError::EmptyDataset {
                path: self.path.clone(),
            });
        }
        if stats.blank_countries > 0 {
            warn!(n = stats.blank_countries, "rows with a blank country name dropped");
        }
        if stats.malformed_dates > 0 {
            warn!(n = stats.malformed_dates, "rows with malformed dates dropped");
        }
        if stats.missing_values > 0 {
            warn!(n = stats.missing_values, "rows without a usable stringency value");
        }

        info!(
            n_rows = stats.rows,
            n_records = records.len(),
            regional_rows = stats.regional_rows,
            "policy dataset loaded"
        );

        Ok(PolicyDataset { records, stats })
    }

    fn column(&self, header: &csv::StringRecord, name: &'static str) -> Result<usize, LoadError> {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadError::MissingColumn {
                path: self.path.clone(),
                column: name,
            })
    }

    fn csv_error(&self, e: csv::Error) -> LoadError {
        LoadError::CsvParse {
            path: self.path.clone(),
            offset: e.position().map_or(0, |p| p.byte()),
            source: e,
        }
    }
}
