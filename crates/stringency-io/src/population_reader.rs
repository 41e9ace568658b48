//! CSV reader for the per-country population table.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use stringency_core::{CountryName, PopulationRecord, PopulationTable};
use tracing::{debug, info, instrument, warn};

use crate::LoadError;

const NAME_COLUMN: &str = "name";
const POPULATION_COLUMN: &str = "pop2020";

/// The source table stores thousands.
const POPULATION_SCALE: f64 = 1000.0;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PopulationRow {
    name: String,
    pop2020: String,
}

/// Reads the population table: columns `name` and `pop2020`, the latter in
/// thousands. Other columns are ignored.
///
/// Rows with a non-numeric population are skipped with a warning. Short rows
/// are tolerated and read the absent fields as blank, so a row without a
/// population is skipped the same way. Duplicate names are kept; lookups
/// return the first.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`LoadError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`LoadError::CsvParse`] | Malformed CSV record |
/// | [`LoadError::MissingColumn`] | `name` or `pop2020` is absent |
/// | [`LoadError::EmptyDataset`] | Zero data rows after header |
pub struct PopulationReader {
    path: PathBuf,
}

impl PopulationReader {
    /// Create a new reader for the given CSV file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read the CSV file, returning a [`PopulationTable`] of absolute counts.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<PopulationTable, LoadError> {
        let file = std::fs::File::open(&self.path).map_err(|e| LoadError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        // Same leniency as the policy table: absent fields read as blank.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let header = rdr.headers().map_err(|e| self.csv_error(e))?;
        for column in [NAME_COLUMN, POPULATION_COLUMN] {
            if !header.iter().any(|h| h == column) {
                return Err(LoadError::MissingColumn {
                    path: self.path.clone(),
                    column,
                });
            }
        }

        let mut records = Vec::new();
        let mut n_rows = 0usize;
        let mut n_skipped = 0usize;
        for (row_index, result) in rdr.deserialize::<PopulationRow>().enumerate() {
            let row = result.map_err(|e| self.csv_error(e))?;
            n_rows += 1;
            match row.pop2020.parse::<f64>() {
                Ok(thousands) if thousands.is_finite() => records.push(PopulationRecord {
                    country: CountryName::new(row.name),
                    population: thousands * POPULATION_SCALE,
                }),
                _ => {
                    debug!(row_index, name = %row.name, raw = %row.pop2020, "non-numeric population");
                    n_skipped += 1;
                }
            }
        }

        if n_rows == 0 {
            return Err(LoadError::EmptyDataset {
                path: self.path.clone(),
            });
        }
        if n_skipped > 0 {
            warn!(n_skipped, "population rows without a numeric value skipped");
        }

        info!(n_countries = records.len(), "population table loaded");
        Ok(PopulationTable::new(records))
    }

    fn csv_error(&self, e: csv::Error) -> LoadError {
        LoadError::CsvParse {
            path: self.path.clone(),
            offset: e.position().map_or(0, |p| p.byte()),
            source: e,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn scales_thousands_to_absolute() {
        let csv = "Rank,name,pop2020,Density\n1,Netherlands,17134.872,508\n2,Luxembourg,625.978,242\n";
        let f = write_csv(csv);
        let table = PopulationReader::new(f.path()).read().unwrap();
        assert_eq!(table.len(), 2);
        assert!((table.population("Netherlands").unwrap() - 17_134_872.0).abs() < 1e-6);
        assert!((table.population("Luxembourg").unwrap() - 625_978.0).abs() < 1e-6);
    }

    #[test]
    fn non_numeric_rows_skipped() {
        let csv = "name,pop2020\nNetherlands,17134.872\nAtlantis,unknown\n";
        let f = write_csv(csv);
        let table = PopulationReader::new(f.path()).read().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.population("Atlantis"), None);
    }

    #[test]
    fn short_rows_skipped_not_fatal() {
        let csv = "name,pop2020\nNetherlands,17134.872\nAtlantis\nBelgium,11589.623\n";
        let f = write_csv(csv);
        let table = PopulationReader::new(f.path()).read().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.population("Atlantis"), None);
        assert!((table.population("Belgium").unwrap() - 11_589_623.0).abs() < 1e-6);
    }

    #[test]
    fn duplicate_names_first_wins() {
        let csv = "name,pop2020\nGeorgia,3989.167\nGeorgia,10617.423\n";
        let f = write_csv(csv);
        let table = PopulationReader::new(f.path()).read().unwrap();
        assert!((table.population("Georgia").unwrap() - 3_989_167.0).abs() < 1e-6);
    }

    #[test]
    fn missing_column_error() {
        let f = write_csv("name,pop2019\nNetherlands,17097\n");
        let err = PopulationReader::new(f.path()).read().unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { column: "pop2020", .. }));
    }

    #[test]
    fn empty_dataset_error() {
        let f = write_csv("name,pop2020\n");
        let err = PopulationReader::new(f.path()).read().unwrap_err();
        assert!(matches!(err, LoadError::EmptyDataset { .. }));
    }
}
