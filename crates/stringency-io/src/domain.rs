//! Domain types for stringency-io.

use serde::Serialize;
use stringency_core::StringencyRecord;

use crate::LoadError;

/// A validated run name used to prefix output files.
///
/// Must match `[a-zA-Z0-9_-]+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunName(String);

impl RunName {
    /// Parse and validate a run name.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidRunName`] if the name is empty or contains
    /// characters outside `[a-zA-Z0-9_-]`.
    pub fn new(name: String) -> Result<Self, LoadError> {
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(LoadError::InvalidRunName { name });
        }
        Ok(Self(name))
    }

    /// Derive a run name from a country name: lower case, with every run of
    /// other characters collapsed to `_`.
    #[must_use]
    pub fn from_country(country: &str) -> Self {
        let mut slug = String::with_capacity(country.len());
        for c in country.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('_') {
                slug.push('_');
            }
        }
        while slug.ends_with('_') {
            slug.pop();
        }
        if slug.is_empty() {
            slug.push_str("comparison");
        }
        Self(slug)
    }

    /// Return the run name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RunName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Row accounting for one policy table load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Data rows read from the file.
    pub rows: usize,
    /// Sub-national rows skipped.
    pub regional_rows: usize,
    /// Rows dropped because the country name was blank.
    pub blank_countries: usize,
    /// Rows dropped because the date did not parse.
    pub malformed_dates: usize,
    /// Rows kept with a blank or non-numeric stringency value.
    pub missing_values: usize,
}

/// National policy records in file order, with load statistics.
///
/// Produced by [`PolicyReader`](crate::PolicyReader).
#[derive(Debug, Clone)]
pub struct PolicyDataset {
    /// Parsed records.
    pub records: Vec<StringencyRecord>,
    /// What was skipped or degraded while reading.
    pub stats: LoadStats,
}
