//! Bidirectional country name to row id mapping.

use std::collections::HashMap;

use crate::domain::CountryName;
use crate::error::AnalysisError;

/// Bijection between country names and dense row ids `0..len`.
///
/// Ids are assigned in first-seen order and never change.
#[derive(Debug, Clone, Default)]
pub struct CountryIndex {
    names: Vec<CountryName>,
    ids: HashMap<CountryName, usize>,
}

impl CountryIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a sequence of names in order. Repeated names keep their first id.
    pub fn from_names<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<CountryName>,
    {
        let mut index = Self::new();
        for name in names {
            index.insert(name.into());
        }
        index
    }

    /// Return the id of `name`, assigning the next free id if it is new.
    pub fn insert(&mut self, name: CountryName) -> usize {
        if let Some(&id) = self.ids.get(&name) {
            return id;
        }
        let id = self.names.len();
        self.ids.insert(name.clone(), id);
        self.names.push(name);
        id
    }

    /// Look up the row id of a country.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnknownCountry`] if `name` is not indexed.
    pub fn id(&self, name: &str) -> Result<usize, AnalysisError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| AnalysisError::UnknownCountry { name: name.to_string() })
    }

    /// Look up the country at a row id.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnknownRow`] if `id >= len`.
    pub fn name(&self, id: usize) -> Result<&CountryName, AnalysisError> {
        self.names.get(id).ok_or(AnalysisError::UnknownRow {
            row: id,
            len: self.names.len(),
        })
    }

    /// Return true if `name` is indexed.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Iterate `(id, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CountryName)> + '_ {
        self.names.iter().enumerate()
    }

    /// Number of indexed countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Return true if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
