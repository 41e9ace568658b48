//! Country name to ISO alpha-2 to continent resolution.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::country_table::{ALIASES, COUNTRIES};
use crate::error::ResolveError;
use crate::ranked::RankedCountry;

/// Two-letter continent code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ContinentCode {
    /// Africa.
    AF,
    /// Asia.
    AS,
    /// Europe.
    EU,
    /// North America, including Central America and the Caribbean.
    NA,
    /// Oceania.
    OC,
    /// South America.
    SA,
}

impl ContinentCode {
    /// Return the two-letter code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AF => "AF",
            Self::AS => "AS",
            Self::EU => "EU",
            Self::NA => "NA",
            Self::OC => "OC",
            Self::SA => "SA",
        }
    }
}

impl FromStr for ContinentCode {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AF" => Ok(Self::AF),
            "AS" => Ok(Self::AS),
            "EU" => Ok(Self::EU),
            "NA" => Ok(Self::NA),
            "OC" => Ok(Self::OC),
            "SA" => Ok(Self::SA),
            _ => Err(ResolveError::UnknownContinentCode { code: s.to_string() }),
        }
    }
}

impl fmt::Display for ContinentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ISO 3166-1 alpha-2 country code, stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Alpha2(String);

impl Alpha2 {
    /// Wrap a code, normalizing to upper case.
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_ascii_uppercase())
    }

    /// Return the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Alpha2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves a country name to its continent in two lookups.
pub trait ContinentResolver {
    /// Map a country name to its alpha-2 code.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownCountryName`] when the name is unknown.
    fn alpha2(&self, country: &str) -> Result<Alpha2, ResolveError>;

    /// Map an alpha-2 code to its continent.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownAlpha2`] when the code is unknown.
    fn continent_of(&self, alpha2: &Alpha2) -> Result<ContinentCode, ResolveError>;

    /// Map a country name to its continent.
    ///
    /// # Errors
    ///
    /// Propagates either lookup failure.
    fn continent(&self, country: &str) -> Result<ContinentCode, ResolveError> {
        let code = self.alpha2(country)?;
        self.continent_of(&code)
    }
}

/// In-memory resolver backed by a name table and an alpha-2 table.
///
/// Names match exactly. [`CountryTable::builtin`] covers the national
/// jurisdictions of the Oxford policy tracker, including its spellings
/// (e.g. "Slovak Republic", "Kyrgyz Republic").
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    by_name: HashMap<String, Alpha2>,
    by_alpha2: HashMap<Alpha2, ContinentCode>,
}

impl CountryTable {
    /// The compiled-in table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::from_entries(COUNTRIES.iter().copied());
        for &(alias, code) in ALIASES {
            table.by_name.insert(alias.to_string(), Alpha2::new(code));
        }
        table
    }

    /// Build a table from `(name, alpha2, continent)` triples.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, ContinentCode)>,
    {
        let mut table = Self::default();
        for (name, code, continent) in entries {
            let code = Alpha2::new(code);
            table.by_name.insert(name.to_string(), code.clone());
            table.by_alpha2.insert(code, continent);
        }
        table
    }

    /// Number of resolvable names, aliases included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Return true if the table resolves nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl ContinentResolver for CountryTable {
    fn alpha2(&self, country: &str) -> Result<Alpha2, ResolveError> {
        self.by_name
            .get(country)
            .cloned()
            .ok_or_else(|| ResolveError::UnknownCountryName { name: country.to_string() })
    }

    fn continent_of(&self, alpha2: &Alpha2) -> Result<ContinentCode, ResolveError> {
        self.by_alpha2
            .get(alpha2)
            .copied()
            .ok_or_else(|| ResolveError::UnknownAlpha2 { code: alpha2.to_string() })
    }
}

/// Fill in `continent` on every ranked entry. Failures are logged and leave
/// the entry unresolved.
pub fn annotate_continents(ranked: &mut [RankedCountry], resolver: &dyn ContinentResolver) {
    for entry in ranked.iter_mut() {
        match resolver.continent(entry.country.as_str()) {
            Ok(code) => entry.continent = Some(code),
            Err(e) => {
                warn!(country = %entry.country, error = %e, "cannot determine continent");
                entry.continent = None;
            }
        }
    }
}
