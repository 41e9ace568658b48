//! Composable predicates over ranked countries.

use tracing::{debug, info, instrument};

use crate::continent::{ContinentCode, ContinentResolver};
use crate::domain::PopulationTable;
use crate::ranked::RankedCountry;

/// A pure predicate deciding whether a ranked country survives.
pub trait CountryFilter {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Return true to keep `country`.
    fn keep(&self, country: &RankedCountry) -> bool;
}

/// Keeps countries whose population is strictly greater than a threshold.
///
/// Countries missing from the population table are dropped.
pub struct MinPopulation<'a> {
    table: &'a PopulationTable,
    threshold: f64,
}

impl<'a> MinPopulation<'a> {
    /// Create the predicate.
    pub fn new(table: &'a PopulationTable, threshold: f64) -> Self {
        Self { table, threshold }
    }
}

impl CountryFilter for MinPopulation<'_> {
    fn name(&self) -> &'static str {
        "min_population"
    }

    fn keep(&self, country: &RankedCountry) -> bool {
        match self.table.population(country.country.as_str()) {
            Some(population) => population > self.threshold,
            None => {
                debug!(country = %country.country, "no population record");
                false
            }
        }
    }
}

/// Keeps countries on one continent.
///
/// Uses the entry's annotated continent when present, otherwise asks the
/// resolver. Countries that cannot be resolved are dropped.
pub struct ContinentEquals<'a> {
    resolver: &'a dyn ContinentResolver,
    continent: ContinentCode,
}

impl<'a> ContinentEquals<'a> {
    /// Create the predicate.
    pub fn new(resolver: &'a dyn ContinentResolver, continent: ContinentCode) -> Self {
        Self { resolver, continent }
    }
}

impl CountryFilter for ContinentEquals<'_> {
    fn name(&self) -> &'static str {
        "continent_equals"
    }

    fn keep(&self, country: &RankedCountry) -> bool {
        let resolved = match country.continent {
            Some(code) => Ok(code),
            None => self.resolver.continent(country.country.as_str()),
        };
        match resolved {
            Ok(code) => code == self.continent,
            Err(e) => {
                debug!(country = %country.country, error = %e, "continent unresolved, dropped");
                false
            }
        }
    }
}

/// Ordered pipeline of filters. Order affects only how much work each
/// predicate sees, never the surviving set.
#[derive(Default)]
pub struct FilterChain<'a> {
    filters: Vec<Box<dyn CountryFilter + 'a>>,
}

impl<'a> FilterChain<'a> {
    /// Create an empty chain, which keeps everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter.
    #[must_use]
    pub fn with(mut self, filter: impl CountryFilter + 'a) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Return true if the chain has no filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter in order, preserving the ranking order of survivors.
    #[instrument(skip_all, fields(n_filters = self.filters.len(), n_in = ranked.len()))]
    pub fn apply(&self, ranked: Vec<RankedCountry>) -> Vec<RankedCountry> {
        let mut surviving = ranked;
        for filter in &self.filters {
            let before = surviving.len();
            surviving.retain(|c| filter.keep(c));
            debug!(filter = filter.name(), removed = before - surviving.len(), "filter applied");
        }
        info!(n_out = surviving.len(), "filter chain complete");
        surviving
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::continent::CountryTable;
    use crate::domain::{CountryName, PopulationRecord};

    fn population() -> PopulationTable {
        PopulationTable::new(vec![
            PopulationRecord { country: "Netherlands".into(), population: 17_134_872.0 },
            PopulationRecord { country: "Luxembourg".into(), population: 625_978.0 },
            PopulationRecord { country: "Andorra".into(), population: 77_265.0 },
            PopulationRecord { country: "Japan".into(), population: 126_476_461.0 },
            PopulationRecord { country: "Atlantis".into(), population: 5_000_000.0 },
            PopulationRecord { country: "Exactly".into(), population: 300_000.0 },
        ])
    }

    fn ranked(names: &[&str]) -> Vec<RankedCountry> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| RankedCountry::new(CountryName::new(*n), i as f64))
            .collect()
    }

    fn names(ranked: &[RankedCountry]) -> Vec<&str> {
        ranked.iter().map(|r| r.country.as_str()).collect()
    }

    #[test]
    fn min_population_fails_closed() {
        let table = population();
        let chain = FilterChain::new().with(MinPopulation::new(&table, 300_000.0));
        let out = chain.apply(ranked(&["Netherlands", "Andorra", "Unlisted", "Luxembourg", "Exactly"]));
        assert_eq!(names(&out), vec!["Netherlands", "Luxembourg"]);
    }

    #[test]
    fn continent_drops_other_and_unresolved() {
        let resolver = CountryTable::builtin();
        let chain = FilterChain::new().with(ContinentEquals::new(&resolver, ContinentCode::EU));
        let out = chain.apply(ranked(&["Netherlands", "Japan", "Atlantis", "Luxembourg"]));
        assert_eq!(names(&out), vec!["Netherlands", "Luxembourg"]);
    }

    #[test]
    fn annotated_continent_is_trusted() {
        let resolver = CountryTable::default();
        let mut input = ranked(&["Netherlands"]);
        input[0].continent = Some(ContinentCode::EU);
        let chain = FilterChain::new().with(ContinentEquals::new(&resolver, ContinentCode::EU));
        assert_eq!(chain.apply(input).len(), 1);
    }

    #[test]
    fn filter_order_does_not_change_survivors() {
        let table = population();
        let resolver = CountryTable::builtin();
        let input = ranked(&["Netherlands", "Andorra", "Japan", "Atlantis", "Luxembourg", "Unlisted"]);

        let pop_first = FilterChain::new()
            .with(MinPopulation::new(&table, 300_000.0))
            .with(ContinentEquals::new(&resolver, ContinentCode::EU))
            .apply(input.clone());
        let continent_first = FilterChain::new()
            .with(ContinentEquals::new(&resolver, ContinentCode::EU))
            .with(MinPopulation::new(&table, 300_000.0))
            .apply(input);

        assert_eq!(pop_first, continent_first);
        assert_eq!(names(&pop_first), vec!["Netherlands", "Luxembourg"]);
    }

    #[test]
    fn huge_threshold_empties_the_list() {
        let table = population();
        let chain = FilterChain::new().with(MinPopulation::new(&table, 1e9));
        assert!(chain.apply(ranked(&["Netherlands", "Japan"])).is_empty());
    }

    #[test]
    fn empty_chain_keeps_everything() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.apply(ranked(&["A", "B"])).len(), 2);
    }
}
