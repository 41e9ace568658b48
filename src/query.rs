//! The top-level comparison query.

use std::path::PathBuf;

use serde::Serialize;
use stringency_core::{
    annotate_continents, build, select_top, AnalysisError, Chart, CompareConfig, ContinentEquals,
    ContinentResolver, CountryName, DateWindow, DistanceEngine, DtwEngine, EngineKind, Euclidean,
    FilterChain, MinPopulation, PopulationTable, RankedCountry, StringencyTable,
};
use stringency_io::{LoadError, LoadStats, PolicyReader, PopulationReader};
use tracing::{info, instrument, warn};

/// Errors that abort a comparison.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// An input table could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The focal country or the parameters cannot be compared.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Inputs of one comparison.
#[derive(Debug, Clone)]
pub struct CompareRequest {
    /// Country every other country is compared against.
    pub focal: String,
    /// Daily policy table.
    pub policy_path: PathBuf,
    /// Population table.
    pub population_path: PathBuf,
    /// Window, thresholds and engine settings.
    pub config: CompareConfig,
}

impl CompareRequest {
    /// Create a request with the default input paths.
    pub fn new(focal: impl Into<String>, config: CompareConfig) -> Self {
        Self {
            focal: focal.into(),
            policy_path: PathBuf::from("OxCGRT_latest.csv"),
            population_path: PathBuf::from("worldPop2020.csv"),
            config,
        }
    }

    /// Override the policy table path.
    #[must_use]
    pub fn with_policy_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.policy_path = path.into();
        self
    }

    /// Override the population table path.
    #[must_use]
    pub fn with_population_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.population_path = path.into();
        self
    }
}

/// One engine's result.
#[derive(Debug, Clone, Serialize)]
pub struct EngineReport {
    /// The engine.
    pub kind: EngineKind,
    /// Countries ranked before filtering, focal included.
    pub n_ranked: usize,
    /// Countries left after the population and continent filters.
    pub n_filtered: usize,
    /// The top-K survivors in ranking order.
    pub selected: Vec<RankedCountry>,
    /// Chart of the selected countries.
    #[serde(skip)]
    pub chart: Chart,
}

/// Result of [`compare`].
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// The focal country.
    pub focal: CountryName,
    /// The comparison window.
    pub window: DateWindow,
    /// Policy table row accounting.
    pub load_stats: LoadStats,
    /// Countries left out for having missing days.
    pub excluded: Vec<CountryName>,
    /// One report per engine, in run order.
    pub reports: Vec<EngineReport>,
}

/// Run a comparison: load, build, rank with each configured engine, then
/// annotate continents, filter, keep the top-K and chart.
///
/// Both engines go through the same order: rank, annotate, filter by
/// population then continent, truncate. When the focal country's continent
/// cannot be resolved the continent filter is skipped with a warning.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`QueryError::Load`] | An input file is missing or unreadable |
/// | [`QueryError::Analysis`] | The focal country is unknown or has missing days |
#[instrument(skip(request, resolver), fields(focal = %request.focal))]
pub fn compare(request: &CompareRequest, resolver: &dyn ContinentResolver) -> Result<Comparison, QueryError> {
    let policy = PolicyReader::new(&request.policy_path).read()?;
    let population = PopulationReader::new(&request.population_path).read()?;

    let config = &request.config;
    let table = build(&policy.records, config.window());

    let mut reports = Vec::with_capacity(config.engines().kinds().len());
    for &kind in config.engines().kinds() {
        let engine: Box<dyn DistanceEngine> = match kind {
            EngineKind::Euclidean => Box::new(Euclidean),
            EngineKind::Dtw => Box::new(DtwEngine::new(config.dtw())),
        };
        reports.push(run_engine(engine.as_ref(), &table, &population, resolver, request)?);
    }

    Ok(Comparison {
        focal: CountryName::new(request.focal.as_str()),
        window: config.window(),
        load_stats: policy.stats,
        excluded: table.excluded().iter().cloned().collect(),
        reports,
    })
}

fn run_engine(
    engine: &dyn DistanceEngine,
    table: &StringencyTable,
    population: &PopulationTable,
    resolver: &dyn ContinentResolver,
    request: &CompareRequest,
) -> Result<EngineReport, QueryError> {
    let config = &request.config;
    let focal = request.focal.as_str();
    let kind = engine.kind();

    let mut ranked = engine.rank(table, focal)?;
    let n_ranked = ranked.len();
    annotate_continents(&mut ranked, resolver);

    let mut chain = FilterChain::new().with(MinPopulation::new(population, config.min_population()));
    if config.filter_by_continent() {
        match resolver.continent(focal) {
            Ok(continent) => chain = chain.with(ContinentEquals::new(resolver, continent)),
            Err(e) => warn!(focal, error = %e, "focal continent unknown, continent filter skipped"),
        }
    }
    let filtered = chain.apply(ranked);
    let n_filtered = filtered.len();

    let selected = select_top(&filtered, config.top_k()).to_vec();
    let chart = Chart::comparison(kind, config.top_k(), &selected, table, focal)?;
    info!(engine = %kind, n_ranked, n_filtered, n_selected = selected.len(), "engine report ready");

    Ok(EngineReport {
        kind,
        n_ranked,
        n_filtered,
        selected,
        chart,
    })
}
