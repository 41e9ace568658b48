//! Cross-module properties of the builder, engines and filter chain.

use chrono::{Days, NaiveDate};
use stringency_core::{
    annotate_continents, build, rank_matrix, ContinentCode, ContinentEquals, CountryIndex,
    CountryTable, DateWindow, DistanceEngine, DtwEngine, Euclidean, FilterChain, MinPopulation,
    PopulationRecord, PopulationTable, StringencyRecord, StringencyTable,
};

fn april_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 4, 1).unwrap()
}

fn table(series: &[(&str, Vec<f64>)], days: u64) -> StringencyTable {
    let mut records = Vec::new();
    for (country, values) in series {
        for (day, value) in values.iter().enumerate() {
            records.push(StringencyRecord::new(
                *country,
                april_first() + Days::new(day as u64),
                Some(*value),
            ));
        }
    }
    let window = DateWindow::new(april_first(), april_first() + Days::new(days)).unwrap();
    build(&records, window)
}

#[test]
fn euclidean_constant_offset() {
    let t = table(
        &[
            ("Netherlands", vec![50.0; 30]),
            ("Belgium", vec![50.0; 30]),
            ("Sweden", vec![80.0; 30]),
        ],
        30,
    );
    let ranked = Euclidean.rank(&t, "Netherlands").unwrap();
    let distances: Vec<f64> = ranked.iter().map(|r| r.distance).collect();
    assert_eq!(distances, vec![0.0, 0.0, 30.0]);
}

#[test]
fn focal_ranks_first_in_both_engines() {
    let t = table(
        &[
            ("Spain", vec![20.0, 40.0, 80.0, 90.0]),
            ("Italy", vec![10.0, 50.0, 70.0, 90.0]),
            ("Portugal", vec![30.0, 30.0, 30.0, 30.0]),
        ],
        4,
    );
    for engine in [&Euclidean as &dyn DistanceEngine, &DtwEngine::default()] {
        let ranked = engine.rank(&t, "Portugal").unwrap();
        assert_eq!(ranked[0].country.as_str(), "Portugal");
        assert_eq!(ranked[0].distance, 0.0);
        assert_eq!(ranked.len(), 3);
    }
}

#[test]
fn dtw_tolerates_a_delayed_response_better_than_euclidean() {
    let t = table(
        &[
            ("Focal", vec![0.0, 0.0, 80.0, 80.0, 80.0, 80.0]),
            ("Delayed", vec![0.0, 0.0, 0.0, 80.0, 80.0, 80.0]),
            ("Middle", vec![40.0, 40.0, 40.0, 40.0, 40.0, 40.0]),
        ],
        6,
    );
    let euclidean = Euclidean.rank(&t, "Focal").unwrap();
    let dtw = DtwEngine::default().rank(&t, "Focal").unwrap();
    let delayed_e = euclidean.iter().find(|r| r.country.as_str() == "Delayed").unwrap();
    let delayed_d = dtw.iter().find(|r| r.country.as_str() == "Delayed").unwrap();
    assert!(delayed_e.distance > 0.0);
    assert_eq!(delayed_d.distance, 0.0);
    assert_eq!(dtw[1].country.as_str(), "Delayed");
}

#[test]
fn ranking_is_deterministic() {
    let t = table(
        &[
            ("A", vec![10.0, 20.0, 30.0]),
            ("B", vec![10.0, 25.0, 30.0]),
            ("C", vec![12.0, 20.0, 28.0]),
            ("D", vec![90.0, 90.0, 90.0]),
        ],
        3,
    );
    assert_eq!(Euclidean.rank(&t, "A").unwrap(), Euclidean.rank(&t, "A").unwrap());
    let dtw = DtwEngine::default();
    assert_eq!(dtw.rank(&t, "A").unwrap(), dtw.rank(&t, "A").unwrap());
}

#[test]
fn zero_day_window_ranks_nothing() {
    let t = table(&[("A", vec![10.0, 20.0])], 0);
    assert!(Euclidean.rank(&t, "A").unwrap().is_empty());
    assert!(DtwEngine::default().rank(&t, "A").unwrap().is_empty());
    assert!(rank_matrix(t.matrix(), t.index(), "A", 0).unwrap().is_empty());
}

#[test]
fn index_round_trip() {
    let index = CountryIndex::from_names(["Chile", "Peru", "Bolivia"]);
    for (id, name) in index.iter() {
        assert_eq!(index.id(name.as_str()).unwrap(), id);
        assert_eq!(index.name(id).unwrap(), name);
    }
}

#[test]
fn filter_order_is_irrelevant_after_ranking() {
    let t = table(
        &[
            ("France", vec![50.0; 5]),
            ("Monaco", vec![50.0; 5]),
            ("Germany", vec![55.0; 5]),
            ("Morocco", vec![52.0; 5]),
            ("Spain", vec![70.0; 5]),
        ],
        5,
    );
    let population = PopulationTable::new(vec![
        PopulationRecord { country: "France".into(), population: 65_273_511.0 },
        PopulationRecord { country: "Monaco".into(), population: 39_242.0 },
        PopulationRecord { country: "Germany".into(), population: 83_783_942.0 },
        PopulationRecord { country: "Morocco".into(), population: 36_910_560.0 },
        PopulationRecord { country: "Spain".into(), population: 46_754_778.0 },
    ]);
    let resolver = CountryTable::builtin();
    let mut ranked = Euclidean.rank(&t, "France").unwrap();
    annotate_continents(&mut ranked, &resolver);

    let a = FilterChain::new()
        .with(MinPopulation::new(&population, 300_000.0))
        .with(ContinentEquals::new(&resolver, ContinentCode::EU))
        .apply(ranked.clone());
    let b = FilterChain::new()
        .with(ContinentEquals::new(&resolver, ContinentCode::EU))
        .with(MinPopulation::new(&population, 300_000.0))
        .apply(ranked);

    assert_eq!(a, b);
    let order: Vec<&str> = a.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(order, vec!["France", "Germany", "Spain"]);
}
