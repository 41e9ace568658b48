//! Rank countries by how closely their daily COVID-19 policy stringency
//! followed a focal country's, using mean absolute daily deviation and
//! Dynamic Time Warping.
//!
//! [`compare`] runs the whole query: load the policy and population tables,
//! build the aligned matrix, rank once per engine, filter by population and
//! continent, keep the top-K and assemble a chart for each engine.

mod query;

pub use query::{compare, CompareRequest, Comparison, EngineReport, QueryError};
