//! File I/O for stringency comparisons: policy and population CSV loaders,
//! the JSON ranking writer and the SVG chart renderer.

mod chart;
mod domain;
mod error;
mod policy_reader;
mod population_reader;
mod writer;

pub use chart::SvgChart;
pub use domain::{LoadStats, PolicyDataset, RunName};
pub use error::LoadError;
pub use policy_reader::{parse_date, PolicyReader};
pub use population_reader::PopulationReader;
pub use writer::ReportWriter;
