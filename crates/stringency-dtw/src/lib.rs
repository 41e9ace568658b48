//! Dynamic Time Warping distance between numeric sequences.
//!
//! Pure math library, zero I/O. Provides DTW distance with a configurable step
//! pattern, an optional Sakoe-Chiba warping window, and path-length
//! normalization.

mod distance;
mod dtw;
mod error;
mod series;
mod step;
mod window;

pub use distance::DtwDistance;
pub use dtw::Dtw;
pub use error::DtwError;
pub use series::SeriesView;
pub use step::StepPattern;
pub use window::Window;
