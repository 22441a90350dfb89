//! Dynamic Time Warping distance for univariate time series.
//!
//! Pure math library — zero I/O. Computes the unconstrained DTW distance
//! between two series of real numbers: the minimum accumulated `|a - b|`
//! cost over all monotonic alignments of the two sequences. Uses a rolling
//! two-row cost buffer, so memory is proportional to the shorter series.

mod distance;
mod dtw;
mod error;
mod series;

#[cfg(feature = "python")]
mod python;

pub use distance::DtwDistance;
pub use dtw::{distance, dtw};
pub use error::DtwError;
pub use series::{TimeSeries, TimeSeriesView};
