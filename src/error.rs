//! Error types for DTW computation.

/// Errors from DTW distance computation and time series validation.
#[derive(Debug, thiserror::Error)]
pub enum DtwError {
    /// Returned when exactly one of the two series is empty. The monotonic
    /// step recurrence admits no alignment path between an empty series and
    /// a non-empty one.
    #[error("cannot align an empty series with a non-empty one (lengths {a_len} and {b_len})")]
    EmptyAlignment {
        /// Length of the first series.
        a_len: usize,
        /// Length of the second series.
        b_len: usize,
    },

    /// Returned when a time series contains NaN, infinity, or negative infinity.
    #[error("time series contains non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the first non-finite value found.
        index: usize,
    },
}
