//! Python extension module.
//!
//! Built only with the `python` feature. Exposes the slice-level [`dtw`]
//! entry point as `_internal._dtw`, with validation failures surfaced as
//! `ValueError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::dtw;

/// Calculate the Dynamic Time Warping distance between two time series.
#[pyfunction]
fn _dtw(ts_a: Vec<f64>, ts_b: Vec<f64>) -> PyResult<f64> {
    dtw(&ts_a, &ts_b)
        .map(|d| d.value())
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn _internal(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(_dtw, m)?)?;
    Ok(())
}
