//! Conversion helpers shared by the PyO3 bindings.
//!
//! Everything here is compiled only with the `python-bindings` feature. The
//! helpers turn loosely typed Python inputs (numpy arrays, pandas frames,
//! nested sequences, keyword options) into validated Rust values and map
//! failures to Python exceptions.
#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{PyReadonlyArray1, PyReadonlyArray2};

#[cfg(feature = "python-bindings")]
use crate::{
    optimization::cg_optimizer::{CGOptions, DEFAULT_MAX_EVALS, Tolerances},
    regression::{
        core::{diagnostics::DEFAULT_STALL_THRESHOLD, init::Init, options::FitOptions},
        errors::RegressionError,
    },
};

/// Copy a 2-D float input into an owned `Array2<f64>`.
///
/// Accepts, in order of preference:
/// - a 2-D `numpy.ndarray` of `float64`,
/// - any object with a `to_numpy()` method (e.g. `pandas.DataFrame`),
/// - a rectangular sequence of float sequences.
///
/// # Errors
/// - `TypeError` if the input matches none of the above.
/// - `ValueError` if a nested sequence is ragged.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(raw_data: &Bound<'py, PyAny>, name: &str) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro.as_array().to_owned());
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(format!(
            "{name} must be a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64"
        ))
    })?;
    let n = rows.len();
    let k = rows.first().map_or(0, Vec::len);
    if let Some(bad) = rows.iter().position(|r| r.len() != k) {
        return Err(PyValueError::new_err(format!(
            "{name} is ragged: row {bad} has {} entries, expected {k}",
            rows[bad].len()
        )));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((n, k), flat)
        .map_err(|e| PyValueError::new_err(format!("{name} could not be reshaped: {e}")))
}

/// Copy a 1-D float input into an owned `Array1<f64>`.
///
/// # Errors
/// - `TypeError` if the input is neither a 1-D `float64` array nor a float
///   sequence.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vector<'py>(raw_data: &Bound<'py, PyAny>, name: &str) -> PyResult<Array1<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }
    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(format!("{name} must be a 1-D numpy.ndarray or sequence of float64"))
    })?;
    Ok(Array1::from(vec))
}

/// Build [`FitOptions`] from the keyword arguments of the Python constructor.
///
/// `init` is one of `"warm_start"` (default), `"zeros"` or `"fixed"`; the
/// latter requires `init_fixed`, the packed starting vector. Its length is
/// checked against the data at fit time.
///
/// # Errors
/// - `ValueError` for an unknown `init`, a missing `init_fixed`, or invalid
///   tolerances/budget.
#[cfg(feature = "python-bindings")]
#[allow(clippy::too_many_arguments)]
pub fn build_fit_options<'py>(
    init: Option<&str>, init_fixed: Option<&Bound<'py, PyAny>>, max_evals: Option<usize>,
    tol_cost: Option<f64>, tol_grad: Option<f64>, stall_threshold: Option<usize>,
    verbose: Option<bool>,
) -> PyResult<FitOptions> {
    let init_policy = extract_init(init, init_fixed)?;
    let cg_opts = extract_cg_opts(max_evals, tol_cost, tol_grad, verbose)?;
    let stall = stall_threshold.unwrap_or(DEFAULT_STALL_THRESHOLD);
    Ok(FitOptions::new(init_policy, cg_opts, stall))
}

#[cfg(feature = "python-bindings")]
fn extract_init<'py>(init: Option<&str>, init_fixed: Option<&Bound<'py, PyAny>>) -> PyResult<Init> {
    match init.unwrap_or("warm_start") {
        "warm_start" => Ok(Init::warm_start()),
        "zeros" => Ok(Init::zeros()),
        "fixed" => {
            let raw = init_fixed.ok_or_else(|| {
                PyValueError::new_err("init_fixed must be provided when init='fixed'")
            })?;
            Ok(Init::Fixed(extract_f64_vector(raw, "init_fixed")?))
        }
        other => Err(PyValueError::new_err(format!(
            "invalid init policy {other:?} (expected 'warm_start', 'zeros', or 'fixed')"
        ))),
    }
}

#[cfg(feature = "python-bindings")]
fn extract_cg_opts(
    max_evals: Option<usize>, tol_cost: Option<f64>, tol_grad: Option<f64>, verbose: Option<bool>,
) -> PyResult<CGOptions> {
    let defaults = Tolerances::default();
    // Tolerances::new -> OptResult<Tolerances> -> RegressionError -> PyErr
    let tols = Tolerances::new(
        tol_grad,
        tol_cost.or(defaults.tol_cost),
        max_evals.unwrap_or(DEFAULT_MAX_EVALS),
    )
    .map_err(RegressionError::from)?;
    Ok(CGOptions::new(tols, verbose.unwrap_or(false)))
}
