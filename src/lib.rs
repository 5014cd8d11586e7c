//! skew_dynamics — skew-symmetric affine regression of linear dynamics.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the regression to Python via the `_skew_dynamics` extension module. Given
//! paired samples `X` (states) and `dX` (derivatives or increments), the crate
//! fits `dX ≈ X·M + 1·yᵀ` with `M = −Mᵀ`.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`optimization` and `regression`) as the
//!   public crate surface.
//! - Define the `#[pyclass]` wrapper and the `#[pymodule]` initializer for the
//!   `_skew_dynamics` Python extension when `python-bindings` is enabled.
//! - Register the `regression` submodule under `skew_dynamics` so that
//!   dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Non-fatal diagnostics travel with every fit. The Python layer re-emits
//!   them as `RuntimeWarning`s and also exposes them as a property.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should call [`regression::fit`] or
//!   [`regression::SkewRegression`] directly and can ignore the PyO3 items.
//! - The Python packaging layer imports `_skew_dynamics` and wraps its classes
//!   in user-facing APIs.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_skew_pipeline.rs`.

pub mod optimization;
pub mod regression;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyRuntimeWarning, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    regression::{
        core::{data::RegressionData, diagnostics::Diagnostic},
        errors::RegressionError,
        models::{SkewFit, SkewRegression},
    },
    utils::{build_fit_options, extract_f64_matrix},
};

#[cfg(feature = "python-bindings")]
type FitTuple<'py> = (Bound<'py, PyArray2<f64>>, Bound<'py, PyArray1<f64>>, Vec<f64>);

/// SkewRegression — Python-facing wrapper for [`SkewRegression`].
///
/// Constructed from Python as
/// `SkewRegression(init='warm_start', init_fixed=None, max_evals=1000,
/// tol_cost=1e-12, tol_grad=None, stall_threshold=500, verbose=False)`.
///
/// - `init`: `'warm_start'`, `'zeros'` or `'fixed'`.
/// - `init_fixed`: packed start `(vectorize(M₀), y₀)`, required for `'fixed'`.
///
/// `fit(dx, x)` returns `(M, y, trace)` and warns once per diagnostic.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "SkewRegression", module = "skew_dynamics.regression")]
pub struct PySkewRegression {
    inner: SkewRegression,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PySkewRegression {
    #[new]
    #[pyo3(
        signature = (
            init = None,
            init_fixed = None,
            max_evals = None,
            tol_cost = None,
            tol_grad = None,
            stall_threshold = None,
            verbose = None,
        ),
        text_signature = "(init='warm_start', init_fixed=None, max_evals=1000, tol_cost=1e-12, \
                          tol_grad=None, stall_threshold=500, verbose=False)"
    )]
    #[allow(clippy::too_many_arguments)]
    pub fn new<'py>(
        init: Option<&str>, init_fixed: Option<&Bound<'py, PyAny>>, max_evals: Option<usize>,
        tol_cost: Option<f64>, tol_grad: Option<f64>, stall_threshold: Option<usize>,
        verbose: Option<bool>,
    ) -> PyResult<Self> {
        let options = build_fit_options(
            init,
            init_fixed,
            max_evals,
            tol_cost,
            tol_grad,
            stall_threshold,
            verbose,
        )?;
        Ok(PySkewRegression { inner: SkewRegression::new(options) })
    }

    #[pyo3(signature = (dx, x), text_signature = "(self, dx, x, /)")]
    pub fn fit<'py>(
        &mut self, py: Python<'py>, dx: &Bound<'py, PyAny>, x: &Bound<'py, PyAny>,
    ) -> PyResult<FitTuple<'py>> {
        let data = extract_regression_data(dx, x)?;
        let fit = self.inner.fit(&data)?.clone();
        warn_diagnostics(py, &fit.diagnostics)?;
        Ok(fit_to_tuple(py, fit))
    }

    #[pyo3(signature = (x), text_signature = "(self, x, /)")]
    pub fn predict<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let x = extract_f64_matrix(x, "x")?;
        let pred = self.inner.predict(x.view())?;
        Ok(pred.into_pyarray(py))
    }

    #[getter]
    pub fn diagnostics(&self) -> PyResult<Vec<(String, String)>> {
        let fit = self.fitted()?;
        Ok(fit.diagnostics.iter().map(|d| (format!("{:?}", d.kind), d.message.clone())).collect())
    }

    #[getter]
    pub fn loss(&self) -> PyResult<f64> {
        Ok(self.fitted()?.loss)
    }

    #[getter]
    pub fn converged(&self) -> PyResult<bool> {
        Ok(self.fitted()?.converged)
    }

    #[getter]
    pub fn status(&self) -> PyResult<String> {
        Ok(self.fitted()?.status.clone())
    }

    #[getter]
    pub fn line_searches(&self) -> PyResult<usize> {
        Ok(self.fitted()?.line_searches)
    }

    #[getter]
    pub fn evaluations(&self) -> PyResult<usize> {
        Ok(self.fitted()?.evaluations)
    }
}

#[cfg(feature = "python-bindings")]
impl PySkewRegression {
    fn fitted(&self) -> PyResult<&SkewFit> {
        self.inner.fitted.as_ref().ok_or_else(|| RegressionError::ModelNotFitted.into())
    }
}

/// fit — one-shot regression with default options.
///
/// Returns `(M, y, trace)`; diagnostics are emitted as `RuntimeWarning`s.
///
/// Errors
/// ------
/// - `ValueError` for mismatched, empty, or non-finite inputs.
/// - `TypeError` if an input is not array-like.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "fit")]
#[pyo3(signature = (dx, x), text_signature = "(dx, x, /)")]
pub fn py_fit<'py>(
    py: Python<'py>, dx: &Bound<'py, PyAny>, x: &Bound<'py, PyAny>,
) -> PyResult<FitTuple<'py>> {
    let data = extract_regression_data(dx, x)?;
    let mut model = SkewRegression::default();
    let fit = model.fit(&data)?.clone();
    warn_diagnostics(py, &fit.diagnostics)?;
    Ok(fit_to_tuple(py, fit))
}

#[cfg(feature = "python-bindings")]
fn extract_regression_data<'py>(
    dx: &Bound<'py, PyAny>, x: &Bound<'py, PyAny>,
) -> PyResult<RegressionData> {
    let dx = extract_f64_matrix(dx, "dx")?;
    let x = extract_f64_matrix(x, "x")?;
    Ok(RegressionData::new(dx, x)?)
}

#[cfg(feature = "python-bindings")]
fn warn_diagnostics(py: Python<'_>, diagnostics: &[Diagnostic]) -> PyResult<()> {
    if diagnostics.is_empty() {
        return Ok(());
    }
    let warnings = py.import("warnings")?;
    let category = py.get_type::<PyRuntimeWarning>();
    for diagnostic in diagnostics {
        warnings.call_method1("warn", (diagnostic.to_string(), &category))?;
    }
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn fit_to_tuple(py: Python<'_>, fit: SkewFit) -> FitTuple<'_> {
    (fit.m.into_pyarray(py), fit.y.into_pyarray(py), fit.trace)
}

/// _skew_dynamics — PyO3 module initializer.
///
/// Creates the `regression` submodule, attaches it to the top-level module,
/// and registers it in `sys.modules` as `skew_dynamics.regression`.
///
/// Errors
/// ------
/// - `PyErr` if creating the submodule or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _skew_dynamics<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let regression_mod = PyModule::new(_py, "regression")?;
    regression(_py, m, &regression_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("skew_dynamics.regression", regression_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn regression<'py>(
    _py: Python, skew_dynamics: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PySkewRegression>()?;
    m.add_function(wrap_pyfunction!(py_fit, m)?)?;
    skew_dynamics.add_submodule(m)?;
    Ok(())
}
