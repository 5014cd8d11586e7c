//! Errors for skew-symmetric affine regression (input validation, skew
//! parameter layout, initialization, and optimizer failures).
//!
//! This module defines the model error type, [`RegressionError`], used across
//! the Rust core and, behind the `python-bindings` feature, converted to a
//! Python `ValueError` at the PyO3 boundary.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy); `row` is the time sample,
//!   `col` the state coordinate.
//! - Fatal errors abort before any optimization work; non-fatal conditions
//!   are reported as [`Diagnostic`](crate::regression::core::diagnostics::Diagnostic)s
//!   instead.
//! - Optimizer/backend errors are carried unchanged in
//!   [`RegressionError::Optimization`].
use crate::optimization::errors::OptError;
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Crate-wide result alias for regression operations.
pub type RegressionResult<T> = Result<T, RegressionError>;

/// Unified error type for skew-symmetric regression.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    // ---- Input/data validation ----
    /// `dX` and `X` must have the same shape `(ct, k)`.
    ShapeMismatch { x: (usize, usize), dx: (usize, usize) },

    /// Inputs must have at least one row and one column.
    EmptyInput { rows: usize, cols: usize },

    /// A data point is NaN/±inf.
    NonFiniteData { matrix: &'static str, row: usize, col: usize, value: f64 },

    // ---- Skew parameter layout ----
    /// Skew-parameter vector length is not `k(k-1)/2` for any integer `k`.
    DimensionMismatch { len: usize },

    /// Parameter vector length is not `k(k-1)/2 + k`.
    ThetaLengthMismatch { expected: usize, actual: usize },

    // ---- Init validation ----
    /// Init::Fixed must have length `k(k-1)/2 + k`.
    InvalidInitLength { expected: usize, actual: usize },

    /// Init::Fixed entries must be finite.
    InvalidInitValue { index: usize, value: f64 },

    /// Pseudo-inverse of `X` could not be computed for the warm start.
    PseudoInverseFailed { reason: String },

    // ---- Fitted model ----
    /// Model hasn't been fitted yet.
    ModelNotFitted,

    /// Prediction input has the wrong number of columns.
    PredictDimMismatch { expected: usize, actual: usize },

    // ---- Estimation / optimizer ----
    /// Optimizer error surfaced while fitting.
    Optimization(OptError),
}

impl std::error::Error for RegressionError {}

impl std::fmt::Display for RegressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            RegressionError::ShapeMismatch { x, dx } => {
                write!(
                    f,
                    "dX and X must have the same shape; got dX {}x{} and X {}x{}",
                    dx.0, dx.1, x.0, x.1
                )
            }
            RegressionError::EmptyInput { rows, cols } => {
                write!(f, "Input matrices must be non-empty; got {rows}x{cols}")
            }
            RegressionError::NonFiniteData { matrix, row, col, value } => {
                write!(f, "{matrix}[{row}, {col}] is non-finite: {value}")
            }
            // ---- Skew parameter layout ----
            RegressionError::DimensionMismatch { len } => {
                write!(f, "Skew parameter vector of length {len} does not match any k(k-1)/2")
            }
            RegressionError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Parameter vector length mismatch: expected {expected}, got {actual}")
            }
            // ---- Init validation ----
            RegressionError::InvalidInitLength { expected, actual } => {
                write!(f, "Init::Fixed must have length {expected}; got {actual}")
            }
            RegressionError::InvalidInitValue { index, value } => {
                write!(f, "Init::Fixed entries must be finite; index {index} has value {value}")
            }
            RegressionError::PseudoInverseFailed { reason } => {
                write!(f, "Warm start failed, pseudo-inverse of X unavailable: {reason}")
            }
            // ---- Fitted model ----
            RegressionError::ModelNotFitted => {
                write!(f, "Model has not been fitted yet.")
            }
            RegressionError::PredictDimMismatch { expected, actual } => {
                write!(f, "Prediction input must have {expected} columns; got {actual}")
            }
            // ---- Estimation / optimizer ----
            RegressionError::Optimization(err) => {
                write!(f, "Optimization failed: {err}")
            }
        }
    }
}

impl From<OptError> for RegressionError {
    fn from(err: OptError) -> Self {
        match err {
            OptError::SkewDimensionMismatch { len } => RegressionError::DimensionMismatch { len },
            OptError::ThetaLengthMismatch { expected, actual } => {
                RegressionError::ThetaLengthMismatch { expected, actual }
            }
            other => RegressionError::Optimization(other),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<RegressionError> for PyErr {
    fn from(err: RegressionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Layout errors survive a round trip through the optimizer layer, while
    // other optimizer errors are wrapped.
    //
    // Expect
    // ------
    // - `DimensionMismatch` comes back unchanged; `EmptyTheta` is wrapped in
    //   `Optimization`.
    fn opt_error_conversion_keeps_layout_errors() {
        let original = RegressionError::DimensionMismatch { len: 2 };
        let back = RegressionError::from(OptError::from(original.clone()));
        assert_eq!(back, original);

        let wrapped = RegressionError::from(OptError::EmptyTheta);
        assert_eq!(wrapped, RegressionError::Optimization(OptError::EmptyTheta));
    }

    #[test]
    // Purpose
    // -------
    // Shape mismatches name both shapes in the message.
    fn shape_mismatch_message_names_both_shapes() {
        let err = RegressionError::ShapeMismatch { x: (10, 4), dx: (10, 3) };
        let msg = err.to_string();
        assert!(msg.contains("10x3"));
        assert!(msg.contains("10x4"));
    }
}
