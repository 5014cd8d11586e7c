//! Regression validation helpers — shape, emptiness, and finiteness checks.
//!
//! Purpose
//! -------
//! Run every input check the driver needs before any numeric work, returning
//! fatal problems as [`RegressionError`]s and shape caveats as
//! [`Diagnostic`]s.
//!
//! Conventions
//! -----------
//! - Rows are time samples (`ct`), columns are state coordinates (`k`).
//! - The shape-equality check runs first, so the shape heuristics only need
//!   to inspect one matrix.
//! - The first offending entry is reported, scanning `dX` before `X` in
//!   row-major order.
use crate::regression::{
    core::diagnostics::{Diagnostic, DiagnosticKind, MAX_STATE_DIM, MIN_SAMPLES},
    errors::{RegressionError, RegressionResult},
};
use ndarray::ArrayView2;

/// Validate a `(dX, X)` pair and collect shape diagnostics.
///
/// # Errors
/// - [`RegressionError::ShapeMismatch`] if the shapes differ.
/// - [`RegressionError::EmptyInput`] if there are no rows or no columns.
/// - [`RegressionError::NonFiniteData`] for the first NaN/±inf entry.
pub fn validate_inputs(
    dx: ArrayView2<f64>, x: ArrayView2<f64>,
) -> RegressionResult<Vec<Diagnostic>> {
    if dx.dim() != x.dim() {
        return Err(RegressionError::ShapeMismatch { x: x.dim(), dx: dx.dim() });
    }
    let (ct, k) = x.dim();
    if ct == 0 || k == 0 {
        return Err(RegressionError::EmptyInput { rows: ct, cols: k });
    }
    validate_finite("dX", dx)?;
    validate_finite("X", x)?;
    Ok(shape_diagnostics(ct, k))
}

/// Reject the first non-finite entry of `m`.
///
/// # Errors
/// [`RegressionError::NonFiniteData`] naming `matrix`, the row, and the column.
pub fn validate_finite(matrix: &'static str, m: ArrayView2<f64>) -> RegressionResult<()> {
    for ((row, col), &value) in m.indexed_iter() {
        if !value.is_finite() {
            return Err(RegressionError::NonFiniteData { matrix, row, col, value });
        }
    }
    Ok(())
}

/// Shape heuristics for a `ct × k` problem.
///
/// - `k > MAX_STATE_DIM` or `ct < MIN_SAMPLES` → `SuspiciousShape`.
/// - `ct < k` → `RankDeficiencyRisk`.
pub fn shape_diagnostics(ct: usize, k: usize) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    if k > MAX_STATE_DIM || ct < MIN_SAMPLES {
        out.push(Diagnostic::new(
            DiagnosticKind::SuspiciousShape,
            format!(
                "input has {ct} samples of dimension {k}; rows should be time samples \
                 (expected k <= {MAX_STATE_DIM} and ct >= {MIN_SAMPLES})"
            ),
        ));
    }
    if ct < k {
        out.push(Diagnostic::new(
            DiagnosticKind::RankDeficiencyRisk,
            format!("fewer samples ({ct}) than state dimensions ({k}); X is rank deficient"),
        ));
    }
    out
}
