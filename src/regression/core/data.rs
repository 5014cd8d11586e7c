//! Regression data container.
//!
//! Purpose
//! -------
//! Hold a validated `(dX, X)` pair for skew-symmetric regression together
//! with the shape diagnostics raised while validating it. Constructing
//! [`RegressionData`] is the single place where raw matrices enter the
//! regression stack, so downstream code may assume equal shapes, at least
//! one row and column, and finite entries.
//!
//! Conventions
//! -----------
//! - Rows are time samples (`ct`), columns are state coordinates (`k`).
//! - Argument order is `(dX, X)` throughout, matching `dX ≈ X·M + 1·yᵀ`.
use crate::regression::{
    core::{diagnostics::Diagnostic, skew::skew_len, validation::validate_inputs},
    errors::RegressionResult,
};
use ndarray::Array2;

/// `RegressionData` — validated increments `dX`, states `X`, and diagnostics.
///
/// Invariants
/// ----------
/// - `dx.dim() == x.dim() == (ct, k)` with `ct > 0` and `k > 0`.
/// - Every entry of `dx` and `x` is finite.
/// - `diagnostics` holds the shape caveats found at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionData {
    /// Derivatives or increments, `ct × k`.
    pub dx: Array2<f64>,
    /// States, `ct × k`.
    pub x: Array2<f64>,
    /// Non-fatal shape diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl RegressionData {
    /// Validate and wrap a `(dX, X)` pair.
    ///
    /// Errors
    /// ------
    /// - `RegressionError::ShapeMismatch` if the shapes differ.
    /// - `RegressionError::EmptyInput` for zero rows or columns.
    /// - `RegressionError::NonFiniteData` for the first NaN/±inf entry.
    pub fn new(dx: Array2<f64>, x: Array2<f64>) -> RegressionResult<Self> {
        let diagnostics = validate_inputs(dx.view(), x.view())?;
        Ok(Self { dx, x, diagnostics })
    }

    /// Number of time samples `ct`.
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    /// State dimension `k`.
    pub fn dim(&self) -> usize {
        self.x.ncols()
    }

    /// Length of the packed parameter vector, `k(k-1)/2 + k`.
    pub fn theta_len(&self) -> usize {
        skew_len(self.dim()) + self.dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regression::{core::diagnostics::DiagnosticKind, errors::RegressionError};

    #[test]
    // Purpose
    // -------
    // Construction reports sizes and keeps shape diagnostics.
    //
    // Given
    // -----
    // - `5×3` zero matrices (too few samples).
    //
    // Expect
    // ------
    // - `n_samples = 5`, `dim = 3`, `theta_len = 6`, one `SuspiciousShape`.
    fn new_reports_sizes_and_diagnostics() {
        let data =
            RegressionData::new(Array2::zeros((5, 3)), Array2::zeros((5, 3))).expect("valid data");
        assert_eq!(data.n_samples(), 5);
        assert_eq!(data.dim(), 3);
        assert_eq!(data.theta_len(), 6);
        assert_eq!(data.diagnostics.len(), 1);
        assert_eq!(data.diagnostics[0].kind, DiagnosticKind::SuspiciousShape);
    }

    #[test]
    // Purpose
    // -------
    // Mismatched shapes never produce a container.
    fn new_rejects_shape_mismatch() {
        let err = RegressionData::new(Array2::zeros((30, 2)), Array2::zeros((30, 3)))
            .expect_err("shapes differ");
        assert!(matches!(err, RegressionError::ShapeMismatch { .. }));
    }
}
