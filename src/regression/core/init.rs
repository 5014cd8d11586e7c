//! Initialization policies for the packed parameter vector `z = (m, y)`.
//!
//! Purpose
//! -------
//! Decide where the optimizer starts. The default is a least-squares warm
//! start projected onto the skew-symmetric subspace, which lands close to
//! the constrained optimum and keeps the number of line searches small.
//!
//! Key behaviors
//! -------------
//! - [`Init::WarmStart`]: `M₀ = pinv(X)·dX`, `M₀ˢ = ½(M₀ − M₀ᵀ)`,
//!   `y₀ = mean_rows(dX − X·M₀ˢ)`, `z₀ = (vectorize(M₀ˢ), y₀)`.
//! - [`Init::Zeros`]: `z₀ = 0`.
//! - [`Init::Fixed`]: a caller-supplied `z₀`, validated against `k` when the
//!   data are known.
//!
//! Conventions
//! -----------
//! - The pseudo-inverse uses nalgebra's SVD with singular values below
//!   [`PINV_EPS`] treated as zero, so rank-deficient `X` still yields a
//!   (minimum-norm) warm start.
//! - The warm start's `M₀` is the unconstrained least-squares solution
//!   without an intercept; the intercept is recovered afterwards as the mean
//!   residual, which is exact for the projected `M₀ˢ`.
use crate::optimization::cg_optimizer::Theta;
use crate::regression::{
    core::{
        data::RegressionData,
        objective::{pack, residual_matrix},
        skew::{project_skew, skew_len},
    },
    errors::{RegressionError, RegressionResult},
};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2, Axis};

/// Singular values below this threshold are dropped by the pseudo-inverse.
pub const PINV_EPS: f64 = 1e-12;

/// Init — starting-point policy for the regression optimizer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Init {
    /// Skew-projected least-squares solution plus mean-residual offset.
    #[default]
    WarmStart,
    /// All-zero start.
    Zeros,
    /// Explicit packed vector `(vectorize(M₀), y₀)`.
    Fixed(Array1<f64>),
}

impl Init {
    pub const fn warm_start() -> Self {
        Init::WarmStart
    }

    pub const fn zeros() -> Self {
        Init::Zeros
    }

    /// Validated explicit start for a problem of dimension `k`.
    ///
    /// Errors
    /// ------
    /// - `RegressionError::InvalidInitLength` if `theta0.len() ≠ k(k-1)/2 + k`.
    /// - `RegressionError::InvalidInitValue` for the first non-finite entry.
    pub fn fixed(theta0: Array1<f64>, k: usize) -> RegressionResult<Self> {
        validate_fixed(&theta0, k)?;
        Ok(Init::Fixed(theta0))
    }

    /// Materialize the starting vector for `data`.
    ///
    /// `Fixed` vectors are re-validated here, since they may have been built
    /// directly rather than through [`Init::fixed`].
    ///
    /// Errors
    /// ------
    /// - `RegressionError::InvalidInitLength` / `InvalidInitValue` for a bad
    ///   fixed vector.
    /// - `RegressionError::PseudoInverseFailed` if the SVD does not converge.
    pub fn initial_theta(&self, data: &RegressionData) -> RegressionResult<Theta> {
        match self {
            Init::WarmStart => warm_start(data),
            Init::Zeros => Ok(Theta::zeros(data.theta_len())),
            Init::Fixed(theta0) => {
                validate_fixed(theta0, data.dim())?;
                Ok(theta0.clone())
            }
        }
    }
}

/// Least-squares warm start projected onto the skew-symmetric subspace.
///
/// Errors
/// ------
/// - `RegressionError::PseudoInverseFailed` if nalgebra cannot form `pinv(X)`.
pub fn warm_start(data: &RegressionData) -> RegressionResult<Theta> {
    let k = data.dim();
    let pinv = to_dmatrix(&data.x)
        .pseudo_inverse(PINV_EPS)
        .map_err(|reason| RegressionError::PseudoInverseFailed { reason: reason.to_string() })?;
    let m0 = pinv * to_dmatrix(&data.dx);
    let m0 = Array2::from_shape_fn((k, k), |(i, j)| m0[(i, j)]);
    let m_skew = project_skew(m0.view());

    let no_offset = Array1::zeros(k);
    let r = residual_matrix(data.dx.view(), data.x.view(), m_skew.view(), no_offset.view());
    let y0 = r.mean_axis(Axis(0)).unwrap_or(no_offset);
    Ok(pack(m_skew.view(), y0.view()))
}

fn validate_fixed(theta0: &Array1<f64>, k: usize) -> RegressionResult<()> {
    let expected = skew_len(k) + k;
    if theta0.len() != expected {
        return Err(RegressionError::InvalidInitLength { expected, actual: theta0.len() });
    }
    for (index, &value) in theta0.iter().enumerate() {
        if !value.is_finite() {
            return Err(RegressionError::InvalidInitValue { index, value });
        }
    }
    Ok(())
}

/// Copy an `ndarray` matrix into a column-major `DMatrix`.
fn to_dmatrix(a: &Array2<f64>) -> DMatrix<f64> {
    let (rows, cols) = a.dim();
    let mut out = DMatrix::<f64>::zeros(rows, cols);
    for j in 0..cols {
        for i in 0..rows {
            out[(i, j)] = a[[i, j]];
        }
    }
    out
}
