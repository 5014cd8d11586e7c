//! Objective & gradient evaluator for skew-symmetric affine regression.
//!
//! Purpose
//! -------
//! Evaluate the squared-error loss
//! `f(z) = ½‖dX − X·M − 1·yᵀ‖²_F` and its exact gradient with respect to the
//! packed parameter vector `z = (vectorize(M), y)`.
//!
//! Key behaviors
//! -------------
//! - [`unpack`] / [`pack`] convert between `z` and `(M, y)`; the split point
//!   is `len(z) − k`.
//! - [`evaluate`] returns `(f, ∇f)` in one pass over the residual matrix
//!   `R = dX − X·M − 1·yᵀ`:
//!   - `∂f/∂y = −Σ_t R[t, :]`,
//!   - `G = −Xᵀ·R`, `∂f/∂m[i<j] = (G − Gᵀ)[i, j]`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `data` has already been validated (equal shapes, finite entries).
//! - Evaluation is pure: nothing is cached between calls, and `R` is
//!   recomputed each time.
//!
//! Testing notes
//! -------------
//! - The analytic gradient is checked against central finite differences on
//!   random data; the loss is checked at a known exact solution.
use crate::optimization::cg_optimizer::{Grad, Theta};
use crate::regression::{
    core::{
        data::RegressionData,
        skew::{matricize, skew_len, vectorize},
    },
    errors::{RegressionError, RegressionResult},
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, s};

/// Split `z` into the skew matrix `M` and the offset `y` for dimension `k`.
///
/// # Errors
/// - [`RegressionError::ThetaLengthMismatch`] if `len(z) ≠ k(k-1)/2 + k`.
pub fn unpack(theta: ArrayView1<f64>, k: usize) -> RegressionResult<(Array2<f64>, Array1<f64>)> {
    let expected = skew_len(k) + k;
    if theta.len() != expected {
        return Err(RegressionError::ThetaLengthMismatch { expected, actual: theta.len() });
    }
    let split = theta.len() - k;
    let m = matricize(theta.slice(s![..split]))?;
    let y = theta.slice(s![split..]).to_owned();
    Ok((m, y))
}

/// Pack `(M, y)` into `z = (vectorize(M), y)`.
pub fn pack(m: ArrayView2<f64>, y: ArrayView1<f64>) -> Theta {
    vectorize(m).iter().chain(y.iter()).copied().collect()
}

/// Residual matrix `R = dX − X·M − 1·yᵀ`.
pub fn residual_matrix(
    dx: ArrayView2<f64>, x: ArrayView2<f64>, m: ArrayView2<f64>, y: ArrayView1<f64>,
) -> Array2<f64> {
    let mut r = &dx - &x.dot(&m);
    r -= &y;
    r
}

/// Loss and gradient at `z`.
///
/// # Errors
/// - [`RegressionError::ThetaLengthMismatch`] if `z` does not match `data.dim()`.
pub fn evaluate(theta: &Theta, data: &RegressionData) -> RegressionResult<(f64, Grad)> {
    let (m, y) = unpack(theta.view(), data.dim())?;
    let r = residual_matrix(data.dx.view(), data.x.view(), m.view(), y.view());
    let loss = 0.5 * r.iter().map(|v| v * v).sum::<f64>();

    let grad_y = -r.sum_axis(Axis(0));
    let g = -data.x.t().dot(&r);
    let g_skew = &g - &g.t();
    let grad = pack(g_skew.view(), grad_y.view());
    Ok((loss, grad))
}

/// Loss only; same contract as [`evaluate`].
pub fn loss(theta: &Theta, data: &RegressionData) -> RegressionResult<f64> {
    let (m, y) = unpack(theta.view(), data.dim())?;
    let r = residual_matrix(data.dx.view(), data.x.view(), m.view(), y.view());
    Ok(0.5 * r.iter().map(|v| v * v).sum::<f64>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use finitediff::FiniteDiff;
    use ndarray::array;
    use rand::{SeedableRng, rngs::StdRng};
    use rand_distr::{Distribution, Normal};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Zero loss and zero gradient at an exact solution.
    // - Agreement of the analytic gradient with central differences.
    // - The length check on `z`.
    // -------------------------------------------------------------------------

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Array2<f64> {
        let normal = Normal::new(0.0, 1.0).expect("valid normal");
        Array2::from_shape_fn((rows, cols), |_| normal.sample(rng))
    }

    #[test]
    // Purpose
    // -------
    // Data generated exactly from `(M, y)` gives zero loss and zero gradient
    // at `z = pack(M, y)`.
    //
    // Given
    // -----
    // - Random `X` (30×3), `M` with free entries (0.5, -1, 2), `y = (0.1, 0.2, -0.3)`.
    //
    // Expect
    // ------
    // - `f ≈ 0` and `‖∇f‖∞ ≈ 0`.
    fn exact_solution_has_zero_loss_and_gradient() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(7);
        let x = random_matrix(&mut rng, 30, 3);
        let m = matricize(array![0.5, -1.0, 2.0].view()).expect("k = 3");
        let y = array![0.1, 0.2, -0.3];
        let dx = x.dot(&m) + &y;
        let data = RegressionData::new(dx, x).expect("valid data");
        let theta = pack(m.view(), y.view());

        // Act
        let (f, g) = evaluate(&theta, &data).expect("evaluate succeeds");

        // Assert
        assert!(f < 1e-24, "loss = {f}");
        assert!(g.iter().all(|v| v.abs() < 1e-10), "grad = {g:?}");
    }

    #[test]
    // Purpose
    // -------
    // The analytic gradient matches central finite differences.
    //
    // Given
    // -----
    // - Random `X`, `dX` (40×4) and a random `z` of length 10.
    //
    // Expect
    // ------
    // - Relative error below 1e-5 in every coordinate.
    fn analytic_gradient_matches_central_differences() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(11);
        let x = random_matrix(&mut rng, 40, 4);
        let dx = random_matrix(&mut rng, 40, 4);
        let data = RegressionData::new(dx, x).expect("valid data");
        let theta: Theta = random_matrix(&mut rng, 1, 10).row(0).to_owned();

        // Act
        let (_, g) = evaluate(&theta, &data).expect("evaluate succeeds");
        let fd = theta.central_diff(&|z: &Theta| loss(z, &data).unwrap_or(f64::NAN));

        // Assert
        for (a, n) in g.iter().zip(fd.iter()) {
            assert_relative_eq!(*a, *n, epsilon = 1e-5, max_relative = 1e-5);
        }
    }

    #[test]
    // Purpose
    // -------
    // A parameter vector of the wrong length is rejected.
    //
    // Expect
    // ------
    // - `ThetaLengthMismatch { expected: 6, actual: 5 }` for `k = 3`.
    fn wrong_theta_length_is_rejected() {
        let data =
            RegressionData::new(Array2::zeros((25, 3)), Array2::zeros((25, 3))).expect("valid");
        let theta = Theta::zeros(5);
        assert_eq!(
            evaluate(&theta, &data),
            Err(RegressionError::ThetaLengthMismatch { expected: 6, actual: 5 })
        );
    }
}
