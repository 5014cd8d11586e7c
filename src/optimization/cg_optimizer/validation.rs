//! Input and output checks for the conjugate-gradient optimizer.
//!
//! - Configuration: [`verify_tol_grad`], [`verify_tol_cost`],
//!   [`verify_max_evals`].
//! - Starting point: [`validate_theta0`], run before any evaluation is spent.
//! - Gradients: [`validate_grad`] (length and finiteness).
//! - Results: [`validate_theta_hat`], [`validate_value`].
use crate::optimization::{
    cg_optimizer::{Grad, Theta},
    errors::{OptError, OptResult},
};

/// Reason string for an optional tolerance, or `None` if it is acceptable.
fn tolerance_problem(tol: Option<f64>) -> Option<(f64, &'static str)> {
    match tol {
        Some(t) if !t.is_finite() => Some((t, "tolerance must be finite")),
        Some(t) if t <= 0.0 => Some((t, "tolerance must be strictly positive")),
        _ => None,
    }
}

/// First non-finite entry of `v` as `(index, value)`.
fn first_non_finite(v: &Theta) -> Option<(usize, f64)> {
    v.iter().copied().enumerate().find(|(_, x)| !x.is_finite())
}

/// `None` disables the gradient-norm stop; `Some(t)` needs `0 < t < ∞`.
///
/// # Errors
/// [`OptError::InvalidTolGrad`].
pub fn verify_tol_grad(tol: Option<f64>) -> OptResult<()> {
    match tolerance_problem(tol) {
        Some((tol, reason)) => Err(OptError::InvalidTolGrad { tol, reason }),
        None => Ok(()),
    }
}

/// `None` disables the relative-improvement stop; `Some(t)` needs `0 < t < ∞`.
///
/// # Errors
/// [`OptError::InvalidTolCost`].
pub fn verify_tol_cost(tol: Option<f64>) -> OptResult<()> {
    match tolerance_problem(tol) {
        Some((tol, reason)) => Err(OptError::InvalidTolCost { tol, reason }),
        None => Ok(()),
    }
}

/// The evaluation budget must allow at least the initial evaluation.
///
/// # Errors
/// [`OptError::InvalidMaxEvals`] if `max_evals == 0`.
pub fn verify_max_evals(max_evals: usize) -> OptResult<()> {
    if max_evals == 0 {
        return Err(OptError::InvalidMaxEvals {
            max_evals,
            reason: "at least one evaluation is required",
        });
    }
    Ok(())
}

/// Reject empty or non-finite starting vectors.
///
/// # Errors
/// - [`OptError::EmptyTheta`].
/// - [`OptError::InvalidThetaInput`] at the first non-finite entry.
pub fn validate_theta0(theta: &Theta) -> OptResult<()> {
    if theta.is_empty() {
        return Err(OptError::EmptyTheta);
    }
    match first_non_finite(theta) {
        Some((index, value)) => Err(OptError::InvalidThetaInput { index, value }),
        None => Ok(()),
    }
}

/// A gradient must have `dim` entries, all finite.
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] (checked first).
/// - [`OptError::InvalidGradient`] at the first non-finite entry.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    match first_non_finite(grad) {
        Some((index, value)) => {
            Err(OptError::InvalidGradient { index, value, reason: "non-finite derivative" })
        }
        None => Ok(()),
    }
}

/// Unwrap the solver's best vector, which must exist and be finite.
///
/// # Errors
/// - [`OptError::MissingThetaHat`].
/// - [`OptError::InvalidThetaHat`] at the first non-finite entry.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> OptResult<Theta> {
    let theta = theta_hat.ok_or(OptError::MissingThetaHat)?;
    if let Some((index, value)) = first_non_finite(&theta) {
        return Err(OptError::InvalidThetaHat { index, value, reason: "non-finite estimate" });
    }
    Ok(theta)
}

/// # Errors
/// [`OptError::NonFiniteCost`] for `NaN` or `±∞`.
pub fn validate_value(value: f64) -> OptResult<()> {
    if value.is_finite() { Ok(()) } else { Err(OptError::NonFiniteCost { value }) }
}
