//! cg_optimizer::finite_diff — finite-difference gradient fallback.
//!
//! Purpose
//! -------
//! Provide finite-difference gradients for objectives that do not implement
//! [`Objective::grad`](crate::optimization::cg_optimizer::Objective::grad),
//! with error capture and post-hoc validation, so that the adapter can
//! request derivatives without depending directly on the `finitediff` API.
//!
//! Key behaviors
//! -------------
//! - Central differences are attempted first ([`fd_gradient`]); if the
//!   objective raised an error during differencing or the result fails
//!   validation, a forward-difference gradient is computed instead
//!   ([`run_fd_diff`]).
//! - The `finitediff` closures must return `f64`, so evaluation errors are
//!   routed into a shared `RefCell<Option<Error>>` and reported after the
//!   differencing pass.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the quadratic happy path, error propagation from the
//!   closure, and the non-finite gradient failure.
use crate::optimization::{
    cg_optimizer::{Grad, Theta, validation::validate_grad},
    errors::OptResult,
};
use argmin::core::Error;
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// fd_gradient — central-difference gradient with forward-difference fallback.
///
/// Parameters
/// ----------
/// - `theta`: point at which the gradient is approximated.
/// - `func`: objective closure; writes any evaluation error into
///   `closure_err` and returns `NaN` in that case.
/// - `closure_err`: shared error slot used by `func`.
///
/// Errors
/// ------
/// - Any error captured during the forward-difference pass.
/// - `OptError::GradientDimMismatch` / `OptError::InvalidGradient` if the
///   forward-difference gradient fails validation.
pub fn fd_gradient<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let central = theta.central_diff(func);
    if closure_err.borrow().is_none() && validate_grad(&central, theta.len()).is_ok() {
        return Ok(central);
    }
    run_fd_diff(theta, func, closure_err)
}

/// run_fd_diff — forward-difference gradient with error capture and validation.
///
/// Clears `closure_err`, runs `forward_diff`, then surfaces any captured
/// error before validating the gradient's shape and finiteness.
///
/// # Errors
/// - The captured closure error, converted into `OptError`.
/// - Validation errors from [`validate_grad`].
pub fn run_fd_diff<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    if let Some(err) = closure_err.take() {
        return Err(err.into());
    }
    validate_grad(&fd_grad, theta.len())?;
    Ok(fd_grad)
}
