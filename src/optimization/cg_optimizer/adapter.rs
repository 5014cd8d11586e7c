//! Adapter that exposes a user `Objective` as an `argmin` problem.
//!
//! The objective is already a cost, so values and analytic gradients pass
//! through unchanged. When no gradient is provided we finite-difference the
//! cost closure instead. Objectives with a fused `value_and_grad` are
//! evaluated once per point: `cost` keeps the gradient for the `gradient`
//! call that follows at the same `θ`.
use std::cell::RefCell;

use crate::optimization::{
    cg_optimizer::{
        finite_diff::fd_gradient,
        traits::Objective,
        types::{Cost, Grad, Theta},
        validation::validate_grad,
    },
    errors::OptError,
};
use argmin::core::{CostFunction, Error, Gradient};

/// Bridges a user `Objective` to `argmin`'s `CostFunction` and `Gradient`.
///
/// - `CostFunction::cost` returns `c(θ)` after a finiteness check.
/// - `Gradient::gradient` returns the analytic `∇c(θ)` when implemented, or
///   a finite-difference gradient of the cost otherwise.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: Objective> {
    pub f: &'a F,
    pub data: &'a F::Data,
    /// Gradient produced alongside the last fused cost evaluation.
    cached_grad: RefCell<Option<(Theta, Grad)>>,
}

impl<'a, F: Objective> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the cost `c(θ)`.
    ///
    /// Tries the fused `value_and_grad` first and keeps its gradient for the
    /// next `gradient` call; falls back to `value` when it is not implemented.
    ///
    /// # Errors
    /// - Propagates any `OptError` from the user's `value_and_grad` or `value`.
    /// - `OptError::NonFiniteCost` if the value is `NaN` or infinite.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = match self.f.value_and_grad(theta, self.data) {
            Ok((value, grad)) => {
                *self.cached_grad.borrow_mut() = Some((theta.clone(), grad));
                value
            }
            Err(OptError::GradientNotImplemented) => self.f.value(theta, self.data)?,
            Err(e) => return Err(e.into()),
        };
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(output)
    }
}

impl<'a, F: Objective> Gradient for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Evaluate `∇c(θ)`.
    ///
    /// An analytic gradient is validated for shape and finiteness. If the
    /// objective reports `GradientNotImplemented`, the cost closure is
    /// differenced; evaluation errors inside the closure are captured and
    /// returned as `NaN` so that [`fd_gradient`] can retry or report them.
    ///
    /// # Errors
    /// - Propagates user errors from `grad` other than `GradientNotImplemented`.
    /// - Propagates validation and finite-difference failures.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        let cached = self.cached_grad.borrow_mut().take();
        if let Some((at, g)) = cached {
            if at == *theta {
                validate_grad(&g, theta.len())?;
                return Ok(g);
            }
        }
        match self.f.grad(theta, self.data) {
            Ok(g) => {
                validate_grad(&g, theta.len())?;
                Ok(g)
            }
            Err(OptError::GradientNotImplemented) => {
                let closure_err: RefCell<Option<Error>> = RefCell::new(None);
                let cost_func = |theta: &Theta| -> f64 {
                    match self.cost(theta) {
                        Ok(val) => val,
                        Err(e) => {
                            let mut slot = closure_err.borrow_mut();
                            if slot.is_none() {
                                *slot = Some(e);
                            }
                            f64::NAN
                        }
                    }
                };
                Ok(fd_gradient(theta, &cost_func, &closure_err)?)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl<'a, F: Objective> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `Objective` and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data, cached_grad: RefCell::new(None) }
    }
}
