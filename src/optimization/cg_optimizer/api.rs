//! High-level entry point for minimizing a user-provided `Objective`.
//!
//! Validates the starting point, wraps the model in an `ArgMinAdapter`,
//! builds a [`PolakRibiereCG`] solver from the configured tolerances, and
//! delegates the run to `run_cg`.
use crate::optimization::{
    cg_optimizer::{
        OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        run::run_cg,
        solver::PolakRibiereCG,
        traits::{CGOptions, Objective},
        validation::validate_theta0,
    },
    errors::OptResult,
};

/// Minimize `c(θ)` with Polak–Ribière conjugate gradients.
///
/// # Behavior
/// - Rejects empty or non-finite `theta0`, then calls `f.check(theta0, data)`.
/// - Runs the solver until convergence, two consecutive line-search failures,
///   or `opts.tols.max_evals` evaluations, whichever comes first.
/// - Returns the best point seen, not necessarily the last one evaluated.
///
/// # Errors
/// - [`OptError::EmptyTheta`](crate::optimization::errors::OptError::EmptyTheta)
///   / [`OptError::InvalidThetaInput`](crate::optimization::errors::OptError::InvalidThetaInput)
///   for a bad starting point.
/// - Any error from `f.check`, or from evaluating `f` at `theta0`.
///
/// # Example
/// ```
/// use ndarray::array;
/// use skew_dynamics::optimization::cg_optimizer::{minimize, CGOptions, Objective, Theta, Grad};
/// use skew_dynamics::optimization::errors::OptResult;
///
/// struct Bowl;
/// impl Objective for Bowl {
///     type Data = ();
///     fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
///         Ok(theta.dot(theta))
///     }
///     fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
///         Ok(())
///     }
///     fn grad(&self, theta: &Theta, _: &()) -> OptResult<Grad> {
///         Ok(theta * 2.0)
///     }
/// }
///
/// let out = minimize(&Bowl, array![0.3, -0.7], &(), &CGOptions::default())?;
/// assert!(out.value < 1e-12);
/// # Ok::<(), skew_dynamics::optimization::errors::OptError>(())
/// ```
pub fn minimize<F: Objective>(
    f: &F, theta0: Theta, data: &F::Data, opts: &CGOptions,
) -> OptResult<OptimOutcome> {
    validate_theta0(&theta0)?;
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    let solver = PolakRibiereCG::new(&opts.tols);
    run_cg(theta0, opts, problem, solver)
}
