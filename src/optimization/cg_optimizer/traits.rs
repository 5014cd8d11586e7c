//! Public API surface for objective minimization.
//!
//! - [`Objective`]: trait users implement for their problem.
//! - [`CGOptions`] and [`Tolerances`]: configuration for the optimizer.
//! - [`OptimOutcome`]: normalized result returned by the high-level `minimize` API.
//!
//! Convention: the optimizer *minimizes* `c(θ)`. If an analytic gradient is
//! provided it must be `∇c(θ)`; otherwise finite differences are used.
use crate::optimization::{
    cg_optimizer::{
        types::{Cost, DEFAULT_MAX_EVALS, DEFAULT_TOL_COST, FnEvalMap, Grad, Theta},
        validation::{
            validate_theta_hat, validate_value, verify_max_evals, verify_tol_cost,
            verify_tol_grad,
        },
    },
    errors::{OptError, OptResult},
};
use argmin::core::{TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;

/// User-implemented objective interface.
///
/// - `type Data`: per-problem data carried unchanged into every
///   `value`/`grad`/`check` call.
///
/// Required:
/// - `value(&Theta, &Data) -> OptResult<Cost>`: evaluate `c(θ)`.
/// - `check(&Theta, &Data) -> OptResult<()>`: reject obviously invalid
///   `θ`/`data` pairs. Called once before optimization.
///
/// Optional:
/// - `grad(&Theta, &Data) -> OptResult<Grad>`: analytic gradient `∇c(θ)`.
///   If not implemented, finite differences are used automatically.
/// - `value_and_grad(&Theta, &Data) -> OptResult<(Cost, Grad)>`: both at
///   once, for objectives whose value and gradient share intermediate work.
///   When implemented, the optimizer evaluates each point once.
pub trait Objective {
    type Data: 'static;

    // Required methods
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;

    // Optional methods
    fn grad(&self, _theta: &Theta, _data: &Self::Data) -> OptResult<Grad> {
        Err(OptError::GradientNotImplemented)
    }

    fn value_and_grad(&self, _theta: &Theta, _data: &Self::Data) -> OptResult<(Cost, Grad)> {
        Err(OptError::GradientNotImplemented)
    }
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances` — stopping rules and the evaluation budget.
/// - `verbose: bool` — if `true`, attaches an observer (behind the `obs_slog`
///   feature) and prints progress.
///
/// Default:
/// - `tols`: `tol_grad = None`, `tol_cost = 1e-12`, `max_evals = 1000`
/// - `verbose`: `false`
#[derive(Debug, Clone, PartialEq)]
pub struct CGOptions {
    pub tols: Tolerances,
    pub verbose: bool,
}

impl CGOptions {
    /// Create a new set of optimizer options.
    ///
    /// Numeric validation happens in [`Tolerances::new`].
    pub fn new(tols: Tolerances, verbose: bool) -> Self {
        Self { tols, verbose }
    }
}

impl Default for CGOptions {
    fn default() -> Self {
        Self { tols: Tolerances::default(), verbose: false }
    }
}

/// Stopping rules and evaluation budget.
///
/// - `tol_grad`: stop once the gradient norm falls to or below this value.
/// - `tol_cost`: stop once a successful line search improves the cost by no
///   more than `tol_cost · max(|c_prev|, |c_new|)`.
/// - `max_evals`: hard cap on `(c, ∇c)` evaluations across all line searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_evals: usize,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - If provided, tolerances must be **finite and strictly positive**.
    /// - `max_evals` must be `> 0`.
    ///
    /// # Errors
    /// - [`OptError::InvalidTolGrad`] / [`OptError::InvalidTolCost`] for
    ///   non-finite or non-positive tolerances.
    /// - [`OptError::InvalidMaxEvals`] if `max_evals == 0`.
    pub fn new(tol_grad: Option<f64>, tol_cost: Option<f64>, max_evals: usize) -> OptResult<Self> {
        verify_tol_grad(tol_grad)?;
        verify_tol_cost(tol_cost)?;
        verify_max_evals(max_evals)?;
        Ok(Self { tol_grad, tol_cost, max_evals })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { tol_grad: None, tol_cost: Some(DEFAULT_TOL_COST), max_evals: DEFAULT_MAX_EVALS }
    }
}

/// Canonical result returned by `minimize`.
///
/// - `theta_hat`: best parameter vector found.
/// - `value`: objective value at `theta_hat`.
/// - `converged`: `true` only when a convergence criterion (tolerance or
///   zero gradient) ended the run; budget exhaustion and line-search
///   failure leave it `false`.
/// - `status`: human-readable termination status string.
/// - `line_searches`: completed line searches (outer iterations).
/// - `evaluations`: `(c, ∇c)` evaluations spent, bounded by `max_evals`.
/// - `fn_evals`: raw argmin counters (`cost_count`, `gradient_count`).
/// - `trace`: initial cost followed by the cost after every successful line
///   search; non-increasing.
/// - `grad_norm`: norm of the last available gradient, if present.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub line_searches: usize,
    pub evaluations: usize,
    pub fn_evals: FnEvalMap,
    pub trace: Vec<Cost>,
    pub grad_norm: Option<f64>,
}

impl OptimOutcome {
    /// Build a validated [`OptimOutcome`] from raw solver state.
    ///
    /// # Errors
    /// - Propagates validation errors for `theta_hat` or `value`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: &TerminationStatus,
        line_searches: u64, evaluations: usize, fn_evals: FnEvalMap, trace: Vec<Cost>,
        grad: Option<Grad>,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let (converged, status) = match termination {
            TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
            TerminationStatus::Terminated(TerminationReason::SolverConverged) => {
                (true, "Solver converged".to_string())
            }
            TerminationStatus::Terminated(TerminationReason::SolverExit(reason)) => {
                (false, reason.clone())
            }
            TerminationStatus::Terminated(reason) => (false, format!("{reason:?}")),
        };
        let line_searches = line_searches as usize;
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self {
            theta_hat,
            value,
            converged,
            status,
            line_searches,
            evaluations,
            fn_evals,
            trace,
            grad_norm,
        })
    }
}
