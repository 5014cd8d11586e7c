//! Execution helper that drives [`PolakRibiereCG`] through argmin's `Executor`
//! and returns a crate-friendly [`OptimOutcome`].
use crate::optimization::{
    cg_optimizer::{
        CGOptions, Objective, OptimOutcome, Theta, adapter::ArgMinAdapter,
        solver::PolakRibiereCG,
    },
    errors::OptResult,
};
#[cfg(feature = "obs_slog")]
use argmin::core::{CostFunction, Gradient};
use argmin::core::{Executor, State};
#[cfg(feature = "obs_slog")]
use argmin_math::ArgminL2Norm;

/// Run the conjugate-gradient solver on a user objective.
///
/// Wires up:
/// - the user model via [`ArgMinAdapter`],
/// - the initial parameter `theta0`,
/// - an iteration cap equal to the evaluation budget (each line search
///   spends at least one evaluation, so the cap never binds first),
/// - an optional slog observer (behind the `obs_slog` feature),
///
/// then executes the solver and converts its state, trace, and evaluation
/// count into an [`OptimOutcome`].
///
/// # Feature flags
/// With `obs_slog` enabled and `opts.verbose == true`, a terminal slog
/// observer is attached with `ObserverMode::Always` and a one-time line logs
/// `c(θ₀)` and `‖∇c(θ₀)‖` before the first iteration.
///
/// # Errors
/// - Propagates `argmin` runtime errors (including errors raised by the
///   objective at `θ₀`) through `From<argmin::core::Error>`.
/// - Propagates validation errors from [`OptimOutcome::new`].
pub fn run_cg<'a, F>(
    theta0: Theta, opts: &CGOptions, problem: ArgMinAdapter<'a, F>, solver: PolakRibiereCG,
) -> OptResult<OptimOutcome>
where
    F: Objective,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&theta0, &problem)?;
    }
    let max_iters = opts.tols.max_evals as u64;
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0).max_iters(max_iters));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }

    let mut result = optimizer.run()?;
    let trace = result.solver.trace().to_vec();
    let evaluations = result.solver.evaluations();
    let state = &mut result.state;
    let line_searches = state.get_iter();
    let function_counts = state.get_func_counts().clone();
    let termination = state.get_termination_status().clone();
    let grad = state.take_gradient();
    OptimOutcome::new(
        state.take_best_param(),
        state.get_best_cost(),
        &termination,
        line_searches,
        evaluations,
        function_counts,
        trace,
        grad,
    )
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<F>(theta0: &Theta, problem: &ArgMinAdapter<'_, F>) -> OptResult<()>
where
    F: Objective,
{
    let c0 = problem.cost(theta0)?;
    let g0n = problem.gradient(theta0).ok().map(|g| g.l2_norm());

    eprintln!(
        "init: c(theta0) = {:.6}{}",
        c0,
        g0n.map(|n| format!(", ||grad|| = {:.6}", n)).unwrap_or_default()
    );
    Ok(())
}
