//! cg_optimizer::solver — Polak–Ribière conjugate gradients as an argmin `Solver`.
//!
//! Purpose
//! -------
//! Minimize a differentiable cost `c(θ)` with nonlinear conjugate gradients
//! whose search directions follow the Polak–Ribière update, and whose line
//! search brackets a step with cubic extrapolation before sectioning it with
//! cubic or quadratic interpolation until the Wolfe–Powell conditions hold.
//!
//! Key behaviors
//! -------------
//! - One argmin iteration is one line search. The executor's iteration
//!   counter therefore reports completed line searches, while the solver
//!   tracks `(c, ∇c)` evaluations against `max_evals` itself.
//! - Each line search spends at most [`MAX_LINE_EVALS`] evaluations (fewer if
//!   the remaining budget is smaller).
//! - Failed or non-finite evaluations during extrapolation bisect the step
//!   back toward the last good point; during interpolation they are treated
//!   as `+∞` and shrink the bracket.
//! - The best point seen is tracked inside every line search, so a failed
//!   search still returns the lowest cost it evaluated.
//! - The direction is reset to steepest descent when the Polak–Ribière
//!   direction is not a descent direction, after a failed line search, and
//!   every `n = dim(θ)` successful line searches.
//!
//! Termination
//! -----------
//! - `SolverConverged`: zero slope, `‖∇c‖ ≤ tol_grad`, or a relative cost
//!   improvement `≤ tol_cost`.
//! - `SolverExit("line search failed twice in a row")`.
//! - `SolverExit("evaluation budget exhausted")`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The state's cost never increases between iterations: a successful line
//!   search satisfies sufficient decrease, and a failed one reverts to the
//!   best point seen.
//! - [`PolakRibiereCG::trace`] holds the initial cost followed by the cost
//!   after every successful line search.
use crate::optimization::cg_optimizer::{
    traits::Tolerances,
    types::{Cost, EXT, Grad, INT, MAX_LINE_EVALS, RATIO, RHO, SIG, Theta},
};
use argmin::core::{
    ArgminError, CostFunction, Error, Gradient, IterState, KV, Problem, Solver,
    TerminationReason, TerminationStatus,
};
use argmin_math::ArgminL2Norm;

type CgState = IterState<Theta, Grad, (), (), (), f64>;

const LINE_SEARCH_FAILED: &str = "line search failed twice in a row";
const BUDGET_EXHAUSTED: &str = "evaluation budget exhausted";

/// Polak–Ribière nonlinear conjugate-gradient solver.
#[derive(Debug, Clone)]
pub struct PolakRibiereCG {
    max_evals: usize,
    tol_cost: Option<f64>,
    tol_grad: Option<f64>,
    evaluations: usize,
    direction: Option<Grad>,
    slope: f64,
    step: f64,
    ls_failed: bool,
    since_restart: usize,
    trace: Vec<Cost>,
    halt: Option<TerminationReason>,
}

/// Point along the search direction, stored by its step length.
#[derive(Debug, Clone)]
struct LinePoint {
    step: f64,
    cost: Cost,
    grad: Grad,
}

#[derive(Debug)]
struct LineSearch {
    success: bool,
    last: LinePoint,
    best: LinePoint,
}

impl PolakRibiereCG {
    /// Build a solver from validated tolerances.
    pub fn new(tols: &Tolerances) -> Self {
        Self {
            max_evals: tols.max_evals,
            tol_cost: tols.tol_cost,
            tol_grad: tols.tol_grad,
            evaluations: 0,
            direction: None,
            slope: 0.0,
            step: 0.0,
            ls_failed: false,
            since_restart: 0,
            trace: Vec::new(),
            halt: None,
        }
    }

    /// Cost history: initial cost, then one entry per successful line search.
    pub fn trace(&self) -> &[Cost] {
        &self.trace
    }

    /// Number of `(c, ∇c)` evaluations spent so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Evaluate `(c, ∇c)` at `x + step·s`, returning `None` on any error or
    /// non-finite output.
    fn probe<O>(
        &mut self, problem: &mut Problem<O>, x: &Theta, s: &Grad, step: f64,
    ) -> Option<(Cost, Grad)>
    where
        O: CostFunction<Param = Theta, Output = Cost> + Gradient<Param = Theta, Gradient = Grad>,
    {
        self.evaluations += 1;
        let point = x + &(s * step);
        let cost = problem.cost(&point).ok()?;
        let grad = problem.gradient(&point).ok()?;
        if cost.is_finite() && grad.iter().all(|v| v.is_finite()) {
            Some((cost, grad))
        } else {
            None
        }
    }

    fn line_search<O>(
        &mut self, problem: &mut Problem<O>, x: &Theta, f0: Cost, g0: &Grad, s: &Grad,
    ) -> LineSearch
    where
        O: CostFunction<Param = Theta, Output = Cost> + Gradient<Param = Theta, Gradient = Grad>,
    {
        let d0 = self.slope;
        let mut budget = MAX_LINE_EVALS.min(self.max_evals.saturating_sub(self.evaluations));
        let mut best = LinePoint { step: 0.0, cost: f0, grad: g0.clone() };

        // Extrapolation: grow the step until the bracket contains a minimizer.
        let (mut x2, mut f2, mut d2) = (0.0, f0, d0);
        let mut x3 = self.step;
        let mut f3 = f0;
        let mut g3 = g0.clone();
        let mut d3: f64;
        loop {
            let mut evaluated = false;
            while !evaluated && budget > 0 {
                budget -= 1;
                match self.probe(problem, x, s, x3) {
                    Some((f, g)) => {
                        f3 = f;
                        g3 = g;
                        evaluated = true;
                    }
                    None => x3 = (x2 + x3) / 2.0,
                }
            }
            if !evaluated {
                let last = LinePoint { step: x3, cost: f3, grad: g3 };
                return LineSearch { success: false, last, best };
            }
            if f3 < best.cost {
                best = LinePoint { step: x3, cost: f3, grad: g3.clone() };
            }
            d3 = g3.dot(s);
            if d3 > SIG * d0 || f3 > f0 + x3 * RHO * d0 || budget == 0 {
                break;
            }
            let (x1, f1, d1) = (x2, f2, d2);
            (x2, f2, d2) = (x3, f3, d3);
            let a = 6.0 * (f1 - f2) + 3.0 * (d2 + d1) * (x2 - x1);
            let b = 3.0 * (f2 - f1) - (2.0 * d1 + d2) * (x2 - x1);
            x3 = x1 - d1 * (x2 - x1).powi(2) / (b + (b * b - a * d1 * (x2 - x1)).sqrt());
            if !x3.is_finite() || x3 < 0.0 || x3 > x2 * EXT {
                x3 = x2 * EXT;
            } else if x3 < x2 + INT * (x2 - x1) {
                x3 = x2 + INT * (x2 - x1);
            }
        }

        // Interpolation: section the bracket [x2, x4] until Wolfe–Powell holds.
        let (mut x4, mut f4, mut d4) = (x3, f3, d3);
        while (d3.abs() > -SIG * d0 || f3 > f0 + x3 * RHO * d0) && budget > 0 {
            if d3 > 0.0 || f3 > f0 + x3 * RHO * d0 {
                (x4, f4, d4) = (x3, f3, d3);
            } else {
                (x2, f2, d2) = (x3, f3, d3);
            }
            x3 = if f4 > f0 {
                x2 - (0.5 * d2 * (x4 - x2).powi(2)) / (f4 - f2 - d2 * (x4 - x2))
            } else {
                let a = 6.0 * (f2 - f4) / (x4 - x2) + 3.0 * (d4 + d2);
                let b = 3.0 * (f4 - f2) - (2.0 * d2 + d4) * (x4 - x2);
                x2 + ((b * b - a * d2 * (x4 - x2).powi(2)).sqrt() - b) / a
            };
            if !x3.is_finite() {
                x3 = (x2 + x4) / 2.0;
            }
            x3 = x3.min(x4 - INT * (x4 - x2)).max(x2 + INT * (x4 - x2));
            budget -= 1;
            match self.probe(problem, x, s, x3) {
                Some((f, g)) => {
                    f3 = f;
                    d3 = g.dot(s);
                    g3 = g;
                    if f3 < best.cost {
                        best = LinePoint { step: x3, cost: f3, grad: g3.clone() };
                    }
                }
                None => {
                    f3 = f64::INFINITY;
                    d3 = f64::INFINITY;
                }
            }
        }

        let success = d3.abs() < -SIG * d0 && f3 < f0 + x3 * RHO * d0;
        LineSearch { success, last: LinePoint { step: x3, cost: f3, grad: g3 }, best }
    }

    fn has_converged(&self, f_prev: Cost, f_new: Cost, g_new: &Grad) -> bool {
        if self.slope == 0.0 {
            return true;
        }
        if let Some(tol) = self.tol_grad {
            if g_new.l2_norm() <= tol {
                return true;
            }
        }
        if let Some(tol) = self.tol_cost {
            if f_prev - f_new <= tol * f_prev.abs().max(f_new.abs()) {
                return true;
            }
        }
        false
    }

    /// Polak–Ribière update of the direction `s` after moving from gradient
    /// `g0` to `g_new`. Falls back to steepest descent when the update is not
    /// a descent direction or `dim(θ)` searches have passed since the last
    /// reset.
    fn update_direction(&mut self, s: &Grad, g0: &Grad, g_new: &Grad) {
        let beta = (g_new.dot(g_new) - g0.dot(g_new)) / g0.dot(g0);
        let s_new = s * beta - g_new;
        let d_new = g_new.dot(&s_new);
        self.since_restart += 1;
        if d_new > 0.0 || self.since_restart >= s.len() {
            self.restart(g_new);
        } else {
            self.slope = d_new;
            self.direction = Some(s_new);
        }
    }

    /// Point the next search along steepest descent from `g`.
    fn restart(&mut self, g: &Grad) {
        let s = -g;
        self.slope = -s.dot(&s);
        self.step = 1.0 / (1.0 - self.slope);
        self.direction = Some(s);
        self.since_restart = 0;
    }
}

impl<O> Solver<O, CgState> for PolakRibiereCG
where
    O: CostFunction<Param = Theta, Output = Cost> + Gradient<Param = Theta, Gradient = Grad>,
{
    const NAME: &'static str = "Polak-Ribiere CG";

    fn init(
        &mut self, problem: &mut Problem<O>, mut state: CgState,
    ) -> Result<(CgState, Option<KV>), Error> {
        let x = state.take_param().ok_or_else(|| ArgminError::NotInitialized {
            text: "PolakRibiereCG requires an initial parameter vector".to_string(),
        })?;
        self.evaluations += 1;
        let f0 = problem.cost(&x)?;
        let g0 = problem.gradient(&x)?;
        self.trace.clear();
        self.trace.push(f0);
        self.ls_failed = false;
        self.halt = None;
        self.restart(&g0);
        let grad_ok = self.tol_grad.is_some_and(|tol| g0.l2_norm() <= tol);
        if self.slope == 0.0 || grad_ok {
            self.halt = Some(TerminationReason::SolverConverged);
        }
        Ok((state.param(x).cost(f0).gradient(g0), None))
    }

    fn next_iter(
        &mut self, problem: &mut Problem<O>, mut state: CgState,
    ) -> Result<(CgState, Option<KV>), Error> {
        let x = state.take_param().ok_or_else(|| ArgminError::NotInitialized {
            text: "PolakRibiereCG: missing parameter vector".to_string(),
        })?;
        let g0 = state.take_gradient().ok_or_else(|| ArgminError::NotInitialized {
            text: "PolakRibiereCG: missing gradient".to_string(),
        })?;
        let f0 = state.get_cost();
        let s = self.direction.take().ok_or_else(|| ArgminError::NotInitialized {
            text: "PolakRibiereCG: missing search direction".to_string(),
        })?;
        if self.slope == 0.0 {
            self.halt = Some(TerminationReason::SolverConverged);
            self.direction = Some(s);
            return Ok((state.param(x).cost(f0).gradient(g0), None));
        }

        let ls = self.line_search(problem, &x, f0, &g0, &s);

        if ls.success {
            let LinePoint { step, cost: f_new, grad: g_new } = ls.last;
            let x_new = &x + &(&s * step);
            self.trace.push(f_new);

            let d_old = self.slope;
            self.update_direction(&s, &g0, &g_new);
            self.step = step * RATIO.min(d_old / (self.slope - f64::MIN_POSITIVE));
            self.ls_failed = false;
            if self.has_converged(f0, f_new, &g_new) {
                self.halt = Some(TerminationReason::SolverConverged);
            }
            return Ok((state.param(x_new).cost(f_new).gradient(g_new), None));
        }

        let LinePoint { step, cost: f_best, grad: g_best } = ls.best;
        let x_best = &x + &(&s * step);
        if self.ls_failed {
            self.direction = Some(s);
            self.halt = Some(TerminationReason::SolverExit(LINE_SEARCH_FAILED.to_string()));
        } else {
            self.restart(&g_best);
            self.ls_failed = true;
            if self.slope == 0.0 {
                self.halt = Some(TerminationReason::SolverConverged);
            }
        }
        Ok((state.param(x_best).cost(f_best).gradient(g_best), None))
    }

    fn terminate(&mut self, _state: &CgState) -> TerminationStatus {
        if let Some(reason) = &self.halt {
            return TerminationStatus::Terminated(reason.clone());
        }
        if self.evaluations >= self.max_evals {
            return TerminationStatus::Terminated(TerminationReason::SolverExit(
                BUDGET_EXHAUSTED.to_string(),
            ));
        }
        TerminationStatus::NotTerminated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argmin::core::{Executor, State};
    use ndarray::{Array1, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests drive `PolakRibiereCG` through argmin's `Executor` on small
    // analytic problems and check:
    // - convergence on an ill-conditioned quadratic,
    // - the evaluation budget,
    // - a monotone trace,
    // - the zero-gradient shortcut,
    // - recovery from evaluation failures,
    // - direction resets and the double line-search failure exit.
    // -------------------------------------------------------------------------

    /// `c(θ) = ½ Σ aᵢ (θᵢ - bᵢ)²`.
    struct Quadratic {
        scales: Array1<f64>,
        centre: Array1<f64>,
    }

    impl CostFunction for Quadratic {
        type Param = Theta;
        type Output = Cost;

        fn cost(&self, theta: &Theta) -> Result<Cost, Error> {
            let diff = theta - &self.centre;
            Ok(0.5 * (&self.scales * &diff * &diff).sum())
        }
    }

    impl Gradient for Quadratic {
        type Param = Theta;
        type Gradient = Grad;

        fn gradient(&self, theta: &Theta) -> Result<Grad, Error> {
            Ok(&self.scales * &(theta - &self.centre))
        }
    }

    /// `c(θ) = exp(θ) - 2θ`, undefined for `θ > limit`.
    struct Walled {
        limit: f64,
    }

    impl CostFunction for Walled {
        type Param = Theta;
        type Output = Cost;

        fn cost(&self, theta: &Theta) -> Result<Cost, Error> {
            if theta[0] > self.limit {
                return Err(ArgminError::InvalidParameter { text: "outside domain".into() }.into());
            }
            Ok(theta[0].exp() - 2.0 * theta[0])
        }
    }

    impl Gradient for Walled {
        type Param = Theta;
        type Gradient = Grad;

        fn gradient(&self, theta: &Theta) -> Result<Grad, Error> {
            Ok(array![theta[0].exp() - 2.0])
        }
    }

    /// `c(θ) = θ·θ` paired with the wrong-signed gradient `-2θ`, so every
    /// "descent" direction climbs and no line search can succeed.
    struct Misleading;

    impl CostFunction for Misleading {
        type Param = Theta;
        type Output = Cost;

        fn cost(&self, theta: &Theta) -> Result<Cost, Error> {
            Ok(theta.dot(theta))
        }
    }

    impl Gradient for Misleading {
        type Param = Theta;
        type Gradient = Grad;

        fn gradient(&self, theta: &Theta) -> Result<Grad, Error> {
            Ok(theta * -2.0)
        }
    }

    fn ill_conditioned() -> Quadratic {
        Quadratic { scales: array![1.0, 10.0, 100.0], centre: array![1.0, -2.0, 0.5] }
    }

    #[test]
    // Purpose
    // -------
    // The solver reaches the minimizer of an ill-conditioned quadratic.
    //
    // Given
    // -----
    // - Curvatures (1, 10, 100), minimizer (1, -2, 0.5), start at the origin.
    //
    // Expect
    // ------
    // - `θ̂` within 1e-6 of the minimizer and a best cost below 1e-10.
    fn converges_on_ill_conditioned_quadratic() {
        // Arrange
        let problem = ill_conditioned();
        let solver = PolakRibiereCG::new(&Tolerances::default());

        // Act
        let result = Executor::new(problem, solver)
            .configure(|state| state.param(Array1::zeros(3)).max_iters(1000))
            .run()
            .expect("run succeeds");

        // Assert
        let best = result.state.get_best_param().expect("best param").clone();
        let target = array![1.0, -2.0, 0.5];
        for (a, b) in best.iter().zip(target.iter()) {
            assert!((a - b).abs() < 1e-6, "got {best:?}");
        }
        assert!(result.state.get_best_cost() < 1e-10);
        assert!(result.solver.evaluations() <= 1000);
    }

    #[test]
    // Purpose
    // -------
    // The evaluation budget is a hard cap and exhausting it is reported.
    //
    // Given
    // -----
    // - The ill-conditioned quadratic with `max_evals = 3`.
    //
    // Expect
    // ------
    // - At most 3 evaluations and a budget-exhaustion exit.
    fn respects_evaluation_budget() {
        // Arrange
        let tols = Tolerances::new(None, None, 3).expect("valid tolerances");
        let solver = PolakRibiereCG::new(&tols);

        // Act
        let result = Executor::new(ill_conditioned(), solver)
            .configure(|state| state.param(array![10.0, 10.0, 10.0]))
            .run()
            .expect("run succeeds");

        // Assert
        assert!(result.solver.evaluations() <= 3);
        assert_eq!(
            result.state.get_termination_status(),
            &TerminationStatus::Terminated(TerminationReason::SolverExit(
                BUDGET_EXHAUSTED.to_string()
            ))
        );
    }

    #[test]
    // Purpose
    // -------
    // The trace starts at the initial cost and never increases.
    //
    // Expect
    // ------
    // - `trace[0] = c(θ₀)`; consecutive entries are non-increasing; one entry
    //   per successful line search at most.
    fn trace_is_monotone() {
        // Arrange
        let problem = ill_conditioned();
        let theta0 = array![3.0, 3.0, 3.0];
        let c0 = problem.cost(&theta0).expect("cost");
        let solver = PolakRibiereCG::new(&Tolerances::default());

        // Act
        let result = Executor::new(problem, solver)
            .configure(|state| state.param(theta0))
            .run()
            .expect("run succeeds");

        // Assert
        let trace = result.solver.trace();
        assert_eq!(trace[0], c0);
        assert!(trace.windows(2).all(|w| w[1] <= w[0]));
        assert!(trace.len() as u64 <= result.state.get_iter() + 1);
    }

    #[test]
    // Purpose
    // -------
    // Starting at the minimizer converges without any line search.
    //
    // Expect
    // ------
    // - `SolverConverged`, zero iterations, a single evaluation.
    fn zero_gradient_start_converges_immediately() {
        // Arrange
        let solver = PolakRibiereCG::new(&Tolerances::default());

        // Act
        let result = Executor::new(ill_conditioned(), solver)
            .configure(|state| state.param(array![1.0, -2.0, 0.5]))
            .run()
            .expect("run succeeds");

        // Assert
        assert_eq!(
            result.state.get_termination_status(),
            &TerminationStatus::Terminated(TerminationReason::SolverConverged)
        );
        assert_eq!(result.state.get_iter(), 0);
        assert_eq!(result.solver.evaluations(), 1);
    }

    #[test]
    // Purpose
    // -------
    // Evaluation errors during extrapolation shrink the step instead of
    // aborting the run.
    //
    // Given
    // -----
    // - `c(θ) = exp(θ) - 2θ`, which errors for `θ > 1`, starting at `θ = -20`.
    //   The cost is almost linear there, so extrapolation keeps tripling the
    //   step and overshoots the wall.
    //
    // Expect
    // ------
    // - The run finishes and `θ̂ ≈ ln 2`.
    fn recovers_from_failed_evaluations() {
        // Arrange
        let solver = PolakRibiereCG::new(&Tolerances::default());

        // Act
        let result = Executor::new(Walled { limit: 1.0 }, solver)
            .configure(|state| state.param(array![-20.0]))
            .run()
            .expect("run succeeds");

        // Assert
        let best = result.state.get_best_param().expect("best param");
        assert!((best[0] - 2.0_f64.ln()).abs() < 1e-4, "got {best:?}");
        assert!(result.solver.evaluations() <= 1000);
    }

    #[test]
    // Purpose
    // -------
    // A Polak–Ribière update that is not a descent direction is replaced by
    // steepest descent.
    //
    // Given
    // -----
    // - Old direction `s = (-1, 0)`, `g0 = (1, 0)`, `g_new = (-1, 0)`.
    //   Then `β = 2`, `s_new = (-1, 0)` and `g_newᵀ s_new = 1 > 0`.
    //
    // Expect
    // ------
    // - Direction `-g_new = (1, 0)`, slope `-1`, restart counter cleared.
    fn non_descent_update_resets_to_steepest_descent() {
        // Arrange
        let mut solver = PolakRibiereCG::new(&Tolerances::default());
        let g0 = array![1.0, 0.0];
        solver.restart(&g0);
        let s = solver.direction.clone().expect("direction after restart");

        // Act
        solver.update_direction(&s, &g0, &array![-1.0, 0.0]);

        // Assert
        assert_eq!(solver.direction, Some(array![1.0, 0.0]));
        assert_eq!(solver.slope, -1.0);
        assert_eq!(solver.since_restart, 0);
    }

    #[test]
    // Purpose
    // -------
    // A descent update is kept until `dim(θ)` searches have passed, then
    // the direction is reset.
    //
    // Given
    // -----
    // - `dim(θ) = 2`, `s = (-1, -1)`, `g0 = (1, 1)`, `g_new = (0.5, -0.5)`:
    //   `β = 0.25`, `s_new = (-0.75, 0.25)`, slope `-0.5`.
    //
    // Expect
    // ------
    // - First update keeps `s_new`; the second (with the same gradients)
    //   resets to `-g_new` and clears the counter.
    fn periodic_reset_after_dim_theta_searches() {
        // Arrange
        let mut solver = PolakRibiereCG::new(&Tolerances::default());
        let g0 = array![1.0, 1.0];
        let g_new = array![0.5, -0.5];
        solver.restart(&g0);
        let s = solver.direction.clone().expect("direction after restart");

        // Act
        solver.update_direction(&s, &g0, &g_new);

        // Assert
        assert_eq!(solver.direction, Some(array![-0.75, 0.25]));
        assert_eq!(solver.slope, -0.5);
        assert_eq!(solver.since_restart, 1);

        // Act
        solver.update_direction(&s, &g0, &g_new);

        // Assert
        assert_eq!(solver.direction, Some(array![-0.5, 0.5]));
        assert_eq!(solver.since_restart, 0);
    }

    #[test]
    // Purpose
    // -------
    // The restart counter stays below `dim(θ)` after every iteration of a
    // full run.
    fn restart_counter_stays_below_dimension() {
        let solver = PolakRibiereCG::new(&Tolerances::default());
        let result = Executor::new(ill_conditioned(), solver)
            .configure(|state| state.param(array![5.0, 5.0, 5.0]))
            .run()
            .expect("run succeeds");
        assert!(result.solver.since_restart < 3);
        assert!(result.state.get_iter() > 0);
    }

    #[test]
    // Purpose
    // -------
    // Two consecutive failed line searches end the run and return the best
    // point seen.
    //
    // Given
    // -----
    // - `c(θ) = θ·θ` with a gradient of the wrong sign, starting at `(1, -2)`.
    //   Every probe along the reported descent direction raises the cost.
    //
    // Expect
    // ------
    // - `SolverExit("line search failed twice in a row")` after two
    //   iterations; `θ̂` is the start (the lowest cost probed); the trace
    //   holds only the initial cost; the budget is not exhausted.
    fn double_line_search_failure_exits_with_best_point() {
        // Arrange
        let theta0 = array![1.0, -2.0];
        let solver = PolakRibiereCG::new(&Tolerances::default());

        // Act
        let result = Executor::new(Misleading, solver)
            .configure(|state| state.param(theta0.clone()))
            .run()
            .expect("run succeeds");

        // Assert
        assert_eq!(
            result.state.get_termination_status(),
            &TerminationStatus::Terminated(TerminationReason::SolverExit(
                LINE_SEARCH_FAILED.to_string()
            ))
        );
        assert_eq!(result.state.get_iter(), 2);
        assert_eq!(result.state.get_best_param(), Some(&theta0));
        assert_eq!(result.state.get_best_cost(), 5.0);
        assert_eq!(result.solver.trace(), &[5.0]);
        assert!(result.solver.evaluations() <= 1 + 2 * MAX_LINE_EVALS);
    }
}
