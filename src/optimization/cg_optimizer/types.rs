//! cg_optimizer::types — shared numeric aliases and line-search constants.
//!
//! Purpose
//! -------
//! Centralize the numeric types and the fixed line-search constants used by
//! the Polak–Ribière conjugate-gradient optimizer, so the solver, adapter,
//! and runner agree on one set of shapes and one convergence contract.
//!
//! Invariants & assumptions
//! ------------------------
//! - All optimizer vectors are `ndarray::Array1<f64>`.
//! - `Cost` is the scalar objective being **minimized**.
//! - The line-search constants are part of the optimizer's observable
//!   behavior (iteration counts, traces) and are deliberately not exposed
//!   as runtime options.
//!
//! Testing notes
//! -------------
//! - This module only defines aliases and constants; it is exercised by the
//!   solver and runner tests.
use ndarray::Array1;
use std::collections::HashMap;

/// Parameter vector `θ` being optimized.
pub type Theta = Array1<f64>;

/// Gradient vector `∇c(θ)`, same shape as `Theta`.
pub type Grad = Array1<f64>;

/// Scalar objective value `c(θ)`.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps counter names (e.g., `"cost_count"`, `"gradient_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Default evaluation budget for one optimization run.
pub const DEFAULT_MAX_EVALS: usize = 1000;

/// Default relative cost-improvement tolerance.
pub const DEFAULT_TOL_COST: f64 = 1e-12;

/// Don't re-evaluate within 0.1 of the bracket limits.
pub const INT: f64 = 0.1;

/// Extrapolate at most 3 times the current step.
pub const EXT: f64 = 3.0;

/// Maximum number of evaluations per line search.
pub const MAX_LINE_EVALS: usize = 20;

/// Maximum allowed growth of the initial step between line searches.
pub const RATIO: f64 = 10.0;

/// Curvature (Wolfe–Powell) constant.
pub const SIG: f64 = 0.1;

/// Sufficient-decrease constant; must satisfy `RHO < SIG`.
pub const RHO: f64 = SIG / 2.0;
