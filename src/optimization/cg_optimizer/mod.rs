//! cg_optimizer — argmin-powered Polak–Ribière conjugate-gradient minimizer.
//!
//! Purpose
//! -------
//! Provide a generic, problem-agnostic minimizer for differentiable costs
//! `c(θ)`. Callers implement a single trait, [`Objective`], and invoke
//! [`minimize`] to run nonlinear conjugate gradients with a bracketing
//! cubic/quadratic line search under a hard evaluation budget.
//!
//! Key behaviors
//! -------------
//! - Bridge user objectives into argmin's `CostFunction` / `Gradient`
//!   traits via [`adapter::ArgMinAdapter`]; objectives without an analytic
//!   gradient fall back to [`finite_diff`].
//! - Implement the solver itself as an argmin `Solver`
//!   ([`solver::PolakRibiereCG`]) so that it runs under argmin's `Executor`,
//!   function counters, and observers.
//! - Normalize results into an [`OptimOutcome`] holding the best point, its
//!   cost, the cost trace, line-search and evaluation counts, and the
//!   termination status.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **minimizes**; there is no sign flip between the user's
//!   objective and the cost seen by argmin.
//! - The returned `theta_hat` is the best point seen, never a worse later
//!   evaluation.
//! - `OptimOutcome::evaluations <= Tolerances::max_evals`.
//! - Errors bubble up as [`OptResult<T>`](crate::optimization::errors::OptResult);
//!   nothing in this module panics on bad input.
//!
//! Downstream usage
//! ----------------
//! - Model code implements [`Objective`] for its type and calls [`minimize`]
//!   with an initial [`Theta`], a data payload, and [`CGOptions`].
//! - Front-ends only need the re-exported surface or [`prelude`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover gradient handling in [`adapter`], the line search and
//!   termination rules in [`solver`], end-to-end runs in [`api`], and the
//!   configuration checks in [`validation`] and [`traits`].

pub mod adapter;
pub mod api;
pub mod finite_diff;
pub mod run;
pub mod solver;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::solver::PolakRibiereCG;
pub use self::traits::{CGOptions, Objective, OptimOutcome, Tolerances};
pub use self::types::{Cost, DEFAULT_MAX_EVALS, FnEvalMap, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use skew_dynamics::optimization::cg_optimizer::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::minimize;
    pub use super::traits::{CGOptions, Objective, OptimOutcome, Tolerances};
    pub use super::types::{Cost, Grad, Theta};
}
