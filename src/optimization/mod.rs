//! optimization — conjugate-gradient minimizer and unified error surface.
//!
//! Purpose
//! -------
//! Provide the optimization layer used for model fitting: a generic
//! Argmin-backed conjugate-gradient minimizer (`cg_optimizer`) plus a single
//! error/result surface (`errors`). Callers implement an objective, choose
//! tolerances and an evaluation budget, and get back the best parameters
//! and a cost trace without touching backend solver details.
//!
//! Conventions
//! -----------
//! - Parameters and gradients are `ndarray` vectors (`Theta`, `Grad`);
//!   mapping them to structured model parameters is the model layer's job.
//! - Public entrypoints that can fail return `OptResult<T>`; callers never
//!   see raw Argmin errors.
//! - Nothing here performs I/O unless the `obs_slog` feature is enabled and
//!   verbosity is requested.
//!
//! Downstream usage
//! ----------------
//! - Front-ends typically import `optimization::prelude::*`, which forwards
//!   the optimizer prelude and the error types.

pub mod cg_optimizer;
pub mod errors;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use skew_dynamics::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::cg_optimizer::prelude::*;
    pub use super::errors::{OptError, OptResult};
}
