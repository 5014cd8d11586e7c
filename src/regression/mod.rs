//! regression — skew-symmetric affine regression of linear dynamics.
//!
//! Purpose
//! -------
//! Fit `dX ≈ X·M + 1·yᵀ` subject to `M = −Mᵀ`, where each row of `X` is a
//! state sample and the matching row of `dX` its derivative or increment.
//! Skew-symmetric `M` generates norm-preserving rotations, so the fitted
//! model describes the rotational part of a linear flow plus a constant
//! drift `y`.
//!
//! Key behaviors
//! -------------
//! - Reduce the constrained matrix problem to an unconstrained one over
//!   `z = (vectorize(M), y)` of length `k(k−1)/2 + k` ([`core::skew`]).
//! - Evaluate the squared-error loss and its exact gradient
//!   ([`core::objective`]).
//! - Validate inputs, build a skew-projected least-squares warm start, run the
//!   conjugate-gradient optimizer, and unpack the result
//!   ([`models::SkewRegression`], [`models::fit`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - `dX` and `X` share one shape `(ct, k)`; anything else fails with
//!   [`RegressionError::ShapeMismatch`] before any numeric work.
//! - Fitted `M` is exactly skew-symmetric by construction.
//! - The problem is convex; all starting points lead to the same optimum up
//!   to optimizer tolerance.
//! - Fits hold no shared state, so independent fits may run on separate
//!   threads.
//!
//! Conventions
//! -----------
//! - Rows are time samples, columns state coordinates.
//! - Non-fatal caveats (suspicious shapes, rank-deficiency risk, stalls,
//!   budget exhaustion) are returned as [`core::diagnostics::Diagnostic`]s
//!   on the fit rather than logged.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each building block; the integration test
//!   `tests/integration_skew_pipeline.rs` exercises the public surface on
//!   synthetic rotations.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    data::RegressionData,
    diagnostics::{Diagnostic, DiagnosticKind},
    init::Init,
    options::FitOptions,
    skew::{matricize, vectorize},
};
pub use self::errors::{RegressionError, RegressionResult};
pub use self::models::{SkewFit, SkewRegression, fit, fit_with_options};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use skew_dynamics::regression::prelude::*;
//
// to import the regression surface in a single line.

pub mod prelude {
    pub use super::core::{
        data::RegressionData,
        diagnostics::{Diagnostic, DiagnosticKind},
        init::Init,
        options::FitOptions,
    };
    pub use super::errors::{RegressionError, RegressionResult};
    pub use super::models::{SkewFit, SkewRegression, fit, fit_with_options};
}
