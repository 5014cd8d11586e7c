//! Fit options for skew-symmetric regression.
//!
//! Bundles the starting-point policy, the optimizer configuration, and the
//! line-search count above which a fit is reported as stalled.
use crate::optimization::cg_optimizer::CGOptions;
use crate::regression::core::{diagnostics::DEFAULT_STALL_THRESHOLD, init::Init};

/// FitOptions — configuration for [`SkewRegression::fit`](crate::regression::models::SkewRegression::fit).
///
/// Fields
/// ------
/// - `init`: starting-point policy (default [`Init::WarmStart`]).
/// - `cg_opts`: optimizer tolerances, evaluation budget (default 1000), and
///   verbosity.
/// - `stall_threshold`: line searches above which an `OptimizerStalled`
///   diagnostic is raised (default 500).
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    pub init: Init,
    pub cg_opts: CGOptions,
    pub stall_threshold: usize,
}

impl FitOptions {
    pub fn new(init: Init, cg_opts: CGOptions, stall_threshold: usize) -> Self {
        Self { init, cg_opts, stall_threshold }
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            init: Init::default(),
            cg_opts: CGOptions::default(),
            stall_threshold: DEFAULT_STALL_THRESHOLD,
        }
    }
}
