//! Non-fatal diagnostics attached to a regression fit.
//!
//! Fatal problems are [`RegressionError`](crate::regression::errors::RegressionError)s;
//! everything here is a caveat on a result that is still returned.
use std::fmt;

/// Sample count below which the fit is flagged as suspicious.
pub const MIN_SAMPLES: usize = 20;

/// State dimension above which the fit is flagged as suspicious.
pub const MAX_STATE_DIM: usize = 20;

/// Default line-search count above which the optimizer is considered stalled.
pub const DEFAULT_STALL_THRESHOLD: usize = 500;

/// Category of a non-fatal diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// `k > MAX_STATE_DIM` or `ct < MIN_SAMPLES`: the data layout may be
    /// transposed.
    SuspiciousShape,
    /// `ct < k`: the least-squares warm start is underdetermined.
    RankDeficiencyRisk,
    /// The optimizer needed unusually many line searches.
    OptimizerStalled,
    /// The evaluation budget ran out before a convergence criterion held.
    NotConverged,
}

/// A non-fatal notice carried alongside a fit.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}
