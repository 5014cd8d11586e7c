//! optimization::errors — unified error surface for the CG optimizer.
//!
//! Every failure raised while configuring or running the conjugate-gradient
//! optimizer is normalized into [`OptError`]. Backend (`argmin`) errors are
//! downcast and re-wrapped so that callers never see raw `argmin` types, and
//! model-layer errors raised inside an objective are carried through the
//! solver unchanged.
use argmin::core::{ArgminError, Error};

use crate::regression::errors::RegressionError;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

/// Failure raised while configuring or running the optimizer.
#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    /// The objective has no analytic gradient; finite differences take over.
    GradientNotImplemented,
    GradientDimMismatch { expected: usize, found: usize },
    InvalidGradient { index: usize, value: f64, reason: &'static str },

    InvalidTolGrad { tol: f64, reason: &'static str },
    InvalidTolCost { tol: f64, reason: &'static str },
    InvalidMaxEvals { max_evals: usize, reason: &'static str },

    NonFiniteCost { value: f64 },

    /// Starting vector has no entries.
    EmptyTheta,
    InvalidThetaInput { index: usize, value: f64 },

    InvalidThetaHat { index: usize, value: f64, reason: &'static str },
    /// The solver finished without a best parameter vector.
    MissingThetaHat,

    /// An `ArgminError` raised by the executor or solver, tagged by its kind
    /// (`"invalid parameter"`, `"not initialized"`, ...).
    Solver { kind: &'static str, text: String },
    /// Any other error that reached the executor.
    Backend { text: String },

    /// Skew block length is not `k(k-1)/2` for any `k`.
    SkewDimensionMismatch { len: usize },
    /// Packed vector length does not match `k(k-1)/2 + k`.
    ThetaLengthMismatch { expected: usize, actual: usize },
    /// Any other regression-layer failure, carried as its message.
    ModelError { text: String },
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptError::GradientNotImplemented => write!(f, "no analytic gradient available"),
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "gradient has {found} entries, expected {expected}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "gradient entry {index} is {value}: {reason}")
            }
            OptError::InvalidTolGrad { tol, reason } => {
                write!(f, "tol_grad = {tol} rejected: {reason}")
            }
            OptError::InvalidTolCost { tol, reason } => {
                write!(f, "tol_cost = {tol} rejected: {reason}")
            }
            OptError::InvalidMaxEvals { max_evals, reason } => {
                write!(f, "max_evals = {max_evals} rejected: {reason}")
            }
            OptError::NonFiniteCost { value } => write!(f, "objective returned {value}"),
            OptError::EmptyTheta => write!(f, "starting vector is empty"),
            OptError::InvalidThetaInput { index, value } => {
                write!(f, "starting vector entry {index} is {value}; entries must be finite")
            }
            OptError::InvalidThetaHat { index, value, reason } => {
                write!(f, "estimate entry {index} is {value}: {reason}")
            }
            OptError::MissingThetaHat => write!(f, "solver returned no estimate"),
            OptError::Solver { kind, text } => write!(f, "solver error ({kind}): {text}"),
            OptError::Backend { text } => write!(f, "optimizer backend error: {text}"),
            OptError::SkewDimensionMismatch { len } => {
                write!(f, "skew block of length {len} does not match any k(k-1)/2")
            }
            OptError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "packed vector has {actual} entries, expected {expected}")
            }
            OptError::ModelError { text } => write!(f, "objective failed: {text}"),
        }
    }
}

impl From<Error> for OptError {
    fn from(err: Error) -> Self {
        // Our own errors travel through argmin's `Error` unchanged.
        let err = match err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match err.downcast::<ArgminError>() {
            Ok(argmin_err) => {
                let kind = match &argmin_err {
                    ArgminError::InvalidParameter { .. } => "invalid parameter",
                    ArgminError::NotImplemented { .. } => "not implemented",
                    ArgminError::NotInitialized { .. } => "not initialized",
                    ArgminError::ConditionViolated { .. } => "condition violated",
                    ArgminError::CheckpointNotFound { .. } => "checkpoint not found",
                    ArgminError::PotentialBug { .. } => "potential bug",
                    ArgminError::ImpossibleError { .. } => "impossible error",
                    _ => "other",
                };
                OptError::Solver { kind, text: argmin_err.to_string() }
            }
            Err(other) => OptError::Backend { text: other.to_string() },
        }
    }
}

impl From<RegressionError> for OptError {
    fn from(err: RegressionError) -> Self {
        match err {
            RegressionError::DimensionMismatch { len } => OptError::SkewDimensionMismatch { len },
            RegressionError::ThetaLengthMismatch { expected, actual } => {
                OptError::ThetaLengthMismatch { expected, actual }
            }
            RegressionError::Optimization(opt_err) => opt_err,
            other => OptError::ModelError { text: other.to_string() },
        }
    }
}
