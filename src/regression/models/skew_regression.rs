//! Skew-symmetric affine regression model: fit `dX ≈ X·M + 1·yᵀ`, `M = −Mᵀ`.
//!
//! This module wires the regression objective to the generic conjugate-gradient
//! optimizer. [`SkewRegression`] implements the [`Objective`] trait over the
//! packed vector `z = (vectorize(M), y)`, picks a starting point according to
//! its [`FitOptions`], runs [`minimize`], and unpacks the best `z` into a
//! [`SkewFit`].
//!
//! Key ideas:
//! - The skew constraint is eliminated by the parameterization, so the
//!   optimizer solves an unconstrained convex quadratic problem.
//! - Fatal input problems abort before any optimization work; shape caveats,
//!   stalls, and budget exhaustion travel with the result as [`Diagnostic`]s.
//! - The model keeps the raw [`OptimOutcome`] next to the unpacked fit for
//!   callers that want optimizer-level details.
use crate::{
    optimization::{
        cg_optimizer::{Grad, Objective, OptimOutcome, Theta, minimize},
        errors::{OptError, OptResult},
    },
    regression::{
        core::{
            data::RegressionData,
            diagnostics::{Diagnostic, DiagnosticKind},
            objective::{evaluate, loss, unpack},
            options::FitOptions,
        },
        errors::{RegressionError, RegressionResult},
    },
};
use ndarray::{Array1, Array2, ArrayView2};

/// Result of one regression fit.
///
/// - `m`: fitted `k×k` skew-symmetric matrix.
/// - `y`: fitted length-`k` offset.
/// - `trace`: loss before optimization, then after every successful line
///   search; non-increasing.
/// - `loss`: loss at the returned `(M, y)`.
/// - `line_searches`, `evaluations`: optimizer effort.
/// - `converged`, `status`: why the optimizer stopped.
/// - `diagnostics`: non-fatal caveats (shape, stall, budget).
#[derive(Debug, Clone, PartialEq)]
pub struct SkewFit {
    pub m: Array2<f64>,
    pub y: Array1<f64>,
    pub trace: Vec<f64>,
    pub loss: f64,
    pub line_searches: usize,
    pub evaluations: usize,
    pub converged: bool,
    pub status: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl SkewFit {
    /// Model prediction `X·M + 1·yᵀ`.
    ///
    /// # Errors
    /// - [`RegressionError::PredictDimMismatch`] if `x` does not have `k` columns.
    pub fn predict(&self, x: ArrayView2<f64>) -> RegressionResult<Array2<f64>> {
        let k = self.m.nrows();
        if x.ncols() != k {
            return Err(RegressionError::PredictDimMismatch { expected: k, actual: x.ncols() });
        }
        Ok(x.dot(&self.m) + &self.y)
    }

    /// Whether a diagnostic of `kind` was raised.
    pub fn has_diagnostic(&self, kind: DiagnosticKind) -> bool {
        self.diagnostics.iter().any(|d| d.kind == kind)
    }
}

/// Skew-symmetric affine regression model.
///
/// After [`fit`](SkewRegression::fit), `results` holds the optimizer outcome
/// and `fitted` the unpacked `(M, y)` with its diagnostics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkewRegression {
    /// Fit configuration.
    pub options: FitOptions,
    /// Optimizer outcome (populated after `fit`).
    pub results: Option<OptimOutcome>,
    /// Unpacked fit (populated after `fit`).
    pub fitted: Option<SkewFit>,
}

impl SkewRegression {
    pub fn new(options: FitOptions) -> Self {
        Self { options, results: None, fitted: None }
    }

    /// Fit `(M, y)` to validated data and cache the result.
    ///
    /// ## Steps
    /// 1. Build `z₀` from `options.init` (warm start by default).
    /// 2. Minimize the squared-error loss with the configured budget.
    /// 3. Unpack the best `z` into `(M, y)`.
    /// 4. Collect diagnostics: the data's shape caveats, `OptimizerStalled`
    ///    when line searches exceed `options.stall_threshold`, and
    ///    `NotConverged` when the evaluation budget ran out first.
    ///
    /// ## Errors
    /// - Init errors (`InvalidInitLength`, `InvalidInitValue`,
    ///   `PseudoInverseFailed`).
    /// - `RegressionError::Optimization` for optimizer failures.
    pub fn fit(&mut self, data: &RegressionData) -> RegressionResult<&SkewFit> {
        let theta0 = self.options.init.initial_theta(data)?;
        let outcome = minimize(&*self, theta0, data, &self.options.cg_opts)?;
        let (m, y) = unpack(outcome.theta_hat.view(), data.dim())?;

        let mut diagnostics = data.diagnostics.clone();
        if outcome.line_searches > self.options.stall_threshold {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::OptimizerStalled,
                format!(
                    "optimizer needed {} line searches (threshold {}); the problem may be \
                     poorly conditioned",
                    outcome.line_searches, self.options.stall_threshold
                ),
            ));
        }
        if !outcome.converged && outcome.evaluations >= self.options.cg_opts.tols.max_evals {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::NotConverged,
                format!(
                    "evaluation budget of {} exhausted before convergence",
                    self.options.cg_opts.tols.max_evals
                ),
            ));
        }

        let fit = SkewFit {
            m,
            y,
            trace: outcome.trace.clone(),
            loss: outcome.value,
            line_searches: outcome.line_searches,
            evaluations: outcome.evaluations,
            converged: outcome.converged,
            status: outcome.status.clone(),
            diagnostics,
        };
        self.results = Some(outcome);
        Ok(&*self.fitted.insert(fit))
    }

    /// Prediction from the fitted model.
    ///
    /// # Errors
    /// - [`RegressionError::ModelNotFitted`] before `fit`.
    /// - [`RegressionError::PredictDimMismatch`] for the wrong column count.
    pub fn predict(&self, x: ArrayView2<f64>) -> RegressionResult<Array2<f64>> {
        self.fitted.as_ref().ok_or(RegressionError::ModelNotFitted)?.predict(x)
    }

    /// Residuals `dX − (X·M + 1·yᵀ)` of the fitted model on `data`.
    ///
    /// # Errors
    /// Same as [`SkewRegression::predict`].
    pub fn residuals(&self, data: &RegressionData) -> RegressionResult<Array2<f64>> {
        let pred = self.predict(data.x.view())?;
        Ok(&data.dx - &pred)
    }
}

impl Objective for SkewRegression {
    type Data = RegressionData;

    /// Loss `½‖dX − X·M − 1·yᵀ‖²_F` at `z`.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<f64> {
        Ok(loss(theta, data)?)
    }

    /// `z` must have length `k(k-1)/2 + k`.
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()> {
        let expected = data.theta_len();
        if theta.len() != expected {
            return Err(OptError::ThetaLengthMismatch { expected, actual: theta.len() });
        }
        Ok(())
    }

    /// Exact gradient with respect to `z = (vectorize(M), y)`.
    fn grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<Grad> {
        let (_, grad) = evaluate(theta, data)?;
        Ok(grad)
    }

    /// Loss and gradient from a single residual computation.
    fn value_and_grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<(f64, Grad)> {
        Ok(evaluate(theta, data)?)
    }
}

/// Fit `dX ≈ X·M + 1·yᵀ` with default options.
///
/// # Errors
/// - Validation errors from [`RegressionData::new`].
/// - Any error from [`SkewRegression::fit`].
pub fn fit(dx: ArrayView2<f64>, x: ArrayView2<f64>) -> RegressionResult<SkewFit> {
    fit_with_options(dx, x, FitOptions::default())
}

/// Fit `dX ≈ X·M + 1·yᵀ` with explicit options.
///
/// # Errors
/// Same as [`fit`].
pub fn fit_with_options(
    dx: ArrayView2<f64>, x: ArrayView2<f64>, options: FitOptions,
) -> RegressionResult<SkewFit> {
    let data = RegressionData::new(dx.to_owned(), x.to_owned())?;
    let mut model = SkewRegression::new(options);
    model.fit(&data)?;
    model.fitted.ok_or(RegressionError::ModelNotFitted)
}
