//! regression::models — user-facing skew-symmetric regression model.

pub mod skew_regression;

pub use self::skew_regression::{SkewFit, SkewRegression, fit, fit_with_options};
