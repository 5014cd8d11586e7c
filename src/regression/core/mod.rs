//! regression::core — building blocks for skew-symmetric affine regression.
//!
//! - [`skew`]: skew-symmetric matrix ⇄ free-entry vector.
//! - [`objective`]: squared-error loss and its exact gradient.
//! - [`data`] / [`validation`]: validated `(dX, X)` input.
//! - [`diagnostics`]: non-fatal caveats carried with a fit.
//! - [`init`] / [`options`]: starting point and fit configuration.

pub mod data;
pub mod diagnostics;
pub mod init;
pub mod objective;
pub mod options;
pub mod skew;
pub mod validation;
