//! Skew parameterization — bijection between `k×k` skew-symmetric matrices
//! and their `k(k-1)/2` free entries.
//!
//! Purpose
//! -------
//! Reduce the constrained problem over skew-symmetric `M` to an unconstrained
//! one over a plain vector `m`, so that the optimizer never has to know about
//! the constraint.
//!
//! Conventions
//! -----------
//! - `m` lists the strict upper triangle of `M` in **row-major** order:
//!   `(0,1), (0,2), …, (0,k-1), (1,2), …, (k-2,k-1)`.
//! - [`matricize`] places `m[idx]` at `[i, j]` and `-m[idx]` at `[j, i]` and
//!   leaves the diagonal at zero, so its output is always exactly
//!   skew-symmetric.
//! - [`vectorize`] does **not** check skew-symmetry; entries below the
//!   diagonal are ignored.
//!
//! Invariants
//! ----------
//! - `matricize(vectorize(M)) == M` bit-exactly for skew-symmetric `M`.
//! - `vectorize(matricize(m)) == m` bit-exactly for any valid-length `m`.
use crate::regression::errors::{RegressionError, RegressionResult};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Number of free entries of a `k×k` skew-symmetric matrix.
pub fn skew_len(k: usize) -> usize {
    k * k.saturating_sub(1) / 2
}

/// Recover `k` from a free-entry count `len = k(k-1)/2`.
///
/// Uses `k = (1 + √(1 + 8·len)) / 2` and checks the result exactly, so that
/// floating-point rounding never accepts a wrong length. `len = 0` maps to
/// `k = 1`.
///
/// # Errors
/// [`RegressionError::DimensionMismatch`] if no integer `k` exists.
pub fn skew_dim(len: usize) -> RegressionResult<usize> {
    let k = ((1.0 + (1.0 + 8.0 * len as f64).sqrt()) / 2.0).round() as usize;
    if skew_len(k) != len {
        return Err(RegressionError::DimensionMismatch { len });
    }
    Ok(k)
}

/// Extract the strict upper triangle of `m` in row-major order.
///
/// Reads the leading `k×k` block with `k = min(rows, cols)`.
pub fn vectorize(m: ArrayView2<f64>) -> Array1<f64> {
    let k = m.nrows().min(m.ncols());
    let mut out = Vec::with_capacity(skew_len(k));
    for i in 0..k {
        for j in (i + 1)..k {
            out.push(m[[i, j]]);
        }
    }
    Array1::from(out)
}

/// Rebuild the skew-symmetric matrix whose strict upper triangle is `m`.
///
/// # Errors
/// [`RegressionError::DimensionMismatch`] if `m.len()` is not triangular.
pub fn matricize(m: ArrayView1<f64>) -> RegressionResult<Array2<f64>> {
    let k = skew_dim(m.len())?;
    let mut out = Array2::zeros((k, k));
    let mut idx = 0;
    for i in 0..k {
        for j in (i + 1)..k {
            out[[i, j]] = m[idx];
            out[[j, i]] = -m[idx];
            idx += 1;
        }
    }
    Ok(out)
}

/// Orthogonal projection onto the skew-symmetric subspace, `½(A − Aᵀ)`.
pub fn project_skew(a: ArrayView2<f64>) -> Array2<f64> {
    (&a - &a.t()) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::{SeedableRng, rngs::StdRng};
    use rand_distr::{Distribution, StandardNormal};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The row-major ordering of free entries.
    // - Exact round trips in both directions, for every `k` from 1 to 20.
    // - Rejection of non-triangular lengths.
    // - Skew projection.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Free entries are read row by row from the strict upper triangle.
    //
    // Given
    // -----
    // - `M = [[0, a, b], [-a, 0, c], [-b, -c, 0]]` with `(a, b, c) = (1, 2, 3)`.
    //
    // Expect
    // ------
    // - `vectorize(M) = (1, 2, 3)` and `matricize` rebuilds `M` exactly.
    fn vectorize_uses_row_major_upper_triangle() {
        // Arrange
        let m = array![[0.0, 1.0, 2.0], [-1.0, 0.0, 3.0], [-2.0, -3.0, 0.0]];

        // Act
        let v = vectorize(m.view());
        let back = matricize(v.view()).expect("length 3 is triangular");

        // Assert
        assert_eq!(v, array![1.0, 2.0, 3.0]);
        assert_eq!(back, m);
    }

    #[test]
    // Purpose
    // -------
    // `vectorize ∘ matricize` is the identity for awkward values.
    //
    // Given
    // -----
    // - A length-10 vector (`k = 5`) with mixed signs and magnitudes.
    //
    // Expect
    // ------
    // - Bit-exact equality after the round trip; output is skew-symmetric.
    fn matricize_round_trip_is_exact() {
        let m = array![0.1, -2.5e-9, 3.75, 1e12, -0.0, 7.0, -1.0 / 3.0, 2.0, 0.5, -8.25];

        let mat = matricize(m.view()).expect("length 10 is triangular");

        assert_eq!(mat.nrows(), 5);
        assert_eq!(vectorize(mat.view()), m);
        assert_eq!(mat, -mat.t().to_owned());
        assert!(mat.diag().iter().all(|&d| d == 0.0));
    }

    #[test]
    // Purpose
    // -------
    // Lengths that are not `k(k-1)/2` are rejected; small valid lengths map
    // to the expected `k`.
    //
    // Expect
    // ------
    // - `len = 2, 4, 5` fail with `DimensionMismatch`; `len = 0, 1, 3, 6`
    //   give `k = 1, 2, 3, 4`.
    fn skew_dim_rejects_non_triangular_lengths() {
        for len in [2, 4, 5, 7] {
            assert_eq!(skew_dim(len), Err(RegressionError::DimensionMismatch { len }));
        }
        assert_eq!(skew_dim(0), Ok(1));
        assert_eq!(skew_dim(1), Ok(2));
        assert_eq!(skew_dim(3), Ok(3));
        assert_eq!(skew_dim(6), Ok(4));
        assert!(matricize(Array1::zeros(4).view()).is_err());
    }

    #[test]
    // Purpose
    // -------
    // `project_skew` keeps the skew part and drops the symmetric part.
    //
    // Expect
    // ------
    // - `project_skew([[1, 4], [2, 3]]) = [[0, 1], [-1, 0]]`.
    fn project_skew_removes_symmetric_part() {
        let a = array![[1.0, 4.0], [2.0, 3.0]];
        assert_eq!(project_skew(a.view()), array![[0.0, 1.0], [-1.0, 0.0]]);
    }

    #[test]
    // Purpose
    // -------
    // Both round trips are exact for every dimension in common use,
    // including the degenerate `k = 1`.
    //
    // Given
    // -----
    // - For `k = 1..=20`: a random free-entry vector of length `k(k-1)/2`
    //   and a random skew matrix `A − Aᵀ`, drawn from a seeded generator.
    //
    // Expect
    // ------
    // - `vectorize(matricize(m)) == m` and `matricize(vectorize(S)) == S`
    //   bit-exactly; `matricize(m)` is `k×k` and skew-symmetric.
    // - The empty vector maps to the `1×1` zero matrix and back.
    fn round_trips_are_exact_for_k_up_to_twenty() {
        let mut rng = StdRng::seed_from_u64(20);

        for k in 1..=20 {
            // Arrange
            let m: Array1<f64> =
                (0..skew_len(k)).map(|_| StandardNormal.sample(&mut rng)).collect();
            let a: Array2<f64> =
                Array2::from_shape_fn((k, k), |_| StandardNormal.sample(&mut rng));
            let skew: Array2<f64> = &a - &a.t();

            // Act
            let mat = matricize(m.view()).expect("triangular length");
            let back = matricize(vectorize(skew.view()).view()).expect("triangular length");

            // Assert
            assert_eq!(mat.dim(), (k, k), "k = {k}");
            assert_eq!(vectorize(mat.view()), m, "k = {k}");
            assert_eq!(mat, -mat.t().to_owned(), "k = {k}");
            assert_eq!(back, skew, "k = {k}");
        }

        let empty = Array1::<f64>::zeros(0);
        let one = matricize(empty.view()).expect("length 0 is k = 1");
        assert_eq!(one, Array2::<f64>::zeros((1, 1)));
        assert_eq!(vectorize(one.view()).len(), 0);
    }
}
