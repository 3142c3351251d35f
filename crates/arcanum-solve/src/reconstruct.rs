//! Secret reconstruction by Vandermonde interpolation.
//!
//! Row i of the augmented system is `[x_i^0, x_i^1, ..., x_i^(k-1) | y_i]`,
//! so the solution vector is exactly the coefficient vector of the unique
//! degree `k-1` polynomial through the selected points.

use thiserror::Error;

use arcanum_linalg::{solve_augmented, DenseMatrix, Pivoting, SingularMatrix};

use crate::point::{Point, PointSet};
use crate::poly::Polynomial;

/// An error produced while reconstructing a secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructError {
    /// A reconstruction was requested with a threshold of zero.
    #[error("at least one point is required to determine a polynomial")]
    EmptySelection,
    /// Fewer points were supplied than the threshold requires.
    #[error("{required} points are required, only {available} available")]
    NotEnoughPoints {
        /// The threshold `k`.
        required: usize,
        /// How many points were actually supplied.
        available: usize,
    },
    /// The selected points produce a singular system, e.g. because two
    /// of them share an x coordinate.
    #[error("selected points are degenerate: {0}")]
    Singular(#[from] SingularMatrix),
}

/// Builds the `k x (k+1)` augmented Vandermonde system for `points`.
///
/// Powers of x are accumulated by repeated multiplication in `f64`;
/// the exact y values are narrowed to `f64` here and nowhere earlier.
fn vandermonde_system(points: &[Point]) -> DenseMatrix {
    let k = points.len();
    let mut system = DenseMatrix::zeros(k, k + 1);

    for (i, point) in points.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = point.x() as f64;
        let mut power = 1.0;
        for j in 0..k {
            system[(i, j)] = power;
            power *= x;
        }
        system[(i, k)] = point.y().to_f64();
    }

    system
}

/// Fits the degree `k-1` polynomial through the first `k` points,
/// choosing the elimination strategy explicitly.
///
/// [`Pivoting::None`] reproduces the historical elimination order of
/// this scheme bit for bit; [`Pivoting::Partial`] is the numerically
/// safer choice under the same contract.
///
/// # Errors
///
/// See [`ReconstructError`]. Whatever the strategy, a degenerate
/// selection is reported as [`ReconstructError::Singular`] rather than
/// leaking NaN or infinity.
pub fn reconstruct_polynomial_with(
    points: &PointSet,
    k: usize,
    pivoting: Pivoting,
) -> Result<Polynomial, ReconstructError> {
    if k == 0 {
        return Err(ReconstructError::EmptySelection);
    }
    let selected = points
        .first_k(k)
        .ok_or(ReconstructError::NotEnoughPoints {
            required: k,
            available: points.len(),
        })?;

    let system = vandermonde_system(selected);
    let coeffs = solve_augmented(system, pivoting)?;
    Ok(Polynomial::new(coeffs))
}

/// Fits the degree `k-1` polynomial through the first `k` points.
///
/// Points beyond the first `k` are ignored entirely; the selection is
/// purely positional, with no consistency checking of the remainder.
///
/// # Errors
///
/// See [`ReconstructError`].
pub fn reconstruct_polynomial(
    points: &PointSet,
    k: usize,
) -> Result<Polynomial, ReconstructError> {
    reconstruct_polynomial_with(points, k, Pivoting::None)
}

/// Reconstructs the constant term of the hidden polynomial.
///
/// # Errors
///
/// See [`ReconstructError`].
pub fn reconstruct_constant(points: &PointSet, k: usize) -> Result<f64, ReconstructError> {
    Ok(reconstruct_polynomial(points, k)?.constant_term())
}

/// Reconstructs the secret as an integer, truncating toward zero.
///
/// Truncation (rather than rounding) mirrors the historical behavior of
/// this scheme, so a constant term that floating-point error has pulled
/// just below an integer lands on the integer beneath it. Callers that
/// prefer nearest-integer semantics should round
/// [`reconstruct_constant`] instead.
///
/// # Errors
///
/// See [`ReconstructError`].
pub fn reconstruct_secret(points: &PointSet, k: usize) -> Result<i128, ReconstructError> {
    let constant = reconstruct_constant(points, k)?;
    #[allow(clippy::cast_possible_truncation)]
    let secret = constant.trunc() as i128;
    Ok(secret)
}
