//! Gauss-Jordan elimination over augmented systems.
//!
//! The input is a `n x (n+1)` augmented matrix `[A | b]`. Forward
//! elimination normalizes each diagonal entry to 1 and clears the column
//! below it; back-substitution then reads the solution off the resulting
//! unit upper-triangular system.

use thiserror::Error;

use crate::dense_matrix::DenseMatrix;

/// Pivot selection strategy for elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivoting {
    /// Use the diagonal entry as-is. Fails on an exactly-zero diagonal
    /// and is numerically fragile on ill-conditioned systems, but keeps
    /// bit-for-bit reproducible arithmetic across runs.
    #[default]
    None,
    /// Swap in the row with the largest absolute entry in the pivot
    /// column before normalizing. More stable, same external contract.
    Partial,
}

/// A zero pivot was encountered: the system has no unique solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("zero pivot at row {row}: the system is singular")]
pub struct SingularMatrix {
    /// Elimination step at which the zero pivot appeared.
    pub row: usize,
}

/// Solves the augmented system `[A | b]` in place, returning `x` with
/// `A * x = b`.
///
/// # Errors
///
/// Returns [`SingularMatrix`] when a pivot is exactly zero, e.g. when
/// two rows of `A` coincide. The zero check happens before any division
/// so a singular system can never leak NaN or infinity into the result.
///
/// # Panics
///
/// Panics unless the matrix has exactly one more column than rows.
pub fn solve_augmented(
    mut system: DenseMatrix,
    pivoting: Pivoting,
) -> Result<Vec<f64>, SingularMatrix> {
    let n = system.num_rows();
    assert_eq!(system.num_cols(), n + 1, "expected an augmented matrix");

    // Forward elimination: unit diagonal, zeros below it.
    for i in 0..n {
        if pivoting == Pivoting::Partial {
            let pivot_row = (i..n)
                .max_by(|&a, &b| {
                    system[(a, i)]
                        .abs()
                        .total_cmp(&system[(b, i)].abs())
                })
                .unwrap_or(i);
            system.swap_rows(i, pivot_row);
        }

        let pivot = system[(i, i)];
        if pivot == 0.0 {
            return Err(SingularMatrix { row: i });
        }
        system.div_row(i, pivot);

        for j in (i + 1)..n {
            let factor = system[(j, i)];
            if factor != 0.0 {
                system.sub_scaled_row(j, i, factor);
            }
        }
    }

    // Back-substitution from the last row up.
    let mut solution = vec![0.0; n];
    for i in (0..n).rev() {
        let mut value = system[(i, n)];
        for j in (i + 1)..n {
            value -= system[(i, j)] * solution[j];
        }
        solution[i] = value;
    }

    Ok(solution)
}
