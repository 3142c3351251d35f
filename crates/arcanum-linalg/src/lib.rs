//! # arcanum-linalg
//!
//! Dense floating-point linear algebra for Arcanum.
//!
//! This crate provides:
//! - Row-major dense matrices over `f64` (`DenseMatrix`)
//! - Gauss-Jordan elimination over augmented systems, with an optional
//!   partial-pivoting variant (`solve_augmented`)
//!
//! Matrices here are small (tens of rows), so a flat row-major `Vec`
//! beats anything fancier on cache locality and simplicity.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense_matrix;
pub mod elimination;

#[cfg(test)]
mod tests;

pub use dense_matrix::DenseMatrix;
pub use elimination::{solve_augmented, Pivoting, SingularMatrix};
