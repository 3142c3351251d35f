//! # arcanum-solve
//!
//! Polynomial interpolation and secret reconstruction for Arcanum.
//!
//! Given a set of integer points and a threshold `k`, this crate fits
//! the unique degree `k-1` polynomial through the first `k` points by
//! solving the corresponding Vandermonde system, and reads the hidden
//! value off its constant term.
//!
//! ## Numeric Semantics
//!
//! Point values stay exact ([`arcanum_integers::Integer`]) until the
//! augmented matrix is built; everything from there on is `f64`.
//! Rounding error therefore grows with `k` and with the magnitude of
//! the x powers. The secret accessor truncates toward zero, matching
//! the historical behavior of this scheme; callers wanting
//! nearest-integer semantics should round [`reconstruct_constant`]
//! themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod point;
pub mod poly;
pub mod reconstruct;

#[cfg(test)]
mod proptests;

pub use point::{Point, PointSet};
pub use poly::Polynomial;
pub use reconstruct::{
    reconstruct_constant, reconstruct_polynomial, reconstruct_polynomial_with,
    reconstruct_secret, ReconstructError,
};
