//! # arcanum-integers
//!
//! Arbitrary precision integer arithmetic for Arcanum.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Strict decoding of integer literals in bases 2 through 36
//!
//! ## Precision Notes
//!
//! Decoded share values routinely exceed 53 bits, so they are kept exact
//! here and converted to floating point only where a solver explicitly
//! asks for it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;

#[cfg(test)]
mod proptests;

pub use integer::{Integer, LiteralError};
