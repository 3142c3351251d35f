//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::Integer` with the
//! operations needed for share decoding and polynomial sampling.

use dashu::base::BitTest;
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// An error produced while decoding an integer literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// The requested base falls outside the supported range.
    #[error("base {0} is outside the supported range 2..=36")]
    UnsupportedBase(u32),
    /// A character in the literal is not a digit of the requested base.
    #[error("digit {digit:?} is not valid in base {base}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The base the literal was decoded against.
        base: u32,
    },
    /// The literal contained no digits at all.
    #[error("empty literal")]
    Empty,
}

/// An arbitrary precision integer.
///
/// This type wraps `dashu::IBig` and provides the operations needed for
/// exact share decoding and for sampling polynomials in tests.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Decodes an unsigned integer literal in the given base.
    ///
    /// The literal must consist solely of digit characters valid in
    /// `base` (`0-9`, `a-z`/`A-Z` for digits ten and above, matched
    /// case-insensitively). Signs, whitespace, underscores and radix
    /// prefixes are all rejected.
    ///
    /// # Errors
    ///
    /// Returns [`LiteralError::UnsupportedBase`] when `base` is outside
    /// `2..=36`, [`LiteralError::Empty`] for an empty literal, and
    /// [`LiteralError::InvalidDigit`] when a character is not a digit of
    /// the requested base.
    pub fn from_str_radix(literal: &str, base: u32) -> Result<Self, LiteralError> {
        if !(2..=36).contains(&base) {
            return Err(LiteralError::UnsupportedBase(base));
        }
        if literal.is_empty() {
            return Err(LiteralError::Empty);
        }

        let radix = IBig::from(base);
        let mut value = IBig::ZERO;
        for ch in literal.chars() {
            let digit = ch
                .to_digit(base)
                .ok_or(LiteralError::InvalidDigit { digit: ch, base })?;
            value = value * &radix + IBig::from(digit);
        }

        Ok(Self(value))
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Returns the number of bits needed to represent this integer.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Converts to the nearest f64.
    ///
    /// Values wider than 53 bits lose precision here; this is the single
    /// point where exact share values enter floating point.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}
