//! Solved polynomials as dense coefficient vectors.

/// A polynomial over `f64`, coefficients in ascending degree order.
///
/// Unlike an exact dense polynomial, fitted coefficients are kept
/// verbatim: trailing entries that elimination left at (or merely
/// near) zero are not stripped, so a fit through `k` points always
/// carries exactly `k` coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients in ascending degree order.
    #[must_use]
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    /// Returns the nominal degree, one less than the coefficient count.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Returns the coefficient of x^i, or zero past the end.
    #[must_use]
    pub fn coeff(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the constant term, the polynomial's value at x = 0.
    #[must_use]
    pub fn constant_term(&self) -> f64 {
        self.coeff(0)
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let mut result = 0.0;
        for c in self.coeffs.iter().rev() {
            result = result * x + c;
        }
        result
    }
}
