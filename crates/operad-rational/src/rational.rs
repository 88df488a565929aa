//! Arbitrary precision rational numbers.
//!
//! This module provides exact rational arithmetic for symbolic computation.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::arith::{integer_gcd, integer_lcm};

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: IBig, denominator: IBig) -> Self {
        assert!(denominator != IBig::ZERO, "denominator cannot be zero");
        let numerator = if denominator < IBig::ZERO {
            -numerator
        } else {
            numerator
        };
        Self(RBig::from_parts(numerator, denominator.unsigned_abs()))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: IBig) -> Self {
        Self(RBig::from(n))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(IBig::from(numerator), IBig::from(denominator))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> IBig {
        self.0.numerator().clone()
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub fn denominator(&self) -> IBig {
        IBig::from(self.0.denominator().clone())
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<IBig> {
        if self.is_integer() {
            Some(self.numerator())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true if strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        DashuSigned::is_positive(&self.0)
    }

    /// Computes `self^exp` for non-negative `exp`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.clone().pow(exp as usize))
    }

    /// Computes `self^exp` for any integer exponent.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero and `exp` is negative.
    #[must_use]
    pub fn pow_signed(&self, exp: i64) -> Self {
        if exp < 0 {
            self.recip().pow(u32::try_from(exp.unsigned_abs()).expect("exponent too large"))
        } else {
            self.pow(u32::try_from(exp).expect("exponent too large"))
        }
    }

    /// Computes the gcd of two rationals:
    /// `gcd(p₁/q₁, p₂/q₂) = gcd(p₁, p₂) / lcm(q₁, q₂)`.
    ///
    /// This is the natural content notion for lists of rational
    /// coefficients: both arguments are integer multiples of the result.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }
        let num = integer_gcd(&self.numerator(), &other.numerator());
        let den = integer_lcm(&self.denominator(), &other.denominator());
        Self::new(num, den)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");
        Self(self.0 / rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self(RBig::from(value))
    }
}

impl From<IBig> for Rational {
    fn from(value: IBig) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization() {
        let r = Rational::from_i64(2, 4);
        assert_eq!(r.numerator(), IBig::from(1));
        assert_eq!(r.denominator(), IBig::from(2));

        let r = Rational::from_i64(3, -6);
        assert_eq!(r.numerator(), IBig::from(-1));
        assert_eq!(r.denominator(), IBig::from(2));
    }

    #[test]
    fn arithmetic() {
        let a = Rational::from_i64(1, 2);
        let b = Rational::from_i64(1, 3);
        assert_eq!(a.clone() + b.clone(), Rational::from_i64(5, 6));
        assert_eq!(a.clone() - b.clone(), Rational::from_i64(1, 6));
        assert_eq!(a.clone() * b.clone(), Rational::from_i64(1, 6));
        assert_eq!(a.clone() / b, Rational::from_i64(3, 2));
        assert_eq!(-a, Rational::from_i64(-1, 2));
    }

    #[test]
    fn powers() {
        let a = Rational::from_i64(2, 3);
        assert_eq!(a.pow(2), Rational::from_i64(4, 9));
        assert_eq!(a.pow_signed(-1), Rational::from_i64(3, 2));
        assert_eq!(a.pow(0), Rational::one());
    }

    #[test]
    fn rational_gcd() {
        let a = Rational::from_i64(1, 2);
        let b = Rational::from_i64(3, 4);
        assert_eq!(a.gcd(&b), Rational::from_i64(1, 4));
        assert_eq!(Rational::zero().gcd(&a), a);
    }

    #[test]
    fn display() {
        assert_eq!(Rational::from_i64(-3, 4).to_string(), "-3/4");
        assert_eq!(Rational::from(5).to_string(), "5");
    }
}
