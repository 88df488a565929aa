//! Abstract calculator traits.
//!
//! Each trait is a pure capability bundle for one algebraic structure over
//! one element type `T`. Default methods derive operations from the
//! required ones exactly as documented; implementers may override any of
//! them for performance or exactness, but must preserve the documented
//! semantics.
//!
//! A calculator instance must be referentially stable for the lifetime of
//! any math object that holds it.

use std::cmp::Ordering;

use crate::error::{CalcError, CalcResult};

/// An equivalence relation over `T`.
///
/// # Laws
///
/// `is_equal` is reflexive, symmetric and transitive, and must agree with
/// [`OrderPredicate::compare`] when both are implemented:
/// `compare(x, y) == Equal ⟺ is_equal(x, y)`.
pub trait EqualPredicate<T> {
    /// Determines whether the two elements are equal.
    fn is_equal(&self, x: &T, y: &T) -> bool;
}

/// A total ordering over `T`, consistent with the equality predicate.
pub trait OrderPredicate<T>: EqualPredicate<T> {
    /// Compares two elements.
    fn compare(&self, x: &T, y: &T) -> Ordering;
}

/// A calculator for a semigroup: an associative binary operation.
pub trait SemigroupCalculator<T: Clone>: EqualPredicate<T> {
    /// Applies the semigroup operation. Must be associative.
    fn apply(&self, x: &T, y: &T) -> T;

    /// Whether the operation is commutative.
    fn is_commutative(&self) -> bool {
        false
    }
}

/// A calculator for a monoid: a semigroup with an identity element.
///
/// # Laws
///
/// `apply(x, identity()) == x == apply(identity(), x)` under `is_equal`.
pub trait MonoidCalculator<T: Clone>: SemigroupCalculator<T> {
    /// Returns the identity element.
    fn identity(&self) -> T;

    /// Computes the `n`-fold application of `x` to itself by binary
    /// exponentiation; `monoid_pow(x, 0) == identity()`.
    fn monoid_pow(&self, x: &T, n: u64) -> T {
        let mut result = self.identity();
        let mut base = x.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.apply(&result, &base);
            }
            base = self.apply(&base, &base);
            exp >>= 1;
        }
        result
    }
}

/// A calculator for a group: a monoid in which every element is invertible.
///
/// # Laws
///
/// `apply(x, inverse(x)) == identity()` under `is_equal`.
pub trait GroupCalculator<T: Clone>: MonoidCalculator<T> {
    /// Returns the inverse of `x`.
    fn inverse(&self, x: &T) -> T;

    /// Computes `x` applied to itself `n` times; negative `n` applies the
    /// inverse, `gpow(x, 0) == identity()`.
    fn gpow(&self, x: &T, n: i64) -> T {
        if n < 0 {
            let y = self.inverse(x);
            self.monoid_pow(&y, n.unsigned_abs())
        } else {
            self.monoid_pow(x, n.unsigned_abs())
        }
    }
}

/// A calculator for a ring: an abelian additive group and an associative
/// multiplication distributing over addition.
pub trait RingCalculator<T: Clone>: EqualPredicate<T> {
    /// Returns the additive identity.
    fn zero(&self) -> T;

    /// Computes `x + y`. Must be commutative and associative.
    fn add(&self, x: &T, y: &T) -> T;

    /// Returns the additive inverse of `x`.
    fn negate(&self, x: &T) -> T;

    /// Computes `x * y`.
    fn multiply(&self, x: &T, y: &T) -> T;

    /// Computes `x - y`, equal to `add(x, negate(y))`.
    fn subtract(&self, x: &T, y: &T) -> T {
        self.add(x, &self.negate(y))
    }

    /// Determines whether `x` is the additive identity.
    fn is_zero(&self, x: &T) -> bool {
        self.is_equal(x, &self.zero())
    }

    /// Whether multiplication is commutative in this ring.
    fn is_multiply_commutative(&self) -> bool {
        false
    }

    /// Computes `x * n` for an integer `n`, by doubling.
    fn multiply_long(&self, x: &T, n: i64) -> T {
        let mut base = if n < 0 { self.negate(x) } else { x.clone() };
        let mut result = self.zero();
        let mut m = n.unsigned_abs();
        while m > 0 {
            if m & 1 == 1 {
                result = self.add(&result, &base);
            }
            base = self.add(&base, &base);
            m >>= 1;
        }
        result
    }

    /// Sums a list of elements, starting from `zero()`.
    fn sum(&self, xs: &[T]) -> T {
        let mut acc = self.zero();
        for x in xs {
            acc = self.add(&acc, x);
        }
        acc
    }
}

/// A calculator for a unit ring: a ring with a multiplicative identity.
pub trait UnitRingCalculator<T: Clone>: RingCalculator<T> {
    /// Returns the multiplicative identity.
    fn one(&self) -> T;

    /// Computes `x ^ n` by binary exponentiation; `pow(x, 0) == one()`.
    fn pow(&self, x: &T, n: u64) -> T {
        let mut result = self.one();
        let mut base = x.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.multiply(&result, &base);
            }
            base = self.multiply(&base, &base);
            exp >>= 1;
        }
        result
    }

    /// Multiplies a list of elements, starting from `one()`.
    fn product(&self, xs: &[T]) -> T {
        let mut acc = self.one();
        for x in xs {
            acc = self.multiply(&acc, x);
        }
        acc
    }

    /// Returns the element representing the integer `n`.
    fn of_i64(&self, n: i64) -> T {
        self.multiply_long(&self.one(), n)
    }
}

/// A calculator for a division ring: a unit ring in which every non-zero
/// element has a multiplicative inverse. Multiplication need not be
/// commutative (quaternions are the standard example).
pub trait DivisionRingCalculator<T: Clone>: UnitRingCalculator<T> {
    /// Returns the multiplicative inverse of `x`.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] if `x` is zero.
    fn reciprocal(&self, x: &T) -> CalcResult<T>;

    /// Computes `x / y`, equal to `multiply(x, reciprocal(y))`.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] if `y` is zero.
    fn divide(&self, x: &T, y: &T) -> CalcResult<T> {
        Ok(self.multiply(x, &self.reciprocal(y)?))
    }

    /// Computes `x / n`, equal to `divide(x, multiply_long(one(), n))`.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] if `n == 0`.
    fn divide_long(&self, x: &T, n: i64) -> CalcResult<T> {
        if n == 0 {
            return Err(CalcError::DivisionByZero);
        }
        self.divide(x, &self.multiply_long(&self.one(), n))
    }

    /// Computes `x ^ n` for any integer exponent.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] if `x` is zero and `n < 0`.
    fn pow_signed(&self, x: &T, n: i64) -> CalcResult<T> {
        if n < 0 {
            let r = self.reciprocal(x)?;
            Ok(self.pow(&r, n.unsigned_abs()))
        } else {
            Ok(self.pow(x, n.unsigned_abs()))
        }
    }

    /// Determines whether `x` is invertible. In a division ring every
    /// non-zero element is.
    fn is_unit(&self, x: &T) -> bool {
        !self.is_zero(x)
    }

    /// Division in a division ring is always exact.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] if `y` is zero.
    fn exact_divide(&self, x: &T, y: &T) -> CalcResult<T> {
        self.divide(x, y)
    }
}

/// A calculator for a field: a division ring with commutative
/// multiplication.
///
/// Implementers must return `true` from
/// [`RingCalculator::is_multiply_commutative`].
pub trait FieldCalculator<T: Clone>: DivisionRingCalculator<T> {}

/// A calculator for a unique factorization domain.
///
/// Division is partial here: `exact_divide` succeeds only when the
/// divisor divides without remainder.
pub trait UfdCalculator<T: Clone>: UnitRingCalculator<T> {
    /// Determines whether `x` is invertible in this ring.
    fn is_unit(&self, x: &T) -> bool;

    /// Returns a greatest common divisor of `a` and `b`: an element
    /// dividing both with no common non-unit factor remaining.
    fn gcd(&self, a: &T, b: &T) -> T;

    /// Computes `x / y` when the division is exact.
    ///
    /// # Errors
    ///
    /// [`CalcError::NotExactDivision`] if `y` does not divide `x`.
    fn exact_divide(&self, x: &T, y: &T) -> CalcResult<T>;

    /// Determines whether `b` divides `a` exactly.
    fn is_exact_divide(&self, a: &T, b: &T) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal ring calculator over i64 for exercising the defaults.
    struct IntRing;

    impl EqualPredicate<i64> for IntRing {
        fn is_equal(&self, x: &i64, y: &i64) -> bool {
            x == y
        }
    }

    impl RingCalculator<i64> for IntRing {
        fn zero(&self) -> i64 {
            0
        }
        fn add(&self, x: &i64, y: &i64) -> i64 {
            x + y
        }
        fn negate(&self, x: &i64) -> i64 {
            -x
        }
        fn multiply(&self, x: &i64, y: &i64) -> i64 {
            x * y
        }
        fn is_multiply_commutative(&self) -> bool {
            true
        }
    }

    impl UnitRingCalculator<i64> for IntRing {
        fn one(&self) -> i64 {
            1
        }
    }

    #[test]
    fn subtract_default() {
        let rc = IntRing;
        assert_eq!(rc.subtract(&7, &3), 4);
        assert!(rc.is_zero(&rc.subtract(&5, &5)));
    }

    #[test]
    fn multiply_long_default() {
        let rc = IntRing;
        assert_eq!(rc.multiply_long(&3, 0), 0);
        assert_eq!(rc.multiply_long(&3, 5), 15);
        assert_eq!(rc.multiply_long(&3, -5), -15);
    }

    #[test]
    fn pow_zero_is_one() {
        let rc = IntRing;
        assert_eq!(rc.pow(&17, 0), 1);
        assert_eq!(rc.pow(&2, 10), 1024);
        assert_eq!(rc.pow(&-3, 3), -27);
    }

    #[test]
    fn sum_and_product_fold() {
        let rc = IntRing;
        assert_eq!(rc.sum(&[1, 2, 3, 4]), 10);
        assert_eq!(rc.product(&[1, 2, 3, 4]), 24);
        assert_eq!(rc.sum(&[]), 0);
        assert_eq!(rc.product(&[]), 1);
    }

    #[test]
    fn of_i64_uses_one() {
        let rc = IntRing;
        assert_eq!(rc.of_i64(42), 42);
        assert_eq!(rc.of_i64(-7), -7);
    }
}
