//! Self-typed number-model operator traits.
//!
//! A concrete value type (a fraction, a quaternion, a symbolic
//! multinomial) implements the minimal operation set of these traits and
//! gets the derived operators for free: `subtract` from `add` and
//! `negate`, `divide` from `multiply` and `reciprocal`. The
//! [`NumberModels`]-style constructors at the bottom close over one
//! witness instance's identity elements and turn any model into a generic
//! calculator.

use std::fmt;

use crate::error::{CalcError, CalcResult};
use crate::traits::{
    DivisionRingCalculator, EqualPredicate, FieldCalculator, GroupCalculator, MonoidCalculator,
    RingCalculator, SemigroupCalculator, UnitRingCalculator,
};

/// A number model with an addition-named associative operation.
pub trait MonoidNumberModel: Sized {
    /// Returns `self + y`.
    fn add(&self, y: &Self) -> Self;
}

/// A number model with a multiplication-named associative operation.
pub trait MulMonoidNumberModel: Sized {
    /// Returns `self * y`.
    fn multiply(&self, y: &Self) -> Self;
}

/// A number model suitable for an additive group.
pub trait GroupNumberModel: MonoidNumberModel {
    /// Returns `-self`.
    fn negate(&self) -> Self;

    /// Returns `self - y`, equal to `add(&y.negate())`.
    fn subtract(&self, y: &Self) -> Self {
        self.add(&y.negate())
    }
}

/// A number model suitable for a multiplicative group.
pub trait MulGroupNumberModel: MulMonoidNumberModel {
    /// Returns `1 / self`.
    ///
    /// # Panics
    ///
    /// May panic if `self` is not invertible; use the calculator layer
    /// for checked inversion.
    fn reciprocal(&self) -> Self;

    /// Returns `self / y`, equal to `multiply(&y.reciprocal())`.
    fn divide(&self, y: &Self) -> Self {
        self.multiply(&y.reciprocal())
    }
}

/// A number model suitable for a ring.
pub trait RingNumberModel: GroupNumberModel + MulMonoidNumberModel {
    /// Determines whether this value is the additive identity.
    fn is_zero(&self) -> bool;
}

/// A number model suitable for a division ring.
pub trait DivisionRingNumberModel: RingNumberModel + MulGroupNumberModel {}

/// A number model suitable for a field: a division ring with commutative
/// multiplication.
pub trait FieldNumberModel: DivisionRingNumberModel {}

/// The number model for a linear space over a scalar type.
pub trait VectorModel: GroupNumberModel {
    /// The scalar type of the space.
    type Scalar;

    /// Performs the scalar multiplication `self * k`.
    fn scalar_multiply(&self, k: &Self::Scalar) -> Self;
}

/// A vector model that is also a ring: a (possibly non-unital) algebra.
pub trait AlgebraModel: VectorModel + RingNumberModel {}

/// A number model whose values form a Euclid ring.
///
/// The default `gcd` and `deg` implementations assume well-founded
/// descent: `remainder` must strictly shrink some measure, or the loops
/// do not terminate. That is a correctness precondition on the
/// implementing type, not checked here.
pub trait EuclidRingNumberModel: RingNumberModel + Clone + Eq + fmt::Display {
    /// Determines whether this value is invertible with respect to
    /// multiplication.
    fn is_unit(&self) -> bool;

    /// Returns `(quotient, remainder)` of dividing `self` by `y`.
    fn divide_and_remainder(&self, y: &Self) -> (Self, Self);

    /// Returns the integer quotient of dividing `self` by `y`.
    fn divide_to_integer(&self, y: &Self) -> Self {
        self.divide_and_remainder(y).0
    }

    /// Returns the remainder of dividing `self` by `y`.
    fn remainder(&self, y: &Self) -> Self {
        self.divide_and_remainder(y).1
    }

    /// Returns the greatest common divisor of `self` and `y` by the
    /// Euclidean algorithm.
    fn gcd(&self, y: &Self) -> Self {
        let mut a = self.clone();
        let mut b = y.clone();
        while !b.is_zero() {
            let r = a.remainder(&b);
            a = b;
            b = r;
        }
        a
    }

    /// Returns the least common multiple of `self` and `y`:
    /// `(self * y) / gcd(self, y)`, zero when either operand is zero.
    fn lcm(&self, y: &Self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        if y.is_zero() {
            return y.clone();
        }
        let g = self.gcd(y);
        self.multiply(y).divide_to_integer(&g)
    }

    /// Returns `self / y` when the division is exact.
    ///
    /// # Errors
    ///
    /// [`CalcError::NotExactDivision`] when the remainder is non-zero.
    fn exact_divide(&self, y: &Self) -> CalcResult<Self> {
        let (q, r) = self.divide_and_remainder(y);
        if r.is_zero() {
            Ok(q)
        } else {
            Err(CalcError::not_exact(self, y))
        }
    }

    /// Determines whether `self` and `y` have no common non-unit factor.
    fn is_coprime(&self, y: &Self) -> bool {
        self.gcd(y).is_unit()
    }

    /// Returns the maximal power of `y` dividing `self`: the largest `k`
    /// with `y^k | self`. For example, `deg(12, 2) == 2`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Undefined`] when `self` is zero (every power of `y`
    /// divides it) or when `y` is zero or a unit (repeated division by a
    /// unit never terminates; detected by an unchanged quotient).
    fn deg(&self, y: &Self) -> CalcResult<u32> {
        if y.is_zero() {
            return Err(CalcError::undefined("deg with zero divisor"));
        }
        if self.is_zero() {
            return Err(CalcError::undefined("deg with zero dividend"));
        }
        let mut b = self.clone();
        let mut k = 0u32;
        let (mut q, mut r) = b.divide_and_remainder(y);
        while r.is_zero() {
            k += 1;
            if b == q {
                return Err(CalcError::undefined("deg with unit divisor"));
            }
            b = q;
            let next = b.divide_and_remainder(y);
            q = next.0;
            r = next.1;
        }
        Ok(k)
    }
}

/// A group calculator closing over a witness identity of a
/// [`GroupNumberModel`] type.
pub struct ModelGroupCalculator<T> {
    identity: T,
}

/// Builds a [`GroupCalculator`] from a group number model, given the
/// identity element.
pub fn group_calculator<T>(identity: T) -> ModelGroupCalculator<T>
where
    T: GroupNumberModel + Clone + PartialEq,
{
    ModelGroupCalculator { identity }
}

impl<T> EqualPredicate<T> for ModelGroupCalculator<T>
where
    T: GroupNumberModel + Clone + PartialEq,
{
    fn is_equal(&self, x: &T, y: &T) -> bool {
        x == y
    }
}

impl<T> SemigroupCalculator<T> for ModelGroupCalculator<T>
where
    T: GroupNumberModel + Clone + PartialEq,
{
    fn apply(&self, x: &T, y: &T) -> T {
        x.add(y)
    }

    fn is_commutative(&self) -> bool {
        true
    }
}

impl<T> MonoidCalculator<T> for ModelGroupCalculator<T>
where
    T: GroupNumberModel + Clone + PartialEq,
{
    fn identity(&self) -> T {
        self.identity.clone()
    }
}

impl<T> GroupCalculator<T> for ModelGroupCalculator<T>
where
    T: GroupNumberModel + Clone + PartialEq,
{
    fn inverse(&self, x: &T) -> T {
        x.negate()
    }
}

/// A ring calculator closing over a witness zero of a
/// [`RingNumberModel`] type.
pub struct ModelRingCalculator<T> {
    zero: T,
}

/// Builds a [`RingCalculator`] from a ring number model, given the zero
/// element.
pub fn ring_calculator<T>(zero: T) -> ModelRingCalculator<T>
where
    T: RingNumberModel + Clone + PartialEq,
{
    ModelRingCalculator { zero }
}

impl<T> EqualPredicate<T> for ModelRingCalculator<T>
where
    T: RingNumberModel + Clone + PartialEq,
{
    fn is_equal(&self, x: &T, y: &T) -> bool {
        x == y
    }
}

impl<T> RingCalculator<T> for ModelRingCalculator<T>
where
    T: RingNumberModel + Clone + PartialEq,
{
    fn zero(&self) -> T {
        self.zero.clone()
    }

    fn add(&self, x: &T, y: &T) -> T {
        x.add(y)
    }

    fn negate(&self, x: &T) -> T {
        x.negate()
    }

    fn multiply(&self, x: &T, y: &T) -> T {
        x.multiply(y)
    }

    fn is_zero(&self, x: &T) -> bool {
        x.is_zero()
    }
}

/// A field calculator closing over witness zero and one of a
/// [`FieldNumberModel`] type.
pub struct ModelFieldCalculator<T> {
    zero: T,
    one: T,
}

/// Builds a [`FieldCalculator`] from a field number model, given the
/// identity elements.
pub fn field_calculator<T>(zero: T, one: T) -> ModelFieldCalculator<T>
where
    T: FieldNumberModel + Clone + PartialEq,
{
    ModelFieldCalculator { zero, one }
}

impl<T> EqualPredicate<T> for ModelFieldCalculator<T>
where
    T: FieldNumberModel + Clone + PartialEq,
{
    fn is_equal(&self, x: &T, y: &T) -> bool {
        x == y
    }
}

impl<T> RingCalculator<T> for ModelFieldCalculator<T>
where
    T: FieldNumberModel + Clone + PartialEq,
{
    fn zero(&self) -> T {
        self.zero.clone()
    }

    fn add(&self, x: &T, y: &T) -> T {
        x.add(y)
    }

    fn negate(&self, x: &T) -> T {
        x.negate()
    }

    fn multiply(&self, x: &T, y: &T) -> T {
        x.multiply(y)
    }

    fn is_zero(&self, x: &T) -> bool {
        x.is_zero()
    }

    fn is_multiply_commutative(&self) -> bool {
        true
    }
}

impl<T> UnitRingCalculator<T> for ModelFieldCalculator<T>
where
    T: FieldNumberModel + Clone + PartialEq,
{
    fn one(&self) -> T {
        self.one.clone()
    }
}

impl<T> DivisionRingCalculator<T> for ModelFieldCalculator<T>
where
    T: FieldNumberModel + Clone + PartialEq,
{
    fn reciprocal(&self, x: &T) -> CalcResult<T> {
        if x.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Ok(x.reciprocal())
    }
}

impl<T> FieldCalculator<T> for ModelFieldCalculator<T> where
    T: FieldNumberModel + Clone + PartialEq
{
}

#[cfg(test)]
mod tests {
    use super::*;

    // Plain machine integers as a Euclid ring.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Int(i64);

    impl fmt::Display for Int {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl MonoidNumberModel for Int {
        fn add(&self, y: &Self) -> Self {
            Int(self.0 + y.0)
        }
    }

    impl MulMonoidNumberModel for Int {
        fn multiply(&self, y: &Self) -> Self {
            Int(self.0 * y.0)
        }
    }

    impl GroupNumberModel for Int {
        fn negate(&self) -> Self {
            Int(-self.0)
        }
    }

    impl RingNumberModel for Int {
        fn is_zero(&self) -> bool {
            self.0 == 0
        }
    }

    impl EuclidRingNumberModel for Int {
        fn is_unit(&self) -> bool {
            self.0 == 1 || self.0 == -1
        }

        fn divide_and_remainder(&self, y: &Self) -> (Self, Self) {
            (Int(self.0 / y.0), Int(self.0 % y.0))
        }
    }

    #[test]
    fn euclid_gcd_lcm() {
        assert_eq!(Int(12).gcd(&Int(18)), Int(6));
        assert_eq!(Int(4).lcm(&Int(6)), Int(12));
        assert_eq!(Int(0).lcm(&Int(6)), Int(0));
        assert_eq!(Int(7).gcd(&Int(0)), Int(7));
    }

    #[test]
    fn gcd_times_lcm_is_product() {
        for (a, b) in [(4i64, 6i64), (12, 18), (5, 7), (9, 12)] {
            let g = Int(a).gcd(&Int(b));
            let l = Int(a).lcm(&Int(b));
            assert_eq!(g.0 * l.0, a * b);
        }
    }

    #[test]
    fn exact_divide_behavior() {
        assert_eq!(Int(12).exact_divide(&Int(3)), Ok(Int(4)));
        assert!(matches!(
            Int(13).exact_divide(&Int(3)),
            Err(CalcError::NotExactDivision { .. })
        ));
    }

    #[test]
    fn deg_counts_divisor_powers() {
        assert_eq!(Int(12).deg(&Int(2)), Ok(2));
        assert_eq!(Int(27).deg(&Int(3)), Ok(3));
        assert_eq!(Int(5).deg(&Int(2)), Ok(0));
        assert!(matches!(
            Int(12).deg(&Int(0)),
            Err(CalcError::Undefined(_))
        ));
        assert!(matches!(
            Int(12).deg(&Int(1)),
            Err(CalcError::Undefined(_))
        ));
    }

    #[test]
    fn deg_rejects_zero_dividend() {
        assert_eq!(
            Int(0).deg(&Int(2)),
            Err(CalcError::undefined("deg with zero dividend"))
        );
        assert_eq!(
            Int(0).deg(&Int(0)),
            Err(CalcError::undefined("deg with zero divisor"))
        );
    }

    #[test]
    fn coprime() {
        assert!(Int(8).is_coprime(&Int(9)));
        assert!(!Int(8).is_coprime(&Int(6)));
    }

    #[test]
    fn model_group_calculator_laws() {
        let gc = group_calculator(Int(0));
        let x = Int(4);
        assert!(gc.is_equal(&gc.apply(&x, &gc.identity()), &x));
        assert!(gc.is_equal(&gc.apply(&x, &gc.inverse(&x)), &gc.identity()));
        assert_eq!(gc.gpow(&Int(3), 5), Int(15));
    }

    #[test]
    fn model_field_calculator_over_rationals() {
        use num_traits::{One, Zero};
        use operad_rational::Rational;

        impl MonoidNumberModel for Rational {
            fn add(&self, y: &Self) -> Self {
                self.clone() + y.clone()
            }
        }
        impl MulMonoidNumberModel for Rational {
            fn multiply(&self, y: &Self) -> Self {
                self.clone() * y.clone()
            }
        }
        impl GroupNumberModel for Rational {
            fn negate(&self) -> Self {
                -self.clone()
            }
        }
        impl MulGroupNumberModel for Rational {
            fn reciprocal(&self) -> Self {
                self.recip()
            }
        }
        impl RingNumberModel for Rational {
            fn is_zero(&self) -> bool {
                Zero::is_zero(self)
            }
        }
        impl DivisionRingNumberModel for Rational {}
        impl FieldNumberModel for Rational {}

        let fc = field_calculator(Rational::zero(), Rational::one());
        let x = Rational::from_i64(2, 3);
        let y = Rational::from_i64(-5, 7);
        assert!(fc.is_multiply_commutative());
        assert_eq!(fc.multiply(&x, &y), fc.multiply(&y, &x));
        assert_eq!(
            fc.multiply(&x, &fc.reciprocal(&x).unwrap()),
            UnitRingCalculator::one(&fc)
        );
        assert_eq!(
            fc.reciprocal(&Rational::zero()),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(fc.divide(&x, &y).unwrap(), x.clone() / y);
    }

    #[test]
    fn model_ring_calculator_delegates() {
        let rc = ring_calculator(Int(0));
        assert_eq!(rc.add(&Int(2), &Int(3)), Int(5));
        assert_eq!(rc.multiply(&Int(2), &Int(3)), Int(6));
        assert_eq!(rc.subtract(&Int(2), &Int(3)), Int(-1));
        assert!(rc.is_zero(&Int(0)));
    }
}
