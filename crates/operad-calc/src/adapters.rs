//! Factory adapters building calculators from simpler capability sets.
//!
//! This module mirrors the construction patterns a library of generic math
//! objects needs: wrapping a composable/invertible type as a group,
//! treating a bare equality predicate as a (mostly unsupported) real
//! calculator, lifting ring and division-ring calculators to the rich
//! [`RealCalculator`] shape, viewing the multiplicative structure of a
//! division ring as a group, and transporting a group calculator through a
//! bijection.

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::error::CalcResult;
use crate::real::{Bijection, RealCalculator};
use crate::traits::{
    DivisionRingCalculator, EqualPredicate, GroupCalculator, MonoidCalculator,
    SemigroupCalculator, UnitRingCalculator,
};

/// A type whose values compose associatively, such as functions or
/// transformations.
pub trait Composable: Sized {
    /// Composes `self` with `other`.
    fn compose(&self, other: &Self) -> Self;
}

/// A composable type whose values are invertible.
pub trait Invertible: Sized {
    /// Returns the inverse of `self`.
    fn inverse(&self) -> Self;
}

/// An equality predicate delegating to the element type's native `==`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeEquality;

impl<T: PartialEq> EqualPredicate<T> for NativeEquality {
    fn is_equal(&self, x: &T, y: &T) -> bool {
        x == y
    }
}

/// A group calculator over a composable, invertible type.
pub struct ComposingGroup<T, E> {
    identity: T,
    eq: E,
}

/// Builds a [`GroupCalculator`] from a composable and invertible type,
/// given its identity element and an explicit equality predicate.
pub fn composing_group<T, E>(identity: T, eq: E) -> ComposingGroup<T, E>
where
    T: Composable + Invertible + Clone,
    E: EqualPredicate<T>,
{
    ComposingGroup { identity, eq }
}

/// Builds a [`GroupCalculator`] from a composable and invertible type,
/// using the type's native equality.
pub fn composing_group_native<T>(identity: T) -> ComposingGroup<T, NativeEquality>
where
    T: Composable + Invertible + Clone + PartialEq,
{
    ComposingGroup {
        identity,
        eq: NativeEquality,
    }
}

impl<T, E> EqualPredicate<T> for ComposingGroup<T, E>
where
    T: Composable + Invertible + Clone,
    E: EqualPredicate<T>,
{
    fn is_equal(&self, x: &T, y: &T) -> bool {
        self.eq.is_equal(x, y)
    }
}

impl<T, E> SemigroupCalculator<T> for ComposingGroup<T, E>
where
    T: Composable + Invertible + Clone,
    E: EqualPredicate<T>,
{
    fn apply(&self, x: &T, y: &T) -> T {
        x.compose(y)
    }
}

impl<T, E> MonoidCalculator<T> for ComposingGroup<T, E>
where
    T: Composable + Invertible + Clone,
    E: EqualPredicate<T>,
{
    fn identity(&self) -> T {
        self.identity.clone()
    }
}

impl<T, E> GroupCalculator<T> for ComposingGroup<T, E>
where
    T: Composable + Invertible + Clone,
    E: EqualPredicate<T>,
{
    fn inverse(&self, x: &T) -> T {
        x.inverse()
    }
}

/// A semigroup calculator over a composable type.
pub struct ComposingSemigroup<E> {
    eq: E,
}

/// Builds a [`SemigroupCalculator`] from a composable type and an explicit
/// equality predicate. No identity or inverse is required.
pub fn composing_semigroup<T, E>(eq: E) -> ComposingSemigroup<E>
where
    T: Composable + Clone,
    E: EqualPredicate<T>,
{
    ComposingSemigroup { eq }
}

/// Builds a [`SemigroupCalculator`] from a composable type using native
/// equality.
#[must_use]
pub fn composing_semigroup_native() -> ComposingSemigroup<NativeEquality> {
    ComposingSemigroup { eq: NativeEquality }
}

impl<T, E> EqualPredicate<T> for ComposingSemigroup<E>
where
    T: Composable + Clone,
    E: EqualPredicate<T>,
{
    fn is_equal(&self, x: &T, y: &T) -> bool {
        self.eq.is_equal(x, y)
    }
}

impl<T, E> SemigroupCalculator<T> for ComposingSemigroup<E>
where
    T: Composable + Clone,
    E: EqualPredicate<T>,
{
    fn apply(&self, x: &T, y: &T) -> T {
        x.compose(y)
    }
}

/// A [`RealCalculator`] that supports only equality; every other
/// operation fails with `Unsupported`.
///
/// If the predicate at hand is already a full calculator, use it directly
/// instead of wrapping it.
pub struct EqualOnlyCalculator<E> {
    pred: E,
}

impl<E> EqualOnlyCalculator<E> {
    /// Wraps a bare equality predicate as a real calculator.
    pub fn new(pred: E) -> Self {
        Self { pred }
    }
}

impl<T, E> RealCalculator<T> for EqualOnlyCalculator<E>
where
    T: Clone,
    E: EqualPredicate<T>,
{
    fn is_equal(&self, x: &T, y: &T) -> CalcResult<bool> {
        Ok(self.pred.is_equal(x, y))
    }
}

/// A [`RealCalculator`] view of a ring calculator: additive and
/// multiplicative structure is delegated, everything else fails with
/// `Unsupported`.
pub struct RingAsReal<C> {
    ring: C,
}

/// Lifts a [`UnitRingCalculator`] to the [`RealCalculator`] shape.
pub fn to_real_ring<T, C>(ring: C) -> RingAsReal<C>
where
    T: Clone,
    C: UnitRingCalculator<T>,
{
    RingAsReal { ring }
}

impl<T, C> RealCalculator<T> for RingAsReal<C>
where
    T: Clone,
    C: UnitRingCalculator<T>,
{
    fn zero(&self) -> CalcResult<T> {
        Ok(self.ring.zero())
    }

    fn one(&self) -> CalcResult<T> {
        Ok(self.ring.one())
    }

    fn is_equal(&self, x: &T, y: &T) -> CalcResult<bool> {
        Ok(self.ring.is_equal(x, y))
    }

    fn add(&self, x: &T, y: &T) -> CalcResult<T> {
        Ok(self.ring.add(x, y))
    }

    fn negate(&self, x: &T) -> CalcResult<T> {
        Ok(self.ring.negate(x))
    }

    fn subtract(&self, x: &T, y: &T) -> CalcResult<T> {
        Ok(self.ring.subtract(x, y))
    }

    fn multiply(&self, x: &T, y: &T) -> CalcResult<T> {
        Ok(self.ring.multiply(x, y))
    }

    fn multiply_long(&self, x: &T, n: i64) -> CalcResult<T> {
        Ok(self.ring.multiply_long(x, n))
    }

    fn pow(&self, x: &T, n: i64) -> CalcResult<T> {
        if n < 0 {
            return Err(crate::CalcError::unsupported("negative pow in a ring"));
        }
        Ok(self.ring.pow(x, n.unsigned_abs()))
    }
}

/// A [`RealCalculator`] view of a division-ring calculator.
pub struct DivisionRingAsReal<C> {
    dr: C,
}

/// Lifts a [`DivisionRingCalculator`] to the [`RealCalculator`] shape:
/// field-like operations are delegated, transcendental ones fail with
/// `Unsupported`.
pub fn to_real_division_ring<T, C>(dr: C) -> DivisionRingAsReal<C>
where
    T: Clone,
    C: DivisionRingCalculator<T>,
{
    DivisionRingAsReal { dr }
}

impl<T, C> RealCalculator<T> for DivisionRingAsReal<C>
where
    T: Clone,
    C: DivisionRingCalculator<T>,
{
    fn zero(&self) -> CalcResult<T> {
        Ok(self.dr.zero())
    }

    fn one(&self) -> CalcResult<T> {
        Ok(self.dr.one())
    }

    fn is_equal(&self, x: &T, y: &T) -> CalcResult<bool> {
        Ok(self.dr.is_equal(x, y))
    }

    fn add(&self, x: &T, y: &T) -> CalcResult<T> {
        Ok(self.dr.add(x, y))
    }

    fn negate(&self, x: &T) -> CalcResult<T> {
        Ok(self.dr.negate(x))
    }

    fn subtract(&self, x: &T, y: &T) -> CalcResult<T> {
        Ok(self.dr.subtract(x, y))
    }

    fn multiply(&self, x: &T, y: &T) -> CalcResult<T> {
        Ok(self.dr.multiply(x, y))
    }

    fn divide(&self, x: &T, y: &T) -> CalcResult<T> {
        self.dr.divide(x, y)
    }

    fn reciprocal(&self, x: &T) -> CalcResult<T> {
        self.dr.reciprocal(x)
    }

    fn multiply_long(&self, x: &T, n: i64) -> CalcResult<T> {
        Ok(self.dr.multiply_long(x, n))
    }

    fn divide_long(&self, x: &T, n: i64) -> CalcResult<T> {
        self.dr.divide_long(x, n)
    }

    fn pow(&self, x: &T, n: i64) -> CalcResult<T> {
        self.dr.pow_signed(x, n)
    }
}

/// The multiplicative group of a division ring: `identity = one`,
/// `apply = multiply`, `inverse = reciprocal`.
pub struct MulGroupView<C> {
    dr: C,
}

/// Treats the multiplicative structure of a division ring as a group.
///
/// The group's domain is the non-zero elements; calling
/// [`GroupCalculator::inverse`] on zero panics.
pub fn as_multiplicative_group<T, C>(dr: C) -> MulGroupView<C>
where
    T: Clone,
    C: DivisionRingCalculator<T>,
{
    MulGroupView { dr }
}

impl<T, C> EqualPredicate<T> for MulGroupView<C>
where
    T: Clone,
    C: DivisionRingCalculator<T>,
{
    fn is_equal(&self, x: &T, y: &T) -> bool {
        self.dr.is_equal(x, y)
    }
}

impl<T, C> SemigroupCalculator<T> for MulGroupView<C>
where
    T: Clone,
    C: DivisionRingCalculator<T>,
{
    fn apply(&self, x: &T, y: &T) -> T {
        self.dr.multiply(x, y)
    }

    fn is_commutative(&self) -> bool {
        self.dr.is_multiply_commutative()
    }
}

impl<T, C> MonoidCalculator<T> for MulGroupView<C>
where
    T: Clone,
    C: DivisionRingCalculator<T>,
{
    fn identity(&self) -> T {
        self.dr.one()
    }
}

impl<T, C> GroupCalculator<T> for MulGroupView<C>
where
    T: Clone,
    C: DivisionRingCalculator<T>,
{
    /// # Panics
    ///
    /// Panics if `x` is zero, which is outside the multiplicative group.
    fn inverse(&self, x: &T) -> T {
        self.dr
            .reciprocal(x)
            .expect("zero is not in the multiplicative group")
    }
}

/// A group calculator over `S` derived from one over `T` via a bijection.
///
/// `identity`, `apply`, `inverse`, `is_equal` and `gpow` are all
/// conjugated through the bijection, so every group law holding in the
/// base calculator holds in the derived one.
pub struct IsoGroup<C, B, T> {
    origin: C,
    bijection: B,
    _marker: PhantomData<fn() -> T>,
}

/// Builds the isomorphic image of a group calculator under a bijection.
pub fn isomorphism<T, S, C, B>(origin: C, bijection: B) -> IsoGroup<C, B, T>
where
    T: Clone,
    S: Clone,
    C: GroupCalculator<T>,
    B: Bijection<T, S>,
{
    IsoGroup {
        origin,
        bijection,
        _marker: PhantomData,
    }
}

impl<T, S, C, B> EqualPredicate<S> for IsoGroup<C, B, T>
where
    T: Clone,
    S: Clone,
    C: GroupCalculator<T>,
    B: Bijection<T, S>,
{
    fn is_equal(&self, x: &S, y: &S) -> bool {
        self.origin
            .is_equal(&self.bijection.backward(x), &self.bijection.backward(y))
    }
}

impl<T, S, C, B> SemigroupCalculator<S> for IsoGroup<C, B, T>
where
    T: Clone,
    S: Clone,
    C: GroupCalculator<T>,
    B: Bijection<T, S>,
{
    fn apply(&self, x: &S, y: &S) -> S {
        let t = self
            .origin
            .apply(&self.bijection.backward(x), &self.bijection.backward(y));
        self.bijection.forward(&t)
    }

    fn is_commutative(&self) -> bool {
        self.origin.is_commutative()
    }
}

impl<T, S, C, B> MonoidCalculator<S> for IsoGroup<C, B, T>
where
    T: Clone,
    S: Clone,
    C: GroupCalculator<T>,
    B: Bijection<T, S>,
{
    fn identity(&self) -> S {
        self.bijection.forward(&self.origin.identity())
    }
}

impl<T, S, C, B> GroupCalculator<S> for IsoGroup<C, B, T>
where
    T: Clone,
    S: Clone,
    C: GroupCalculator<T>,
    B: Bijection<T, S>,
{
    fn inverse(&self, x: &S) -> S {
        let t = self.origin.inverse(&self.bijection.backward(x));
        self.bijection.forward(&t)
    }

    fn gpow(&self, x: &S, n: i64) -> S {
        let t = self.origin.gpow(&self.bijection.backward(x), n);
        self.bijection.forward(&t)
    }
}

/// An [`OrderPredicate`](crate::OrderPredicate) backed by the element
/// type's native ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeOrder;

impl<T: Ord> EqualPredicate<T> for NativeOrder {
    fn is_equal(&self, x: &T, y: &T) -> bool {
        x == y
    }
}

impl<T: Ord> crate::OrderPredicate<T> for NativeOrder {
    fn compare(&self, x: &T, y: &T) -> Ordering {
        x.cmp(y)
    }
}
