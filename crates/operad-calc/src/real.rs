//! The rich real-number calculator contract.
//!
//! [`RealCalculator`] extends the algebraic hierarchy with transcendental
//! operations. Every operation is fallible: a calculator for a restricted
//! number type simply leaves the operations it cannot support at their
//! default, which fails with [`CalcError::Unsupported`]. The derivable
//! operations default to exact formulas in terms of the others and may be
//! overridden per type for numerical accuracy or symbolic exactness.
//!
//! A calculator naturally deals with numbers, but it is not required that
//! every operation succeeds for every input; a symbolic calculator that
//! cannot evaluate `sin` of a complex expression fails loudly rather than
//! degrading to an approximation.

use std::cmp::Ordering;
use std::marker::PhantomData;

use operad_rational::{ibig_to_i64, Rational};

use crate::error::{CalcError, CalcResult};

/// The name of the circle constant π.
pub const STR_PI: &str = "Pi";
/// The name of the base of the natural logarithm.
pub const STR_E: &str = "e";
/// The name of the imaginary unit, the square root of `-1`.
pub const STR_I: &str = "i";

/// A calculator for real numbers or their generalization.
///
/// Only one instance should be created per number type and passed through
/// the whole calculation; math objects holding different calculator
/// instances for the same nominal type is a programming error.
pub trait RealCalculator<T: Clone> {
    /// Whether [`RealCalculator::compare`] is available.
    fn is_comparable(&self) -> bool {
        false
    }

    /// Returns the value zero.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if this calculator has no zero.
    fn zero(&self) -> CalcResult<T> {
        Err(CalcError::unsupported("zero"))
    }

    /// Returns the value one, equal to `divide(t, t)` for any non-zero `t`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if this calculator has no one.
    fn one(&self) -> CalcResult<T> {
        Err(CalcError::unsupported("one"))
    }

    /// Determines whether the two values are equal.
    ///
    /// Every concrete calculator should implement this.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if not implemented.
    fn is_equal(&self, x: &T, y: &T) -> CalcResult<bool> {
        let _ = (x, y);
        Err(CalcError::unsupported("is_equal"))
    }

    /// Compares two values.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if this calculator is not comparable.
    fn compare(&self, x: &T, y: &T) -> CalcResult<Ordering> {
        let _ = (x, y);
        Err(CalcError::unsupported("compare"))
    }

    /// Determines whether `x` is zero.
    ///
    /// # Errors
    ///
    /// Propagates from [`RealCalculator::zero`] and
    /// [`RealCalculator::is_equal`].
    fn is_zero(&self, x: &T) -> CalcResult<bool> {
        self.is_equal(x, &self.zero()?)
    }

    /// Computes `x + y`. Must be commutative.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if not implemented.
    fn add(&self, x: &T, y: &T) -> CalcResult<T> {
        let _ = (x, y);
        Err(CalcError::unsupported("add"))
    }

    /// Sums a list of values, starting from zero.
    ///
    /// # Errors
    ///
    /// Propagates from the underlying operations.
    fn sum(&self, xs: &[T]) -> CalcResult<T> {
        let mut acc = self.zero()?;
        for x in xs {
            acc = self.add(&acc, x)?;
        }
        Ok(acc)
    }

    /// Returns `-x`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if not implemented.
    fn negate(&self, x: &T) -> CalcResult<T> {
        let _ = x;
        Err(CalcError::unsupported("negate"))
    }

    /// Returns `|x|`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if not implemented.
    fn abs(&self, x: &T) -> CalcResult<T> {
        let _ = x;
        Err(CalcError::unsupported("abs"))
    }

    /// Computes `x - y`, equal to `add(x, negate(y))`.
    ///
    /// # Errors
    ///
    /// Propagates from the underlying operations.
    fn subtract(&self, x: &T, y: &T) -> CalcResult<T> {
        let n = self.negate(y)?;
        self.add(x, &n)
    }

    /// Computes `x * y`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if not implemented.
    fn multiply(&self, x: &T, y: &T) -> CalcResult<T> {
        let _ = (x, y);
        Err(CalcError::unsupported("multiply"))
    }

    /// Multiplies a list of values, starting from one.
    ///
    /// # Errors
    ///
    /// Propagates from the underlying operations.
    fn product(&self, xs: &[T]) -> CalcResult<T> {
        let mut acc = self.one()?;
        for x in xs {
            acc = self.multiply(&acc, x)?;
        }
        Ok(acc)
    }

    /// Computes `x / y`, equal to `multiply(x, reciprocal(y))`.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] if `y` is zero; otherwise propagates.
    fn divide(&self, x: &T, y: &T) -> CalcResult<T> {
        let r = self.reciprocal(y)?;
        self.multiply(x, &r)
    }

    /// Returns `1 / x`, equal to `divide(one, x)`.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] if `x` is zero;
    /// [`CalcError::Unsupported`] if not implemented.
    fn reciprocal(&self, x: &T) -> CalcResult<T> {
        let _ = x;
        Err(CalcError::unsupported("reciprocal"))
    }

    /// Computes `x * n` for an integer `n`, by doubling.
    ///
    /// # Errors
    ///
    /// Propagates from the underlying operations.
    fn multiply_long(&self, x: &T, n: i64) -> CalcResult<T> {
        let mut base = if n < 0 { self.negate(x)? } else { x.clone() };
        let mut result = self.zero()?;
        let mut m = n.unsigned_abs();
        while m > 0 {
            if m & 1 == 1 {
                result = self.add(&result, &base)?;
            }
            base = self.add(&base, &base)?;
            m >>= 1;
        }
        Ok(result)
    }

    /// Computes `x / n`, equal to `divide(x, multiply_long(one, n))`.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] if `n == 0`; otherwise propagates.
    fn divide_long(&self, x: &T, n: i64) -> CalcResult<T> {
        if n == 0 {
            return Err(CalcError::DivisionByZero);
        }
        let d = self.multiply_long(&self.one()?, n)?;
        self.divide(x, &d)
    }

    /// Computes `x ^ n`; `pow(x, 0) == one`, negative exponents divide.
    ///
    /// # Errors
    ///
    /// Propagates from the underlying operations.
    fn pow(&self, x: &T, n: i64) -> CalcResult<T> {
        let mut base = if n < 0 { self.reciprocal(x)? } else { x.clone() };
        let mut result = self.one()?;
        let mut m = n.unsigned_abs();
        while m > 0 {
            if m & 1 == 1 {
                result = self.multiply(&result, &base)?;
            }
            base = self.multiply(&base, &base)?;
            m >>= 1;
        }
        Ok(result)
    }

    /// Returns the positive square root of `x`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if not implemented.
    fn square_root(&self, x: &T) -> CalcResult<T> {
        let _ = x;
        Err(CalcError::unsupported("square_root"))
    }

    /// Returns the `n`-th root of `x`, positive when `n` is even.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if not implemented.
    fn nroot(&self, x: &T, n: i64) -> CalcResult<T> {
        let _ = (x, n);
        Err(CalcError::unsupported("nroot"))
    }

    /// Returns the named constant, or `None` when this calculator does not
    /// know it. Recognized names are [`STR_PI`], [`STR_E`] and [`STR_I`].
    fn constant_value(&self, name: &str) -> Option<T> {
        let _ = name;
        None
    }

    /// Computes `a ^ b`, equal to `exp(multiply(ln(a), b))`.
    ///
    /// # Errors
    ///
    /// Propagates from the underlying operations.
    fn exp_base(&self, a: &T, b: &T) -> CalcResult<T> {
        let l = self.ln(a)?;
        let p = self.multiply(&l, b)?;
        self.exp(&p)
    }

    /// Computes `e ^ x`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if not implemented.
    fn exp(&self, x: &T) -> CalcResult<T> {
        let _ = x;
        Err(CalcError::unsupported("exp"))
    }

    /// Computes `log(a, b) = ln(b) / ln(a)`.
    ///
    /// # Errors
    ///
    /// Propagates from the underlying operations.
    fn log(&self, a: &T, b: &T) -> CalcResult<T> {
        let n = self.ln(b)?;
        let d = self.ln(a)?;
        self.divide(&n, &d)
    }

    /// Computes the natural logarithm of `x`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if not implemented.
    fn ln(&self, x: &T) -> CalcResult<T> {
        let _ = x;
        Err(CalcError::unsupported("ln"))
    }

    /// Computes `sin(x)`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if not implemented.
    fn sin(&self, x: &T) -> CalcResult<T> {
        let _ = x;
        Err(CalcError::unsupported("sin"))
    }

    /// Computes `cos(x)`, defaulting to `sqrt(1 - x²)`.
    ///
    /// The default is valid only when `x` is the sine of a value in range;
    /// calculators needing a true cosine must override.
    ///
    /// # Errors
    ///
    /// Propagates from the underlying operations.
    fn cos(&self, x: &T) -> CalcResult<T> {
        let sq = self.multiply(x, x)?;
        let d = self.subtract(&self.one()?, &sq)?;
        self.square_root(&d)
    }

    /// Computes `tan(x)`, defaulting to `sin(x) / cos(x)`.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] at singularities; otherwise
    /// propagates.
    fn tan(&self, x: &T) -> CalcResult<T> {
        let s = self.sin(x)?;
        let c = self.cos(x)?;
        self.divide(&s, &c)
    }

    /// Computes `arcsin(x)`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if not implemented;
    /// [`CalcError::Undefined`] outside `[-1, 1]`.
    fn arcsin(&self, x: &T) -> CalcResult<T> {
        let _ = x;
        Err(CalcError::unsupported("arcsin"))
    }

    /// Computes `arccos(x)`, defaulting to `π/2 − arcsin(x)`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if the calculator does not know π;
    /// otherwise propagates.
    fn arccos(&self, x: &T) -> CalcResult<T> {
        let pi = self
            .constant_value(STR_PI)
            .ok_or_else(|| CalcError::unsupported(STR_PI))?;
        let half_pi = self.divide_long(&pi, 2)?;
        let a = self.arcsin(x)?;
        self.subtract(&half_pi, &a)
    }

    /// Computes `arctan(x)`, defaulting to
    /// `arcsin(x / sqrt(1 + x²))`.
    ///
    /// # Errors
    ///
    /// Propagates from the underlying operations.
    fn arctan(&self, x: &T) -> CalcResult<T> {
        let sq = self.multiply(x, x)?;
        let s = self.add(&self.one()?, &sq)?;
        let r = self.square_root(&s)?;
        let q = self.divide(x, &r)?;
        self.arcsin(&q)
    }

    /// Returns the value representing the integer `n`.
    ///
    /// # Errors
    ///
    /// Propagates from the underlying operations.
    fn of_i64(&self, n: i64) -> CalcResult<T> {
        self.multiply_long(&self.one()?, n)
    }

    /// Returns the value representing the rational `x`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Unsupported`] if `x` does not fit the machine-integer
    /// fast path; otherwise propagates.
    fn of_rational(&self, x: &Rational) -> CalcResult<T> {
        use num_traits::Zero;
        if x.is_zero() {
            return self.zero();
        }
        let num = ibig_to_i64(&x.numerator())
            .ok_or_else(|| CalcError::unsupported("rational numerator out of i64 range"))?;
        let den = ibig_to_i64(&x.denominator())
            .ok_or_else(|| CalcError::unsupported("rational denominator out of i64 range"))?;
        let mut re = self.of_i64(num)?;
        if den != 1 {
            re = self.divide_long(&re, den)?;
        }
        Ok(re)
    }
}

/// A bijection between two element types, used to transport a calculator
/// from one type to another by conjugation.
pub trait Bijection<T, S> {
    /// Maps forward, `T → S`.
    fn forward(&self, x: &T) -> S;

    /// Maps backward, `S → T`. Must invert [`Bijection::forward`].
    fn backward(&self, y: &S) -> T;
}

/// The identity bijection. Mapping a calculator through it reproduces the
/// base calculator's behavior exactly, for every operation including
/// constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityBijection;

impl<T: Clone> Bijection<T, T> for IdentityBijection {
    fn forward(&self, x: &T) -> T {
        x.clone()
    }

    fn backward(&self, y: &T) -> T {
        y.clone()
    }
}

/// A bijection built from a pair of closures.
pub struct FnBijection<F, G> {
    forward: F,
    backward: G,
}

impl<F, G> FnBijection<F, G> {
    /// Creates a bijection from `forward` and its inverse `backward`.
    pub fn new(forward: F, backward: G) -> Self {
        Self { forward, backward }
    }
}

impl<T, S, F, G> Bijection<T, S> for FnBijection<F, G>
where
    F: Fn(&T) -> S,
    G: Fn(&S) -> T,
{
    fn forward(&self, x: &T) -> S {
        (self.forward)(x)
    }

    fn backward(&self, y: &S) -> T {
        (self.backward)(y)
    }
}

/// A calculator over `S` derived from a calculator over `T` by conjugating
/// every operation through a bijection `T ↔ S`.
pub struct MappedCalculator<C, B, T> {
    base: C,
    bijection: B,
    _marker: PhantomData<fn() -> T>,
}

/// Builds a [`RealCalculator`] over `S` from `base` and a bijection.
///
/// Every operation is computed as `f(op(f⁻¹(x), f⁻¹(y)))`; mapping through
/// [`IdentityBijection`] reproduces `base` exactly.
pub fn mapped_calculator<T, S, C, B>(base: C, bijection: B) -> MappedCalculator<C, B, T>
where
    T: Clone,
    S: Clone,
    C: RealCalculator<T>,
    B: Bijection<T, S>,
{
    MappedCalculator {
        base,
        bijection,
        _marker: PhantomData,
    }
}

impl<T, S, C, B> RealCalculator<S> for MappedCalculator<C, B, T>
where
    T: Clone,
    S: Clone,
    C: RealCalculator<T>,
    B: Bijection<T, S>,
{
    fn is_comparable(&self) -> bool {
        self.base.is_comparable()
    }

    fn zero(&self) -> CalcResult<S> {
        Ok(self.bijection.forward(&self.base.zero()?))
    }

    fn one(&self) -> CalcResult<S> {
        Ok(self.bijection.forward(&self.base.one()?))
    }

    fn is_equal(&self, x: &S, y: &S) -> CalcResult<bool> {
        self.base
            .is_equal(&self.bijection.backward(x), &self.bijection.backward(y))
    }

    fn compare(&self, x: &S, y: &S) -> CalcResult<Ordering> {
        self.base
            .compare(&self.bijection.backward(x), &self.bijection.backward(y))
    }

    fn is_zero(&self, x: &S) -> CalcResult<bool> {
        self.base.is_zero(&self.bijection.backward(x))
    }

    fn add(&self, x: &S, y: &S) -> CalcResult<S> {
        let t = self
            .base
            .add(&self.bijection.backward(x), &self.bijection.backward(y))?;
        Ok(self.bijection.forward(&t))
    }

    fn negate(&self, x: &S) -> CalcResult<S> {
        let t = self.base.negate(&self.bijection.backward(x))?;
        Ok(self.bijection.forward(&t))
    }

    fn abs(&self, x: &S) -> CalcResult<S> {
        let t = self.base.abs(&self.bijection.backward(x))?;
        Ok(self.bijection.forward(&t))
    }

    fn subtract(&self, x: &S, y: &S) -> CalcResult<S> {
        let t = self
            .base
            .subtract(&self.bijection.backward(x), &self.bijection.backward(y))?;
        Ok(self.bijection.forward(&t))
    }

    fn multiply(&self, x: &S, y: &S) -> CalcResult<S> {
        let t = self
            .base
            .multiply(&self.bijection.backward(x), &self.bijection.backward(y))?;
        Ok(self.bijection.forward(&t))
    }

    fn divide(&self, x: &S, y: &S) -> CalcResult<S> {
        let t = self
            .base
            .divide(&self.bijection.backward(x), &self.bijection.backward(y))?;
        Ok(self.bijection.forward(&t))
    }

    fn reciprocal(&self, x: &S) -> CalcResult<S> {
        let t = self.base.reciprocal(&self.bijection.backward(x))?;
        Ok(self.bijection.forward(&t))
    }

    fn multiply_long(&self, x: &S, n: i64) -> CalcResult<S> {
        let t = self.base.multiply_long(&self.bijection.backward(x), n)?;
        Ok(self.bijection.forward(&t))
    }

    fn divide_long(&self, x: &S, n: i64) -> CalcResult<S> {
        let t = self.base.divide_long(&self.bijection.backward(x), n)?;
        Ok(self.bijection.forward(&t))
    }

    fn pow(&self, x: &S, n: i64) -> CalcResult<S> {
        let t = self.base.pow(&self.bijection.backward(x), n)?;
        Ok(self.bijection.forward(&t))
    }

    fn square_root(&self, x: &S) -> CalcResult<S> {
        let t = self.base.square_root(&self.bijection.backward(x))?;
        Ok(self.bijection.forward(&t))
    }

    fn nroot(&self, x: &S, n: i64) -> CalcResult<S> {
        let t = self.base.nroot(&self.bijection.backward(x), n)?;
        Ok(self.bijection.forward(&t))
    }

    fn constant_value(&self, name: &str) -> Option<S> {
        self.base
            .constant_value(name)
            .map(|t| self.bijection.forward(&t))
    }

    fn exp_base(&self, a: &S, b: &S) -> CalcResult<S> {
        let t = self
            .base
            .exp_base(&self.bijection.backward(a), &self.bijection.backward(b))?;
        Ok(self.bijection.forward(&t))
    }

    fn exp(&self, x: &S) -> CalcResult<S> {
        let t = self.base.exp(&self.bijection.backward(x))?;
        Ok(self.bijection.forward(&t))
    }

    fn log(&self, a: &S, b: &S) -> CalcResult<S> {
        let t = self
            .base
            .log(&self.bijection.backward(a), &self.bijection.backward(b))?;
        Ok(self.bijection.forward(&t))
    }

    fn ln(&self, x: &S) -> CalcResult<S> {
        let t = self.base.ln(&self.bijection.backward(x))?;
        Ok(self.bijection.forward(&t))
    }

    fn sin(&self, x: &S) -> CalcResult<S> {
        let t = self.base.sin(&self.bijection.backward(x))?;
        Ok(self.bijection.forward(&t))
    }

    fn cos(&self, x: &S) -> CalcResult<S> {
        let t = self.base.cos(&self.bijection.backward(x))?;
        Ok(self.bijection.forward(&t))
    }

    fn tan(&self, x: &S) -> CalcResult<S> {
        let t = self.base.tan(&self.bijection.backward(x))?;
        Ok(self.bijection.forward(&t))
    }

    fn arcsin(&self, x: &S) -> CalcResult<S> {
        let t = self.base.arcsin(&self.bijection.backward(x))?;
        Ok(self.bijection.forward(&t))
    }

    fn arccos(&self, x: &S) -> CalcResult<S> {
        let t = self.base.arccos(&self.bijection.backward(x))?;
        Ok(self.bijection.forward(&t))
    }

    fn arctan(&self, x: &S) -> CalcResult<S> {
        let t = self.base.arctan(&self.bijection.backward(x))?;
        Ok(self.bijection.forward(&t))
    }

    fn of_i64(&self, n: i64) -> CalcResult<S> {
        Ok(self.bijection.forward(&self.base.of_i64(n)?))
    }

    fn of_rational(&self, x: &Rational) -> CalcResult<S> {
        Ok(self.bijection.forward(&self.base.of_rational(x)?))
    }
}
