//! The calculator over [`Multinomial`] values.
//!
//! [`MultinomialCalculator`] implements the ring and UFD calculator
//! traits plus the full [`RealCalculator`] contract. Transcendental
//! operations are exact or they fail: `sin(Pi/6)` evaluates to `1/2`,
//! `sin(x + 1)` fails with [`CalcError::Unsupported`], and nothing ever
//! degrades to a floating-point approximation.
//!
//! Trigonometric evaluation reduces a rational multiple of π into
//! `[0, π/2]` while tracking the sign, then consults process-wide lookup
//! tables keyed by the reduced fraction. The inverse tables are built
//! once from the forward tables at first use.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use operad_calc::{
    CalcError, CalcResult, EqualPredicate, OrderPredicate, RealCalculator, RingCalculator,
    UfdCalculator, UnitRingCalculator, STR_E, STR_I, STR_PI,
};
use operad_rational::{exact_nth_root, extract_square, ibig_to_i64, IBig, Rational};

use crate::multinomial::Multinomial;
use crate::term::{Term, CHAR_E, CHAR_I};

/// The exact symbolic calculator for [`Multinomial`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultinomialCalculator;

fn frac(n: i64, d: i64) -> Rational {
    Rational::from_i64(n, d)
}

/// Builds `(num/den) · √rad` as a multinomial.
fn sqrt_frac(num: i64, den: i64, rad: i64) -> Multinomial {
    Multinomial::monomial(Term::new(frac(num, den), IBig::from(rad), BTreeMap::new()))
}

/// Exact sine values on `[0, π/2]`, keyed by the angle as a reduced
/// fraction of π.
fn sin_table() -> Vec<(Rational, Multinomial)> {
    vec![
        (frac(0, 1), Multinomial::zero()),
        (frac(1, 12), sqrt_frac(1, 4, 6).subtract(&sqrt_frac(1, 4, 2))),
        (frac(1, 6), Multinomial::from_rational(frac(1, 2))),
        (frac(1, 4), sqrt_frac(1, 2, 2)),
        (frac(1, 3), sqrt_frac(1, 2, 3)),
        (frac(5, 12), sqrt_frac(1, 4, 6).add(&sqrt_frac(1, 4, 2))),
        (frac(1, 2), Multinomial::one()),
    ]
}

/// Exact tangent values on `[0, π/2)`.
fn tan_table() -> Vec<(Rational, Multinomial)> {
    vec![
        (frac(0, 1), Multinomial::zero()),
        (
            frac(1, 12),
            Multinomial::from_i64(2).subtract(&sqrt_frac(1, 1, 3)),
        ),
        (frac(1, 6), sqrt_frac(1, 3, 3)),
        (frac(1, 4), Multinomial::one()),
        (frac(1, 3), sqrt_frac(1, 1, 3)),
        (
            frac(5, 12),
            Multinomial::from_i64(2).add(&sqrt_frac(1, 1, 3)),
        ),
    ]
}

static SIN_VALUE: Lazy<HashMap<Rational, Multinomial>> =
    Lazy::new(|| sin_table().into_iter().collect());

static TAN_VALUE: Lazy<HashMap<Rational, Multinomial>> =
    Lazy::new(|| tan_table().into_iter().collect());

static ARCSIN_VALUE: Lazy<HashMap<Multinomial, Rational>> =
    Lazy::new(|| sin_table().into_iter().map(|(f, v)| (v, f)).collect());

static ARCTAN_VALUE: Lazy<HashMap<Multinomial, Rational>> =
    Lazy::new(|| tan_table().into_iter().map(|(f, v)| (v, f)).collect());

/// Extracts the argument of a trigonometric call as a fraction of π.
///
/// Zero maps to the zero fraction. A multi-term value is too complex; a
/// monomial that is not `f · Pi` with unit radicand has no exact value.
fn angle_fraction(x: &Multinomial, op: &str) -> CalcResult<Rational> {
    if x.is_zero() {
        return Ok(Rational::zero());
    }
    let t = x
        .as_monomial()
        .ok_or_else(|| CalcError::unsupported(format!("{op} of a multi-term value is too complex")))?;
    t.pi_fraction()
        .ok_or_else(|| CalcError::unsupported(format!("Can't calculate {op}")))
}

/// Evaluates `sin(f · π)` exactly.
///
/// The angle is normalized stepwise: negate odd symmetry, reduce modulo
/// 2π, fold `(π, 2π)` onto `(0, π)` flipping the sign, then reflect
/// `(π/2, π)` onto `(0, π/2)` without a flip.
fn sin_of_fraction(f: &Rational) -> CalcResult<Multinomial> {
    let mut flip = f.is_negative();
    let f = f.abs();
    let d = f.denominator();
    let mut n = f.numerator() % (IBig::from(2) * d.clone());
    if n > d {
        n -= d.clone();
        flip = !flip;
    }
    if n.clone() * IBig::from(2) > d {
        n = d.clone() - n;
    }
    let value = SIN_VALUE
        .get(&Rational::new(n, d))
        .ok_or_else(|| CalcError::unsupported("Can't calculate sin"))?;
    Ok(if flip { value.negate() } else { value.clone() })
}

/// Evaluates `tan(f · π)` exactly; period π, odd symmetry.
fn tan_of_fraction(f: &Rational) -> CalcResult<Multinomial> {
    let mut flip = f.is_negative();
    let f = f.abs();
    let d = f.denominator();
    let mut n = f.numerator() % d.clone();
    if n.clone() * IBig::from(2) > d {
        n = d.clone() - n;
        flip = !flip;
    }
    let key = Rational::new(n, d);
    if key == frac(1, 2) {
        return Err(CalcError::undefined("tan(Pi/2)"));
    }
    let value = TAN_VALUE
        .get(&key)
        .ok_or_else(|| CalcError::unsupported("Can't calculate tan"))?;
    Ok(if flip { value.negate() } else { value.clone() })
}

/// Reverse lookup in an inverse table, trying the negated argument under
/// odd symmetry before giving up.
fn inverse_lookup(
    table: &HashMap<Multinomial, Rational>,
    x: &Multinomial,
    op: &str,
) -> CalcResult<Multinomial> {
    if let Some(f) = table.get(x) {
        return Ok(Multinomial::monomial(Term::pi_multiple(f.clone())));
    }
    if let Some(f) = table.get(&x.negate()) {
        return Ok(Multinomial::monomial(Term::pi_multiple(-f.clone())));
    }
    Err(CalcError::unsupported(format!("Can't calculate {op}")))
}

impl MultinomialCalculator {
    /// Evaluates `cot(x)` exactly, via `cot(θ) = −tan(θ + π/2)`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Undefined`] at multiples of π;
    /// [`CalcError::Unsupported`] when no exact value is known.
    pub fn cot(&self, x: &Multinomial) -> CalcResult<Multinomial> {
        let f = angle_fraction(x, "cot")?;
        if f.is_integer() {
            return Err(CalcError::undefined("cot(0)"));
        }
        Ok(tan_of_fraction(&(f + frac(1, 2)))?.negate())
    }

    fn exact_divide_impl(&self, x: &Multinomial, y: &Multinomial) -> CalcResult<Multinomial> {
        if y.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        let (q, r) = x.divide_and_remainder(y);
        if r.is_zero() {
            Ok(q)
        } else {
            Err(CalcError::not_exact(x, y))
        }
    }
}

impl EqualPredicate<Multinomial> for MultinomialCalculator {
    fn is_equal(&self, x: &Multinomial, y: &Multinomial) -> bool {
        x == y
    }
}

impl OrderPredicate<Multinomial> for MultinomialCalculator {
    fn compare(&self, x: &Multinomial, y: &Multinomial) -> Ordering {
        x.cmp(y)
    }
}

impl RingCalculator<Multinomial> for MultinomialCalculator {
    fn zero(&self) -> Multinomial {
        Multinomial::zero()
    }

    fn add(&self, x: &Multinomial, y: &Multinomial) -> Multinomial {
        x.add(y)
    }

    fn negate(&self, x: &Multinomial) -> Multinomial {
        x.negate()
    }

    fn multiply(&self, x: &Multinomial, y: &Multinomial) -> Multinomial {
        x.multiply(y)
    }

    fn is_zero(&self, x: &Multinomial) -> bool {
        x.is_zero()
    }

    fn is_multiply_commutative(&self) -> bool {
        true
    }

    fn multiply_long(&self, x: &Multinomial, n: i64) -> Multinomial {
        x.scale(&Rational::from(n))
    }

    // single normalization pass over all terms
    fn sum(&self, xs: &[Multinomial]) -> Multinomial {
        let terms = xs.iter().flat_map(|m| m.terms().iter().cloned()).collect();
        Multinomial::from_terms(terms)
    }
}

impl UnitRingCalculator<Multinomial> for MultinomialCalculator {
    fn one(&self) -> Multinomial {
        Multinomial::one()
    }

    fn of_i64(&self, n: i64) -> Multinomial {
        Multinomial::from_i64(n)
    }
}

impl UfdCalculator<Multinomial> for MultinomialCalculator {
    /// A multinomial is invertible exactly when it is a non-zero
    /// monomial: single terms invert characterwise, sums do not.
    fn is_unit(&self, x: &Multinomial) -> bool {
        !x.is_zero() && x.is_monomial()
    }

    fn gcd(&self, a: &Multinomial, b: &Multinomial) -> Multinomial {
        a.gcd(b)
    }

    fn exact_divide(&self, x: &Multinomial, y: &Multinomial) -> CalcResult<Multinomial> {
        self.exact_divide_impl(x, y)
    }

    fn is_exact_divide(&self, a: &Multinomial, b: &Multinomial) -> bool {
        !b.is_zero() && a.divide_and_remainder(b).1.is_zero()
    }
}

impl RealCalculator<Multinomial> for MultinomialCalculator {
    fn is_comparable(&self) -> bool {
        true
    }

    fn zero(&self) -> CalcResult<Multinomial> {
        Ok(Multinomial::zero())
    }

    fn one(&self) -> CalcResult<Multinomial> {
        Ok(Multinomial::one())
    }

    fn is_equal(&self, x: &Multinomial, y: &Multinomial) -> CalcResult<bool> {
        Ok(x == y)
    }

    fn compare(&self, x: &Multinomial, y: &Multinomial) -> CalcResult<Ordering> {
        Ok(x.cmp(y))
    }

    fn is_zero(&self, x: &Multinomial) -> CalcResult<bool> {
        Ok(x.is_zero())
    }

    fn add(&self, x: &Multinomial, y: &Multinomial) -> CalcResult<Multinomial> {
        Ok(x.add(y))
    }

    fn sum(&self, xs: &[Multinomial]) -> CalcResult<Multinomial> {
        Ok(RingCalculator::sum(self, xs))
    }

    fn negate(&self, x: &Multinomial) -> CalcResult<Multinomial> {
        Ok(x.negate())
    }

    fn abs(&self, x: &Multinomial) -> CalcResult<Multinomial> {
        let q = x
            .to_rational()
            .ok_or_else(|| CalcError::unsupported("abs of a symbolic value"))?;
        Ok(Multinomial::from_rational(q.abs()))
    }

    fn subtract(&self, x: &Multinomial, y: &Multinomial) -> CalcResult<Multinomial> {
        Ok(x.subtract(y))
    }

    fn multiply(&self, x: &Multinomial, y: &Multinomial) -> CalcResult<Multinomial> {
        Ok(x.multiply(y))
    }

    fn product(&self, xs: &[Multinomial]) -> CalcResult<Multinomial> {
        Ok(xs.iter().fold(Multinomial::one(), |acc, x| acc.multiply(x)))
    }

    fn divide(&self, x: &Multinomial, y: &Multinomial) -> CalcResult<Multinomial> {
        if y.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        if let Some(t) = y.as_monomial() {
            return Ok(x.multiply_term(&t.reciprocal()));
        }
        self.exact_divide_impl(x, y)
    }

    fn reciprocal(&self, x: &Multinomial) -> CalcResult<Multinomial> {
        if x.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        let t = x
            .as_monomial()
            .ok_or_else(|| CalcError::unsupported("reciprocal of a multi-term value"))?;
        Ok(Multinomial::monomial(t.reciprocal()))
    }

    fn multiply_long(&self, x: &Multinomial, n: i64) -> CalcResult<Multinomial> {
        Ok(x.scale(&Rational::from(n)))
    }

    fn divide_long(&self, x: &Multinomial, n: i64) -> CalcResult<Multinomial> {
        if n == 0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(x.scale(&Rational::from(n).recip()))
    }

    fn pow(&self, x: &Multinomial, n: i64) -> CalcResult<Multinomial> {
        let m = u32::try_from(n.unsigned_abs())
            .map_err(|_| CalcError::invalid("exponent out of range"))?;
        if n >= 0 {
            Ok(x.pow(m))
        } else {
            Ok(RealCalculator::reciprocal(self, x)?.pow(m))
        }
    }

    fn square_root(&self, x: &Multinomial) -> CalcResult<Multinomial> {
        if x.is_zero() {
            return Ok(Multinomial::zero());
        }
        let t = x
            .as_monomial()
            .ok_or_else(|| CalcError::unsupported("square root of a multi-term value"))?;
        if *t.radical() != IBig::ONE {
            return Err(CalcError::unsupported("nested radical"));
        }
        let mut c = t.coefficient().clone();
        let imaginary = c.is_negative();
        if imaginary {
            c = -c;
        }
        // √(p/q) = √(p·q) / q keeps the radicand an integer
        let (outside, inside) = extract_square(&(c.numerator() * c.denominator()));
        let coefficient = Rational::new(outside, c.denominator());
        let half = frac(1, 2);
        let mut characters: BTreeMap<String, Rational> = t
            .characters()
            .iter()
            .map(|(name, e)| (name.clone(), e.clone() * half.clone()))
            .collect();
        if imaginary {
            let e = characters.remove(CHAR_I).unwrap_or_else(Rational::zero);
            characters.insert(CHAR_I.to_owned(), e + Rational::one());
        }
        Ok(Multinomial::monomial(Term::new(
            coefficient,
            inside,
            characters,
        )))
    }

    fn nroot(&self, x: &Multinomial, n: i64) -> CalcResult<Multinomial> {
        if n <= 0 {
            return Err(CalcError::invalid("root index must be positive"));
        }
        if n == 1 {
            return Ok(x.clone());
        }
        if n == 2 {
            return self.square_root(x);
        }
        if x.is_zero() {
            return Ok(Multinomial::zero());
        }
        let t = x
            .as_monomial()
            .ok_or_else(|| CalcError::unsupported("nroot of a multi-term value"))?;
        if *t.radical() != IBig::ONE {
            return Err(CalcError::unsupported("nroot of a radical"));
        }
        let k = u32::try_from(n).map_err(|_| CalcError::invalid("root index out of range"))?;
        let c = t.coefficient();
        let num = exact_nth_root(&c.numerator(), k)
            .ok_or_else(|| CalcError::unsupported("no exact root"))?;
        let den = exact_nth_root(&c.denominator(), k)
            .ok_or_else(|| CalcError::unsupported("no exact root"))?;
        let inv = Rational::from(i64::from(k)).recip();
        let characters = t
            .characters()
            .iter()
            .map(|(name, e)| (name.clone(), e.clone() * inv.clone()))
            .collect();
        Ok(Multinomial::monomial(Term::new(
            Rational::new(num, den),
            IBig::ONE,
            characters,
        )))
    }

    fn constant_value(&self, name: &str) -> Option<Multinomial> {
        match name {
            STR_PI => Some(Multinomial::pi()),
            STR_E => Some(Multinomial::natural_base()),
            STR_I => Some(Multinomial::imaginary_unit()),
            _ => None,
        }
    }

    fn exp_base(&self, a: &Multinomial, b: &Multinomial) -> CalcResult<Multinomial> {
        if b.is_zero() {
            if a.is_zero() {
                return Err(CalcError::undefined("0^0"));
            }
            return Ok(Multinomial::one());
        }
        if a.is_zero() {
            if matches!(b.to_rational(), Some(q) if q.is_negative()) {
                return Err(CalcError::DivisionByZero);
            }
            return Ok(Multinomial::zero());
        }
        if *a == Multinomial::natural_base() {
            return self.exp(b);
        }
        if let Some(q) = b.to_rational() {
            if let Some(n) = q.to_integer().as_ref().and_then(ibig_to_i64) {
                return RealCalculator::pow(self, a, n);
            }
            if q.denominator() == IBig::from(2) {
                let root = self.square_root(a)?;
                let n = ibig_to_i64(&q.numerator())
                    .ok_or_else(|| CalcError::invalid("exponent out of range"))?;
                return RealCalculator::pow(self, &root, n);
            }
            if let Some(t) = a.as_monomial() {
                if t.coefficient().is_one() && *t.radical() == IBig::ONE {
                    let characters = t
                        .characters()
                        .iter()
                        .map(|(name, e)| (name.clone(), e.clone() * q.clone()))
                        .collect();
                    return Ok(Multinomial::monomial(Term::new(
                        Rational::one(),
                        IBig::ONE,
                        characters,
                    )));
                }
            }
        }
        Err(CalcError::unsupported("exp with a symbolic exponent"))
    }

    fn exp(&self, x: &Multinomial) -> CalcResult<Multinomial> {
        if x.is_zero() {
            return Ok(Multinomial::one());
        }
        let q = x
            .to_rational()
            .ok_or_else(|| CalcError::unsupported("exp of a symbolic value"))?;
        Ok(Multinomial::monomial(Term::with_character(
            Rational::one(),
            CHAR_E,
            q,
        )))
    }

    fn ln(&self, x: &Multinomial) -> CalcResult<Multinomial> {
        if x.is_zero() {
            return Err(CalcError::undefined("ln(0)"));
        }
        if *x == Multinomial::one() {
            return Ok(Multinomial::zero());
        }
        let t = x
            .as_monomial()
            .ok_or_else(|| CalcError::unsupported("ln of a multi-term value"))?;
        if t.coefficient().is_one() && *t.radical() == IBig::ONE && t.characters().len() == 1 {
            if let Some(e) = t.characters().get(CHAR_E) {
                return Ok(Multinomial::from_rational(e.clone()));
            }
        }
        Err(CalcError::unsupported("ln of a symbolic value"))
    }

    fn sin(&self, x: &Multinomial) -> CalcResult<Multinomial> {
        sin_of_fraction(&angle_fraction(x, "sin")?)
    }

    fn cos(&self, x: &Multinomial) -> CalcResult<Multinomial> {
        // cos(θ) = sin(θ + π/2)
        sin_of_fraction(&(angle_fraction(x, "cos")? + frac(1, 2)))
    }

    fn tan(&self, x: &Multinomial) -> CalcResult<Multinomial> {
        tan_of_fraction(&angle_fraction(x, "tan")?)
    }

    fn arcsin(&self, x: &Multinomial) -> CalcResult<Multinomial> {
        if let Some(q) = x.to_rational() {
            if q.abs() > Rational::one() {
                return Err(CalcError::undefined("Arcsin undefined"));
            }
        }
        inverse_lookup(&ARCSIN_VALUE, x, "arcsin")
    }

    fn arctan(&self, x: &Multinomial) -> CalcResult<Multinomial> {
        inverse_lookup(&ARCTAN_VALUE, x, "arctan")
    }

    fn of_i64(&self, n: i64) -> CalcResult<Multinomial> {
        Ok(Multinomial::from_i64(n))
    }

    fn of_rational(&self, x: &Rational) -> CalcResult<Multinomial> {
        Ok(Multinomial::from_rational(x.clone()))
    }
}
