//! The symbolic multinomial value type.
//!
//! A [`Multinomial`] is an additive combination of [`Term`]s, kept in a
//! canonical form: terms are sorted by their symbolic part, terms with the
//! same symbolic part are merged by adding coefficients, and zero terms
//! are never stored. The zero value holds no terms at all. Equality is
//! structural equality of the canonical form.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use operad_rational::{integer_gcd, IBig, Rational};

use crate::term::Term;

/// An immutable symbolic value: a sum of monomial terms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Multinomial {
    terms: Vec<Term>,
}

impl Multinomial {
    /// The zero value, holding no terms.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// The value one.
    #[must_use]
    pub fn one() -> Self {
        Self::monomial(Term::one())
    }

    /// The constant π as a monomial.
    #[must_use]
    pub fn pi() -> Self {
        Self::monomial(Term::pi_multiple(Rational::one()))
    }

    /// The base of the natural logarithm as a monomial.
    #[must_use]
    pub fn natural_base() -> Self {
        Self::monomial(Term::character(crate::term::CHAR_E))
    }

    /// The imaginary unit as a monomial.
    #[must_use]
    pub fn imaginary_unit() -> Self {
        Self::monomial(Term::character(crate::term::CHAR_I))
    }

    /// A multinomial holding a single term.
    #[must_use]
    pub fn monomial(t: Term) -> Self {
        if t.is_zero() {
            return Self::zero();
        }
        Self { terms: vec![t] }
    }

    /// A constant integer value.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        Self::monomial(Term::integer(n))
    }

    /// A constant rational value.
    #[must_use]
    pub fn from_rational(x: Rational) -> Self {
        Self::monomial(Term::constant(x))
    }

    /// The single character `name`.
    #[must_use]
    pub fn character(name: &str) -> Self {
        Self::monomial(Term::character(name))
    }

    /// Builds a multinomial from arbitrary terms, normalizing: sorting,
    /// merging terms with equal symbolic parts and dropping zeros.
    #[must_use]
    pub fn from_terms(terms: Vec<Term>) -> Self {
        Self {
            terms: normalize(terms),
        }
    }

    /// The terms in canonical order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Whether this is the zero value.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether this value holds exactly one term.
    #[must_use]
    pub fn is_monomial(&self) -> bool {
        self.terms.len() == 1
    }

    /// The single term, when [`Multinomial::is_monomial`].
    #[must_use]
    pub fn as_monomial(&self) -> Option<&Term> {
        if self.terms.len() == 1 {
            self.terms.first()
        } else {
            None
        }
    }

    /// The value as an exact rational, when it is a rational constant.
    /// Zero yields `Some(0)`.
    #[must_use]
    pub fn to_rational(&self) -> Option<Rational> {
        if self.is_zero() {
            return Some(Rational::zero());
        }
        self.as_monomial().and_then(Term::to_rational)
    }

    /// Adds two multinomials, merging terms with equal symbolic parts.
    #[must_use]
    pub fn add(&self, y: &Self) -> Self {
        let mut terms = self.terms.clone();
        terms.extend_from_slice(&y.terms);
        Self::from_terms(terms)
    }

    /// Returns `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            terms: self.terms.iter().map(Term::negate).collect(),
        }
    }

    /// Subtracts `y` from `self`.
    #[must_use]
    pub fn subtract(&self, y: &Self) -> Self {
        self.add(&y.negate())
    }

    /// Multiplies two multinomials term by term.
    #[must_use]
    pub fn multiply(&self, y: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() * y.terms.len());
        for a in &self.terms {
            for b in &y.terms {
                terms.push(a.multiply(b));
            }
        }
        Self::from_terms(terms)
    }

    /// Multiplies by a single term.
    #[must_use]
    pub fn multiply_term(&self, t: &Term) -> Self {
        if t.is_zero() {
            return Self::zero();
        }
        Self::from_terms(self.terms.iter().map(|a| a.multiply(t)).collect())
    }

    /// Scales every coefficient by `k`.
    #[must_use]
    pub fn scale(&self, k: &Rational) -> Self {
        if k.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self.terms.iter().map(|t| t.scale(k)).collect(),
        }
    }

    /// Raises this value to a non-negative power; `pow(0)` is one.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        if let Some(t) = self.as_monomial() {
            return Self::monomial(t.pow(n));
        }
        let mut result = Self::one();
        let mut base = self.clone();
        let mut m = n;
        while m > 0 {
            if m & 1 == 1 {
                result = result.multiply(&base);
            }
            base = base.multiply(&base);
            m >>= 1;
        }
        result
    }

    /// Whether every term has non-negative integer character exponents,
    /// the precondition for multi-term long division.
    #[must_use]
    pub fn is_polynomial_form(&self) -> bool {
        self.terms.iter().all(|t| {
            t.characters()
                .values()
                .all(|e| e.is_integer() && !e.is_negative())
        })
    }

    /// Divides by `divisor`, returning `(quotient, remainder)`.
    ///
    /// A monomial divisor divides exactly, term by term. A multi-term
    /// divisor uses long division under a graded order on character
    /// exponents; it requires both operands in polynomial form (and a
    /// divisor with a unique leading term), otherwise the whole dividend
    /// is returned as the remainder.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn divide_and_remainder(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "division by the zero multinomial");
        if let Some(d) = divisor.as_monomial() {
            let inv = d.reciprocal();
            return (self.multiply_term(&inv), Self::zero());
        }
        if !self.is_polynomial_form() || !divisor.is_polynomial_form() {
            return (Self::zero(), self.clone());
        }
        let Some(dlead) = unique_leading_term(divisor) else {
            return (Self::zero(), self.clone());
        };
        let mut quotient: Vec<Term> = Vec::new();
        let mut remainder: Vec<Term> = Vec::new();
        let mut work = self.clone();
        while !work.is_zero() {
            let lead = leading_term(&work).clone();
            if lead.char_exponents_cover(dlead) {
                let q = lead.divide(dlead);
                work = work.subtract(&divisor.multiply_term(&q));
                quotient.push(q);
            } else {
                work = work.subtract(&Self::monomial(lead.clone()));
                remainder.push(lead);
            }
        }
        (Self::from_terms(quotient), Self::from_terms(remainder))
    }

    /// A common divisor of `self` and `y` with no common non-unit factor
    /// left over: exact Euclidean gcd in the univariate case, the common
    /// monomial factor otherwise.
    #[must_use]
    pub fn gcd(&self, y: &Self) -> Self {
        if self.is_zero() {
            return y.clone();
        }
        if y.is_zero() {
            return self.clone();
        }
        if let (Some(a), Some(b)) = (self.as_monomial(), y.as_monomial()) {
            return Self::monomial(term_gcd(a, b));
        }
        let common = common_term_factor(self, y);
        let a = self.multiply_term(&common.reciprocal());
        let b = y.multiply_term(&common.reciprocal());
        if let Some(g) = univariate_gcd(&a, &b) {
            g.multiply_term(&common)
        } else {
            Self::monomial(common)
        }
    }
}

fn normalize(mut terms: Vec<Term>) -> Vec<Term> {
    terms.retain(|t| !t.is_zero());
    terms.sort_by(Term::symbol_cmp);
    let mut out: Vec<Term> = Vec::with_capacity(terms.len());
    for t in terms {
        match out.last() {
            Some(last) if last.same_symbol(&t) => {
                let c = last.coefficient().clone() + t.coefficient().clone();
                let merged = last.with_coefficient(c);
                out.pop();
                if !merged.is_zero() {
                    out.push(merged);
                }
            }
            _ => out.push(t),
        }
    }
    out
}

/// Graded order on character exponents: total degree first, then the
/// exponents variable by variable in name order. Compatible with
/// multiplication, which long-division termination relies on.
fn monomial_cmp(a: &Term, b: &Term) -> Ordering {
    match a.total_degree().cmp(&b.total_degree()) {
        Ordering::Equal => {}
        o => return o,
    }
    let names: BTreeSet<&String> = a.characters().keys().chain(b.characters().keys()).collect();
    for name in names {
        match a.exponent_of(name).cmp(&b.exponent_of(name)) {
            Ordering::Equal => {}
            o => return o,
        }
    }
    Ordering::Equal
}

fn leading_term(m: &Multinomial) -> &Term {
    m.terms()
        .iter()
        .max_by(|a, b| monomial_cmp(a, b).then_with(|| a.radical().cmp(b.radical())))
        .expect("leading term of a non-zero multinomial")
}

/// The leading term of `m`, but only when no other term shares its
/// character exponents; ties (same characters, different radicals) make
/// long division unsound.
fn unique_leading_term(m: &Multinomial) -> Option<&Term> {
    let lead = leading_term(m);
    let tied = m
        .terms()
        .iter()
        .filter(|t| monomial_cmp(t, lead) == Ordering::Equal)
        .count();
    if tied == 1 {
        Some(lead)
    } else {
        None
    }
}

fn term_gcd(a: &Term, b: &Term) -> Term {
    let coefficient = a.coefficient().gcd(b.coefficient());
    let radical = integer_gcd(a.radical(), b.radical());
    let characters = a
        .characters()
        .iter()
        .filter_map(|(name, e)| {
            let eb = b.exponent_of(name);
            let min = e.clone().min(eb);
            if min.is_zero() || min.is_negative() {
                None
            } else {
                Some((name.clone(), min))
            }
        })
        .collect();
    Term::new(coefficient, radical, characters)
}

/// The largest single term dividing every term of both multinomials.
fn common_term_factor(a: &Multinomial, b: &Multinomial) -> Term {
    let mut terms = a.terms().iter().chain(b.terms().iter());
    let first = terms.next().expect("non-zero multinomial").clone();
    let mut acc = first.with_coefficient(first.coefficient().abs());
    for t in terms {
        acc = term_gcd(&acc, t);
    }
    acc
}

/// Euclidean gcd for two univariate polynomials over the rationals in the
/// same character, normalized monic. `None` when the operands are not of
/// that shape.
fn univariate_gcd(a: &Multinomial, b: &Multinomial) -> Option<Multinomial> {
    let var = single_variable(a)?;
    if single_variable(b)? != var {
        return None;
    }
    let mut x = a.clone();
    let mut y = b.clone();
    while !y.is_zero() {
        let (_, r) = x.divide_and_remainder(&y);
        x = y;
        y = r;
    }
    // normalize to a monic representative
    let lead = leading_term(&x).coefficient().clone();
    Some(x.multiply_term(&Term::constant(lead.recip())))
}

/// When `m` is a radical-free polynomial in exactly one character with
/// non-negative integer exponents, returns that character.
fn single_variable(m: &Multinomial) -> Option<String> {
    if !m.is_polynomial_form() {
        return None;
    }
    let mut var: Option<String> = None;
    for t in m.terms() {
        if *t.radical() != IBig::ONE {
            return None;
        }
        for name in t.characters().keys() {
            match &var {
                None => var = Some(name.clone()),
                Some(v) if v == name => {}
                Some(_) => return None,
            }
        }
    }
    var
}

impl Add for &Multinomial {
    type Output = Multinomial;

    fn add(self, rhs: Self) -> Multinomial {
        Multinomial::add(self, rhs)
    }
}

impl Sub for &Multinomial {
    type Output = Multinomial;

    fn sub(self, rhs: Self) -> Multinomial {
        self.subtract(rhs)
    }
}

impl Mul for &Multinomial {
    type Output = Multinomial;

    fn mul(self, rhs: Self) -> Multinomial {
        self.multiply(rhs)
    }
}

impl Neg for &Multinomial {
    type Output = Multinomial;

    fn neg(self) -> Multinomial {
        self.negate()
    }
}

impl Add for Multinomial {
    type Output = Multinomial;

    fn add(self, rhs: Self) -> Multinomial {
        Multinomial::add(&self, &rhs)
    }
}

impl Sub for Multinomial {
    type Output = Multinomial;

    fn sub(self, rhs: Self) -> Multinomial {
        self.subtract(&rhs)
    }
}

impl Mul for Multinomial {
    type Output = Multinomial;

    fn mul(self, rhs: Self) -> Multinomial {
        self.multiply(&rhs)
    }
}

impl Neg for Multinomial {
    type Output = Multinomial;

    fn neg(self) -> Multinomial {
        self.negate()
    }
}

impl fmt::Display for Multinomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.terms.split_first() else {
            return write!(f, "0");
        };
        write!(f, "{first}")?;
        for t in rest {
            if t.coefficient().is_negative() {
                write!(f, " - {}", t.negate())?;
            } else {
                write!(f, " + {t}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    fn x() -> Multinomial {
        Multinomial::character("x")
    }

    #[test]
    fn addition_merges_and_cancels() {
        let a = (&x()).add(&Multinomial::from_i64(1));
        let b = (&x().negate()).add(&Multinomial::from_i64(2));
        let s = (&a).add(&b);
        assert_eq!(s, Multinomial::from_i64(3));
        assert!(a.subtract(&a).is_zero());
    }

    #[test]
    fn radical_terms_do_not_merge() {
        let s2 = Multinomial::monomial(Term::new(r(1, 1), IBig::from(2), Default::default()));
        let s3 = Multinomial::monomial(Term::new(r(1, 1), IBig::from(3), Default::default()));
        let s = (&s2).add(&s3);
        assert_eq!(s.terms().len(), 2);
        assert!(!s.is_monomial());
    }

    #[test]
    fn multiplication_expands() {
        // (x + 1)(x - 1) = x² - 1
        let p = (&x()).add(&Multinomial::from_i64(1));
        let q = x().subtract(&Multinomial::from_i64(1));
        let expected = Multinomial::from_terms(vec![
            Term::with_character(r(1, 1), "x", r(2, 1)),
            Term::integer(-1),
        ]);
        assert_eq!(p.multiply(&q), expected);
    }

    #[test]
    fn pow_of_binomial() {
        // (x + 1)² = x² + 2x + 1
        let p = (&x()).add(&Multinomial::from_i64(1)).pow(2);
        let expected = Multinomial::from_terms(vec![
            Term::with_character(r(1, 1), "x", r(2, 1)),
            Term::with_character(r(2, 1), "x", r(1, 1)),
            Term::integer(1),
        ]);
        assert_eq!(p, expected);
    }

    #[test]
    fn division_by_monomial_is_exact() {
        let p = (&x().pow(2)).add(&x());
        let (q, rem) = p.divide_and_remainder(&x());
        assert!(rem.is_zero());
        assert_eq!(q, (&x()).add(&Multinomial::from_i64(1)));
    }

    #[test]
    fn long_division_with_remainder() {
        // (x² + 2x + 3) / (x + 1) = x + 1 rem 2
        let p = Multinomial::from_terms(vec![
            Term::with_character(r(1, 1), "x", r(2, 1)),
            Term::with_character(r(2, 1), "x", r(1, 1)),
            Term::integer(3),
        ]);
        let d = (&x()).add(&Multinomial::from_i64(1));
        let (q, rem) = p.divide_and_remainder(&d);
        assert_eq!(q, (&x()).add(&Multinomial::from_i64(1)));
        assert_eq!(rem, Multinomial::from_i64(2));
        assert_eq!((&q.multiply(&d)).add(&rem), p);
    }

    #[test]
    fn gcd_of_univariate_polynomials() {
        // gcd(x² - 1, x - 1) = x - 1
        let p = x().pow(2).subtract(&Multinomial::from_i64(1));
        let d = x().subtract(&Multinomial::from_i64(1));
        assert_eq!(p.gcd(&d), d);
    }

    #[test]
    fn gcd_of_monomials() {
        let a = Multinomial::monomial(Term::with_character(r(4, 1), "x", r(2, 1)));
        let b = Multinomial::monomial(Term::with_character(r(6, 1), "x", r(1, 1)));
        let g = a.gcd(&b);
        assert_eq!(
            g,
            Multinomial::monomial(Term::with_character(r(2, 1), "x", r(1, 1)))
        );
    }

    #[test]
    fn display_joins_terms_by_sign() {
        let p = x().subtract(&Multinomial::from_i64(1));
        assert_eq!(p.to_string(), "-1 + x");
        assert_eq!(Multinomial::zero().to_string(), "0");
        let q = Multinomial::from_terms(vec![
            Term::integer(2),
            Term::with_character(r(-1, 2), "x", r(1, 1)),
        ]);
        assert_eq!(q.to_string(), "2 - 1/2*x");
    }
}
