//! Single monomial terms.
//!
//! A [`Term`] is `coefficient · √radical · Π char^exponent`: a rational
//! coefficient, a square-free positive radicand, and a map from character
//! names to rational exponents. The representation is canonical: perfect
//! squares are pulled out of the radicand into the coefficient, zero
//! exponents are dropped, and the zero term always has radicand one and no
//! characters.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use num_traits::{One, Zero};
use operad_rational::{extract_square, IBig, Rational};

/// The character name of the circle constant.
pub const CHAR_PI: &str = "Pi";
/// The character name of the base of the natural logarithm.
pub const CHAR_E: &str = "e";
/// The character name of the imaginary unit.
pub const CHAR_I: &str = "i";

/// A monomial: rational coefficient, square-free radicand and named
/// characters with rational exponents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    coefficient: Rational,
    radical: IBig,
    characters: BTreeMap<String, Rational>,
}

impl Term {
    /// Creates a term from its raw parts, normalizing to canonical form.
    ///
    /// # Panics
    ///
    /// Panics if `radical` is not positive.
    #[must_use]
    pub fn new(coefficient: Rational, radical: IBig, characters: BTreeMap<String, Rational>) -> Self {
        assert!(radical > IBig::ZERO, "radicand must be positive");
        if coefficient.is_zero() {
            return Self::zero();
        }
        let (outside, inside) = extract_square(&radical);
        let coefficient = if outside == IBig::ONE {
            coefficient
        } else {
            coefficient * Rational::from(outside)
        };
        let characters = characters.into_iter().filter(|(_, e)| !e.is_zero()).collect();
        Self {
            coefficient,
            radical: inside,
            characters,
        }
    }

    /// The zero term.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coefficient: Rational::zero(),
            radical: IBig::ONE,
            characters: BTreeMap::new(),
        }
    }

    /// The term representing one.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(Rational::one())
    }

    /// A constant term with no radical and no characters.
    #[must_use]
    pub fn constant(c: Rational) -> Self {
        Self {
            coefficient: c,
            radical: IBig::ONE,
            characters: BTreeMap::new(),
        }
    }

    /// A constant integer term.
    #[must_use]
    pub fn integer(n: i64) -> Self {
        Self::constant(Rational::from(n))
    }

    /// The term `name^1`.
    #[must_use]
    pub fn character(name: &str) -> Self {
        Self::with_character(Rational::one(), name, Rational::one())
    }

    /// The term `c · name^exponent`.
    #[must_use]
    pub fn with_character(c: Rational, name: &str, exponent: Rational) -> Self {
        let mut characters = BTreeMap::new();
        if !exponent.is_zero() {
            characters.insert(name.to_owned(), exponent);
        }
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            coefficient: c,
            radical: IBig::ONE,
            characters,
        }
    }

    /// The term `c · Pi`.
    #[must_use]
    pub fn pi_multiple(c: Rational) -> Self {
        Self::with_character(c, CHAR_PI, Rational::one())
    }

    /// The rational coefficient.
    #[must_use]
    pub fn coefficient(&self) -> &Rational {
        &self.coefficient
    }

    /// The square-free radicand; one when the term has no radical.
    #[must_use]
    pub fn radical(&self) -> &IBig {
        &self.radical
    }

    /// The character-to-exponent map.
    #[must_use]
    pub fn characters(&self) -> &BTreeMap<String, Rational> {
        &self.characters
    }

    /// The exponent of `name`, zero when absent.
    #[must_use]
    pub fn exponent_of(&self, name: &str) -> Rational {
        self.characters.get(name).cloned().unwrap_or_else(Rational::zero)
    }

    /// Whether this is the zero term.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Whether this term is a plain rational: no radical, no characters.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.radical == IBig::ONE && self.characters.is_empty()
    }

    /// The term's value as a rational, when [`Term::is_rational`].
    #[must_use]
    pub fn to_rational(&self) -> Option<Rational> {
        if self.is_rational() {
            Some(self.coefficient.clone())
        } else {
            None
        }
    }

    /// When this term is exactly `f · Pi` with unit radicand, returns `f`.
    #[must_use]
    pub fn pi_fraction(&self) -> Option<Rational> {
        if self.radical != IBig::ONE || self.characters.len() != 1 {
            return None;
        }
        let (name, exponent) = self.characters.iter().next()?;
        if name == CHAR_PI && exponent.is_one() {
            Some(self.coefficient.clone())
        } else {
            None
        }
    }

    /// Replaces the coefficient, keeping the symbolic part.
    #[must_use]
    pub fn with_coefficient(&self, c: Rational) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            coefficient: c,
            radical: self.radical.clone(),
            characters: self.characters.clone(),
        }
    }

    /// Returns `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            coefficient: -self.coefficient.clone(),
            radical: self.radical.clone(),
            characters: self.characters.clone(),
        }
    }

    /// Scales the coefficient by `k`.
    #[must_use]
    pub fn scale(&self, k: &Rational) -> Self {
        if k.is_zero() {
            return Self::zero();
        }
        Self {
            coefficient: self.coefficient.clone() * k.clone(),
            radical: self.radical.clone(),
            characters: self.characters.clone(),
        }
    }

    /// Multiplies two terms, merging radicands and adding exponents.
    #[must_use]
    pub fn multiply(&self, y: &Self) -> Self {
        let coefficient = self.coefficient.clone() * y.coefficient.clone();
        if coefficient.is_zero() {
            return Self::zero();
        }
        let (outside, inside) = extract_square(&(self.radical.clone() * y.radical.clone()));
        let coefficient = if outside == IBig::ONE {
            coefficient
        } else {
            coefficient * Rational::from(outside)
        };
        let mut characters = self.characters.clone();
        for (name, e) in &y.characters {
            let merged = self.exponent_of(name) + e.clone();
            if merged.is_zero() {
                characters.remove(name);
            } else {
                characters.insert(name.clone(), merged);
            }
        }
        Self {
            coefficient,
            radical: inside,
            characters,
        }
    }

    /// Returns `1 / self`. Uses `1/√r = √r / r` to keep the radicand an
    /// integer.
    ///
    /// # Panics
    ///
    /// Panics if this term is zero.
    #[must_use]
    pub fn reciprocal(&self) -> Self {
        assert!(!self.is_zero(), "reciprocal of the zero term");
        let coefficient =
            (self.coefficient.clone() * Rational::from(self.radical.clone())).recip();
        let characters = self
            .characters
            .iter()
            .map(|(name, e)| (name.clone(), -e.clone()))
            .collect();
        Self {
            coefficient,
            radical: self.radical.clone(),
            characters,
        }
    }

    /// Divides this term by `y`, exactly.
    ///
    /// # Panics
    ///
    /// Panics if `y` is zero.
    #[must_use]
    pub fn divide(&self, y: &Self) -> Self {
        self.multiply(&y.reciprocal())
    }

    /// Raises the term to a non-negative power; `pow(0)` is one.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        if self.is_zero() {
            return Self::zero();
        }
        // radical^n = radical^(n/2) outside the root, radical^(n mod 2) under it
        let coefficient =
            self.coefficient.pow(n) * Rational::from(self.radical.clone().pow(n as usize / 2));
        let radical = if n % 2 == 0 {
            IBig::ONE
        } else {
            self.radical.clone()
        };
        let exp = Rational::from(i64::from(n));
        let characters = self
            .characters
            .iter()
            .map(|(name, e)| (name.clone(), e.clone() * exp.clone()))
            .collect();
        Self {
            coefficient,
            radical,
            characters,
        }
    }

    /// Whether `self` and `y` carry the same symbolic part, so that adding
    /// them only adds coefficients.
    #[must_use]
    pub fn same_symbol(&self, y: &Self) -> bool {
        self.radical == y.radical && self.characters == y.characters
    }

    /// Orders terms by symbolic part alone, ignoring the coefficient.
    #[must_use]
    pub fn symbol_cmp(&self, y: &Self) -> Ordering {
        self.characters
            .cmp(&y.characters)
            .then_with(|| self.radical.cmp(&y.radical))
    }

    /// The sum of all character exponents.
    #[must_use]
    pub fn total_degree(&self) -> Rational {
        let mut d = Rational::zero();
        for e in self.characters.values() {
            d = d + e.clone();
        }
        d
    }

    /// Whether every character exponent of `divisor` is covered by this
    /// term, so dividing introduces no negative exponents.
    #[must_use]
    pub fn char_exponents_cover(&self, divisor: &Self) -> bool {
        divisor
            .characters
            .iter()
            .all(|(name, e)| self.exponent_of(name) >= *e)
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbol_cmp(other)
            .then_with(|| self.coefficient.cmp(&other.coefficient))
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.coefficient.is_negative() {
            write!(f, "-")?;
        }
        let abs = self.coefficient.abs();
        let mut parts: Vec<String> = Vec::new();
        if !abs.is_one() || self.is_rational() {
            parts.push(abs.to_string());
        }
        if self.radical != IBig::ONE {
            parts.push(format!("Sqr{}", self.radical));
        }
        for (name, e) in &self.characters {
            if e.is_one() {
                parts.push(name.clone());
            } else {
                parts.push(format!("{name}^{e}"));
            }
        }
        write!(f, "{}", parts.join("*"))
    }
}
