//! The [`Simplifier`] implementation for multinomials.
//!
//! A single multinomial is already canonical, so [`Simplifier::simplify`]
//! is the identity here. The list and pair forms cancel structure shared
//! between elements: a common divisor across a list, and a reduced
//! fraction for a numerator/denominator pair.

use operad_calc::Simplifier;

use crate::multinomial::Multinomial;

/// Cancels common divisors across groups of multinomials.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultinomialSimplifier;

fn exact_quotient(x: &Multinomial, g: &Multinomial) -> Multinomial {
    let (q, r) = x.divide_and_remainder(g);
    if r.is_zero() {
        q
    } else {
        x.clone()
    }
}

impl Simplifier<Multinomial> for MultinomialSimplifier {
    /// Divides every element by the greatest common divisor of the list.
    fn simplify_list(&self, xs: Vec<Multinomial>) -> Vec<Multinomial> {
        let mut g = Multinomial::zero();
        for x in &xs {
            g = g.gcd(x);
        }
        if g.is_zero() || g == Multinomial::one() {
            return xs;
        }
        xs.iter().map(|x| exact_quotient(x, &g)).collect()
    }

    /// Reduces the pair as a fraction `a / b`: cancels the gcd, folds a
    /// monomial denominator into the numerator, and keeps the leading
    /// denominator coefficient positive.
    fn simplify_pair(&self, a: Multinomial, b: Multinomial) -> (Multinomial, Multinomial) {
        if b.is_zero() {
            return (a, b);
        }
        if a.is_zero() {
            return (a, Multinomial::one());
        }
        let g = a.gcd(&b);
        let (mut num, mut den) = if g.is_zero() || g == Multinomial::one() {
            (a, b)
        } else {
            (exact_quotient(&a, &g), exact_quotient(&b, &g))
        };
        if let Some(t) = den.as_monomial() {
            num = num.multiply_term(&t.reciprocal());
            return (num, Multinomial::one());
        }
        let lead_negative = den
            .terms()
            .last()
            .is_some_and(|t| t.coefficient().is_negative());
        if lead_negative {
            num = num.negate();
            den = den.negate();
        }
        (num, den)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_multinomial;

    fn m(text: &str) -> Multinomial {
        parse_multinomial(text).unwrap()
    }

    #[test]
    fn single_values_are_already_canonical() {
        let s = MultinomialSimplifier;
        let x = m("x^2 - 1");
        assert_eq!(s.simplify(x.clone()), x);
    }

    #[test]
    fn list_reduction_cancels_the_common_divisor() {
        let s = MultinomialSimplifier;
        let reduced = s.simplify_list(vec![m("2*x^2"), m("4*x")]);
        assert_eq!(reduced, vec![m("x"), m("2")]);
    }

    #[test]
    fn coprime_lists_are_untouched() {
        let s = MultinomialSimplifier;
        let xs = vec![m("x + 1"), m("x - 1")];
        assert_eq!(s.simplify_list(xs.clone()), xs);
    }

    #[test]
    fn pair_reduction_is_a_canonical_fraction() {
        let s = MultinomialSimplifier;
        // (x² - 1) / (x - 1) = (x + 1) / 1
        let (num, den) = s.simplify_pair(m("x^2 - 1"), m("x - 1"));
        assert_eq!(num, m("x + 1"));
        assert_eq!(den, m("1"));

        let (num, den) = s.simplify_pair(m("x"), m("2"));
        assert_eq!(num, m("1/2*x"));
        assert_eq!(den, m("1"));

        let (num, den) = s.simplify_pair(m("x + 1"), m("1 - x"));
        assert_eq!(num, m("-1 - x"));
        assert_eq!(den, m("x - 1"));
    }

    #[test]
    fn zero_numerator_normalizes_to_zero_over_one() {
        let s = MultinomialSimplifier;
        let (num, den) = s.simplify_pair(Multinomial::zero(), m("x + 2"));
        assert!(num.is_zero());
        assert_eq!(den, Multinomial::one());
    }
}
