//! Property tests over randomly generated multinomials.

use std::collections::BTreeMap;

use proptest::prelude::*;

use operad_rational::{IBig, Rational};

use crate::calculator::MultinomialCalculator;
use crate::multinomial::Multinomial;
use crate::parse::parse_multinomial;
use crate::term::Term;
use operad_calc::RealCalculator;

fn small_term() -> impl Strategy<Value = Term> {
    (-5i64..=5, 0u32..=3, 0u32..=2).prop_map(|(c, ex, ey)| {
        let mut characters = BTreeMap::new();
        if ex > 0 {
            characters.insert("x".to_owned(), Rational::from(i64::from(ex)));
        }
        if ey > 0 {
            characters.insert("y".to_owned(), Rational::from(i64::from(ey)));
        }
        Term::new(Rational::from(c), IBig::ONE, characters)
    })
}

fn small_multinomial() -> impl Strategy<Value = Multinomial> {
    proptest::collection::vec(small_term(), 0..4).prop_map(Multinomial::from_terms)
}

proptest! {
    #[test]
    fn addition_is_commutative_and_associative(
        a in small_multinomial(),
        b in small_multinomial(),
        c in small_multinomial(),
    ) {
        prop_assert_eq!(a.add(&b), b.add(&a));
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    }

    #[test]
    fn subtraction_cancels(a in small_multinomial()) {
        prop_assert!(a.subtract(&a).is_zero());
    }

    #[test]
    fn multiplication_distributes_over_addition(
        a in small_multinomial(),
        b in small_multinomial(),
        c in small_multinomial(),
    ) {
        prop_assert_eq!(
            a.multiply(&b.add(&c)),
            a.multiply(&b).add(&a.multiply(&c))
        );
    }

    #[test]
    fn product_divides_back_exactly(
        a in small_multinomial(),
        b in small_multinomial(),
    ) {
        prop_assume!(!b.is_zero());
        let p = a.multiply(&b);
        let (q, r) = p.divide_and_remainder(&b);
        prop_assert!(r.is_zero());
        prop_assert_eq!(q, a);
    }

    #[test]
    fn division_reconstructs_the_dividend(
        a in small_multinomial(),
        b in small_multinomial(),
    ) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.divide_and_remainder(&b);
        prop_assert_eq!(q.multiply(&b).add(&r), a);
    }

    #[test]
    fn gcd_divides_both_operands(
        a in small_multinomial(),
        b in small_multinomial(),
    ) {
        let g = a.gcd(&b);
        prop_assume!(!g.is_zero());
        prop_assert!(a.divide_and_remainder(&g).1.is_zero());
        prop_assert!(b.divide_and_remainder(&g).1.is_zero());
    }

    #[test]
    fn display_parse_round_trip(a in small_multinomial()) {
        prop_assert_eq!(parse_multinomial(&a.to_string()).unwrap(), a);
    }

    #[test]
    fn sine_is_odd_where_defined(n in -24i64..=24, d in 1i64..=12) {
        let calc = MultinomialCalculator;
        let angle = Multinomial::monomial(Term::pi_multiple(Rational::from_i64(n, d)));
        let negated = angle.negate();
        match (calc.sin(&angle), calc.sin(&negated)) {
            (Ok(s), Ok(t)) => prop_assert_eq!(t, s.negate()),
            (Err(_), Err(_)) => {}
            (a, b) => prop_assert!(false, "asymmetric results: {a:?} vs {b:?}"),
        }
    }

    #[test]
    fn sine_has_period_two_pi(n in -24i64..=24, d in 1i64..=12) {
        let calc = MultinomialCalculator;
        let f = Rational::from_i64(n, d);
        let angle = Multinomial::monomial(Term::pi_multiple(f.clone()));
        let shifted =
            Multinomial::monomial(Term::pi_multiple(f + Rational::from(2)));
        match (calc.sin(&angle), calc.sin(&shifted)) {
            (Ok(s), Ok(t)) => prop_assert_eq!(s, t),
            (Err(_), Err(_)) => {}
            (a, b) => prop_assert!(false, "periodicity broken: {a:?} vs {b:?}"),
        }
    }
}
