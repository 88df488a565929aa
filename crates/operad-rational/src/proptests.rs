//! Property-based tests for rational arithmetic.

use num_traits::{One, Zero};
use proptest::prelude::*;

use crate::{exact_nth_root, extract_square, IBig, Rational};

fn small_rational() -> impl Strategy<Value = Rational> {
    (-200i64..200i64, 1i64..40i64).prop_map(|(n, d)| Rational::from_i64(n, d))
}

fn non_zero_rational() -> impl Strategy<Value = Rational> {
    (
        prop_oneof![(-200i64..=-1i64), (1i64..=200i64)],
        1i64..40i64,
    )
        .prop_map(|(n, d)| Rational::from_i64(n, d))
}

proptest! {
    // Field axioms

    #[test]
    fn add_commutative(a in small_rational(), b in small_rational()) {
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn mul_associative(a in small_rational(), b in small_rational(), c in small_rational()) {
        prop_assert_eq!(
            (a.clone() * b.clone()) * c.clone(),
            a * (b * c)
        );
    }

    #[test]
    fn distributive(a in small_rational(), b in small_rational(), c in small_rational()) {
        prop_assert_eq!(
            a.clone() * (b.clone() + c.clone()),
            a.clone() * b + a * c
        );
    }

    #[test]
    fn recip_is_inverse(a in non_zero_rational()) {
        prop_assert_eq!(a.clone() * a.recip(), Rational::one());
    }

    #[test]
    fn gcd_divides_both(a in non_zero_rational(), b in non_zero_rational()) {
        let g = a.gcd(&b);
        prop_assert!(!g.is_zero());
        prop_assert!((a / g.clone()).is_integer());
        prop_assert!((b / g).is_integer());
    }

    // Radical helpers

    #[test]
    fn square_extraction_reconstructs(n in 1i64..5000i64) {
        let n = IBig::from(n);
        let (out, ins) = extract_square(&n);
        prop_assert_eq!(out.clone() * out * ins, n);
    }

    #[test]
    fn nth_root_of_perfect_power(base in 1i64..40i64, k in 1u32..5u32) {
        let n = IBig::from(base).pow(k as usize);
        prop_assert_eq!(exact_nth_root(&n, k), Some(IBig::from(base)));
    }
}
