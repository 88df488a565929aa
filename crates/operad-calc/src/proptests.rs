//! Property-based tests for the calculator trait default methods.

use proptest::prelude::*;

use crate::traits::{EqualPredicate, RingCalculator, UnitRingCalculator};

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

fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

proptest! {
    #[test]
    fn subtract_inverts_add(a in small_int(), b in small_int()) {
        let rc = IntRing;
        prop_assert_eq!(rc.subtract(&rc.add(&a, &b), &b), a);
        prop_assert!(rc.is_zero(&rc.subtract(&a, &a)));
    }

    #[test]
    fn multiply_long_matches_repeated_add(a in small_int(), n in 0i64..30i64) {
        let rc = IntRing;
        let mut acc = rc.zero();
        for _ in 0..n {
            acc = rc.add(&acc, &a);
        }
        prop_assert_eq!(rc.multiply_long(&a, n), acc);
        prop_assert_eq!(rc.multiply_long(&a, -n), rc.negate(&acc));
    }

    #[test]
    fn pow_adds_exponents(a in -9i64..9i64, m in 0u64..6u64, n in 0u64..6u64) {
        let rc = IntRing;
        prop_assert_eq!(
            rc.pow(&a, m + n),
            rc.multiply(&rc.pow(&a, m), &rc.pow(&a, n))
        );
    }

    #[test]
    fn sum_matches_fold(xs in prop::collection::vec(small_int(), 0..8)) {
        let rc = IntRing;
        prop_assert_eq!(rc.sum(&xs), xs.iter().sum::<i64>());
    }

    #[test]
    fn product_matches_fold(xs in prop::collection::vec(-5i64..5i64, 0..6)) {
        let rc = IntRing;
        prop_assert_eq!(rc.product(&xs), xs.iter().product::<i64>());
    }

    #[test]
    fn of_i64_round_trips(n in small_int()) {
        let rc = IntRing;
        prop_assert_eq!(rc.of_i64(n), n);
    }
}
