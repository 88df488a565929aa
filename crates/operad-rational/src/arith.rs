//! Integer helpers for radical normalization.
//!
//! These routines back the square-root simplification of symbolic terms:
//! a radicand is kept square-free by pulling perfect-square factors out,
//! and n-th roots are only taken when they are exact.

use dashu::base::Abs;
use dashu::integer::IBig;

/// Computes the greatest common divisor of two integers.
///
/// The result is non-negative; `integer_gcd(0, 0) == 0`.
#[must_use]
pub fn integer_gcd(a: &IBig, b: &IBig) -> IBig {
    let mut a = a.clone().abs();
    let mut b = b.clone().abs();
    while b != IBig::ZERO {
        let r = a.clone() % b.clone();
        a = b;
        b = r;
    }
    a
}

/// Computes the least common multiple of two integers.
///
/// The result is non-negative; zero if either argument is zero.
#[must_use]
pub fn integer_lcm(a: &IBig, b: &IBig) -> IBig {
    if *a == IBig::ZERO || *b == IBig::ZERO {
        return IBig::ZERO;
    }
    let g = integer_gcd(a, b);
    (a.clone().abs() / g) * b.clone().abs()
}

/// Splits a non-negative integer into `(outside, inside)` with
/// `n == outside² · inside` and `inside` square-free.
///
/// Used to normalize radicands: `√n = outside · √inside`.
///
/// # Panics
///
/// Panics if `n` is negative.
#[must_use]
pub fn extract_square(n: &IBig) -> (IBig, IBig) {
    assert!(*n >= IBig::ZERO, "radicand cannot be negative");
    if *n == IBig::ZERO {
        return (IBig::ZERO, IBig::ONE);
    }
    let mut inside = n.clone();
    let mut outside = IBig::ONE;
    let mut p = IBig::from(2);
    while p.clone() * p.clone() <= inside {
        let sq = p.clone() * p.clone();
        while inside.clone() % sq.clone() == IBig::ZERO {
            inside /= sq.clone();
            outside *= p.clone();
        }
        p += IBig::ONE;
    }
    (outside, inside)
}

/// Converts a big integer to `i64`, if it fits.
#[must_use]
pub fn ibig_to_i64(n: &IBig) -> Option<i64> {
    i64::try_from(n.clone()).ok()
}

/// Computes the exact `k`-th root of `n`, if one exists.
///
/// Returns `None` when `n` is not a perfect `k`-th power, when `k == 0`,
/// or when `n` is negative and `k` is even.
#[must_use]
pub fn exact_nth_root(n: &IBig, k: u32) -> Option<IBig> {
    if k == 0 {
        return None;
    }
    let negative = *n < IBig::ZERO;
    if negative && k % 2 == 0 {
        return None;
    }
    let m = n.clone().abs();
    let k = k as usize;

    // Bracket the root, then binary search.
    let mut hi = IBig::ONE;
    while hi.clone().pow(k) < m {
        hi *= IBig::from(2);
    }
    let mut lo = IBig::ZERO;
    while lo < hi {
        let mid = (lo.clone() + hi.clone() + IBig::ONE) / IBig::from(2);
        if mid.clone().pow(k) <= m {
            lo = mid;
        } else {
            hi = mid - IBig::ONE;
        }
    }
    if lo.clone().pow(k) == m {
        Some(if negative { -lo } else { lo })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(integer_gcd(&IBig::from(12), &IBig::from(18)), IBig::from(6));
        assert_eq!(integer_gcd(&IBig::from(-12), &IBig::from(18)), IBig::from(6));
        assert_eq!(integer_gcd(&IBig::ZERO, &IBig::from(5)), IBig::from(5));
        assert_eq!(integer_lcm(&IBig::from(4), &IBig::from(6)), IBig::from(12));
        assert_eq!(integer_lcm(&IBig::ZERO, &IBig::from(6)), IBig::ZERO);
    }

    #[test]
    fn square_extraction() {
        let (out, ins) = extract_square(&IBig::from(12));
        assert_eq!(out, IBig::from(2));
        assert_eq!(ins, IBig::from(3));

        let (out, ins) = extract_square(&IBig::from(49));
        assert_eq!(out, IBig::from(7));
        assert_eq!(ins, IBig::ONE);

        let (out, ins) = extract_square(&IBig::from(30));
        assert_eq!(out, IBig::ONE);
        assert_eq!(ins, IBig::from(30));
    }

    #[test]
    fn i64_conversion() {
        assert_eq!(ibig_to_i64(&IBig::from(42)), Some(42));
        assert_eq!(ibig_to_i64(&IBig::from(-7)), Some(-7));
        assert_eq!(ibig_to_i64(&IBig::from(i64::MAX)), Some(i64::MAX));
        assert_eq!(ibig_to_i64(&IBig::from(i64::MIN)), Some(i64::MIN));
        assert_eq!(ibig_to_i64(&(IBig::from(i64::MAX) + IBig::ONE)), None);
        assert_eq!(ibig_to_i64(&(IBig::from(i64::MIN) - IBig::ONE)), None);
    }

    #[test]
    fn nth_roots() {
        assert_eq!(exact_nth_root(&IBig::from(27), 3), Some(IBig::from(3)));
        assert_eq!(exact_nth_root(&IBig::from(-27), 3), Some(IBig::from(-3)));
        assert_eq!(exact_nth_root(&IBig::from(16), 4), Some(IBig::from(2)));
        assert_eq!(exact_nth_root(&IBig::from(10), 2), None);
        assert_eq!(exact_nth_root(&IBig::from(-4), 2), None);
        assert_eq!(exact_nth_root(&IBig::ONE, 7), Some(IBig::ONE));
    }
}
