//! An `f64`-backed real calculator.
//!
//! This is the "plain numbers" instantiation of [`RealCalculator`]: every
//! operation maps to the corresponding floating-point primitive. Division
//! by zero and domain violations fail explicitly instead of producing
//! infinities or NaN, matching the library-wide policy that silent
//! precision loss is worse than a failure.

use std::cmp::Ordering;

use crate::error::{CalcError, CalcResult};
use crate::real::{RealCalculator, STR_E, STR_PI};

/// A [`RealCalculator`] over `f64`.
///
/// Equality is exact bit-for-bit comparison of finite values; callers
/// wanting tolerance-based comparison should compare results themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatCalculator;

impl RealCalculator<f64> for FloatCalculator {
    fn is_comparable(&self) -> bool {
        true
    }

    fn zero(&self) -> CalcResult<f64> {
        Ok(0.0)
    }

    fn one(&self) -> CalcResult<f64> {
        Ok(1.0)
    }

    fn is_equal(&self, x: &f64, y: &f64) -> CalcResult<bool> {
        Ok(x == y)
    }

    fn compare(&self, x: &f64, y: &f64) -> CalcResult<Ordering> {
        x.partial_cmp(y)
            .ok_or_else(|| CalcError::undefined("comparison with NaN"))
    }

    fn add(&self, x: &f64, y: &f64) -> CalcResult<f64> {
        Ok(x + y)
    }

    fn negate(&self, x: &f64) -> CalcResult<f64> {
        Ok(-x)
    }

    fn abs(&self, x: &f64) -> CalcResult<f64> {
        Ok(x.abs())
    }

    fn subtract(&self, x: &f64, y: &f64) -> CalcResult<f64> {
        Ok(x - y)
    }

    fn multiply(&self, x: &f64, y: &f64) -> CalcResult<f64> {
        Ok(x * y)
    }

    fn divide(&self, x: &f64, y: &f64) -> CalcResult<f64> {
        if *y == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(x / y)
    }

    fn reciprocal(&self, x: &f64) -> CalcResult<f64> {
        if *x == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(1.0 / x)
    }

    #[allow(clippy::cast_precision_loss)]
    fn multiply_long(&self, x: &f64, n: i64) -> CalcResult<f64> {
        Ok(x * n as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn divide_long(&self, x: &f64, n: i64) -> CalcResult<f64> {
        if n == 0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(x / n as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn pow(&self, x: &f64, n: i64) -> CalcResult<f64> {
        if *x == 0.0 && n < 0 {
            return Err(CalcError::DivisionByZero);
        }
        match i32::try_from(n) {
            Ok(n) => Ok(x.powi(n)),
            // powf rejects negative bases, so carry the sign by parity.
            Err(_) => {
                let magnitude = x.abs().powf(n as f64);
                Ok(if *x < 0.0 && n % 2 != 0 {
                    -magnitude
                } else {
                    magnitude
                })
            }
        }
    }

    fn square_root(&self, x: &f64) -> CalcResult<f64> {
        if *x < 0.0 {
            return Err(CalcError::undefined(format!("sqrt({x})")));
        }
        Ok(x.sqrt())
    }

    #[allow(clippy::cast_precision_loss)]
    fn nroot(&self, x: &f64, n: i64) -> CalcResult<f64> {
        if n == 0 {
            return Err(CalcError::undefined("nroot for n = 0"));
        }
        if *x < 0.0 {
            if n % 2 == 0 {
                return Err(CalcError::undefined(format!("nroot({x}, {n})")));
            }
            return Ok(-(-x).powf(1.0 / n as f64));
        }
        Ok(x.powf(1.0 / n as f64))
    }

    fn constant_value(&self, name: &str) -> Option<f64> {
        match name {
            STR_PI => Some(std::f64::consts::PI),
            STR_E => Some(std::f64::consts::E),
            _ => None,
        }
    }

    fn exp_base(&self, a: &f64, b: &f64) -> CalcResult<f64> {
        if *a <= 0.0 {
            return Err(CalcError::undefined(format!("{a}^{b}")));
        }
        Ok(a.powf(*b))
    }

    fn exp(&self, x: &f64) -> CalcResult<f64> {
        Ok(x.exp())
    }

    fn log(&self, a: &f64, b: &f64) -> CalcResult<f64> {
        let d = self.ln(a)?;
        if d == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(self.ln(b)? / d)
    }

    fn ln(&self, x: &f64) -> CalcResult<f64> {
        if *x <= 0.0 {
            return Err(CalcError::undefined(format!("ln({x})")));
        }
        Ok(x.ln())
    }

    fn sin(&self, x: &f64) -> CalcResult<f64> {
        Ok(x.sin())
    }

    fn cos(&self, x: &f64) -> CalcResult<f64> {
        Ok(x.cos())
    }

    fn tan(&self, x: &f64) -> CalcResult<f64> {
        Ok(x.tan())
    }

    fn arcsin(&self, x: &f64) -> CalcResult<f64> {
        if !(-1.0..=1.0).contains(x) {
            return Err(CalcError::undefined(format!("arcsin({x})")));
        }
        Ok(x.asin())
    }

    fn arccos(&self, x: &f64) -> CalcResult<f64> {
        if !(-1.0..=1.0).contains(x) {
            return Err(CalcError::undefined(format!("arccos({x})")));
        }
        Ok(x.acos())
    }

    fn arctan(&self, x: &f64) -> CalcResult<f64> {
        Ok(x.atan())
    }

    #[allow(clippy::cast_precision_loss)]
    fn of_i64(&self, n: i64) -> CalcResult<f64> {
        Ok(n as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn basic_field_operations() {
        let fc = FloatCalculator;
        assert_eq!(fc.add(&2.0, &3.0).unwrap(), 5.0);
        assert_eq!(fc.multiply(&2.0, &3.0).unwrap(), 6.0);
        assert_eq!(fc.divide(&1.0, &4.0).unwrap(), 0.25);
        assert_eq!(fc.divide(&1.0, &0.0), Err(CalcError::DivisionByZero));
        assert_eq!(fc.divide_long(&1.0, 0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn constants() {
        let fc = FloatCalculator;
        assert_eq!(fc.constant_value(STR_PI), Some(std::f64::consts::PI));
        assert_eq!(fc.constant_value(STR_E), Some(std::f64::consts::E));
        assert_eq!(fc.constant_value("i"), None);
    }

    #[test]
    fn trig_overrides() {
        let fc = FloatCalculator;
        let x = 0.3f64;
        assert!((fc.sin(&x).unwrap() - x.sin()).abs() < EPS);
        assert!((fc.tan(&x).unwrap() - x.tan()).abs() < EPS);
        assert!((fc.arccos(&x).unwrap() - x.acos()).abs() < EPS);
    }

    #[test]
    fn pow_beyond_i32_range() {
        let fc = FloatCalculator;
        let n = i64::from(i32::MAX) + 1;
        assert_eq!(fc.pow(&1.0, n).unwrap(), 1.0);
        assert_eq!(fc.pow(&0.5, n).unwrap(), 0.0);
        assert_eq!(fc.pow(&2.0, n).unwrap(), f64::INFINITY);
        assert_eq!(fc.pow(&-0.5, n + 1).unwrap(), 0.0);
        assert_eq!(fc.pow(&-2.0, n).unwrap(), f64::INFINITY);
        assert_eq!(fc.pow(&0.0, -n), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn domain_errors() {
        let fc = FloatCalculator;
        assert!(matches!(
            fc.square_root(&-1.0),
            Err(CalcError::Undefined(_))
        ));
        assert!(matches!(fc.arcsin(&1.5), Err(CalcError::Undefined(_))));
        assert!(matches!(fc.ln(&0.0), Err(CalcError::Undefined(_))));
    }

    // The default derivation cos(x) = sqrt(1 - x²) must agree with a true
    // cosine on the domain where x is a sine value. Exercised through a
    // calculator that keeps the derived default.
    struct NoCosFloat;

    impl RealCalculator<f64> for NoCosFloat {
        fn zero(&self) -> CalcResult<f64> {
            Ok(0.0)
        }
        fn one(&self) -> CalcResult<f64> {
            Ok(1.0)
        }
        fn is_equal(&self, x: &f64, y: &f64) -> CalcResult<bool> {
            Ok(x == y)
        }
        fn add(&self, x: &f64, y: &f64) -> CalcResult<f64> {
            Ok(x + y)
        }
        fn negate(&self, x: &f64) -> CalcResult<f64> {
            Ok(-x)
        }
        fn multiply(&self, x: &f64, y: &f64) -> CalcResult<f64> {
            Ok(x * y)
        }
        fn square_root(&self, x: &f64) -> CalcResult<f64> {
            FloatCalculator.square_root(x)
        }
        fn sin(&self, x: &f64) -> CalcResult<f64> {
            Ok(x.sin())
        }
        fn arcsin(&self, x: &f64) -> CalcResult<f64> {
            FloatCalculator.arcsin(x)
        }
        fn reciprocal(&self, x: &f64) -> CalcResult<f64> {
            FloatCalculator.reciprocal(x)
        }
    }

    #[test]
    fn derived_cos_matches_reference() {
        let nc = NoCosFloat;
        let mut x = -1.0f64;
        while x <= 1.0 {
            let derived = nc.cos(&x).unwrap();
            let reference = x.asin().cos();
            assert!(
                (derived - reference).abs() < 1e-9,
                "cos default diverges at {x}: {derived} vs {reference}"
            );
            x += 0.125;
        }
    }

    #[test]
    fn derived_arctan_matches_reference() {
        let nc = NoCosFloat;
        for x in [-2.0f64, -0.5, 0.0, 0.5, 2.0] {
            let derived = nc.arctan(&x).unwrap();
            assert!((derived - x.atan()).abs() < 1e-9);
        }
    }
}
