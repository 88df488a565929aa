//! # operad-rational
//!
//! Arbitrary precision rational arithmetic for the Operad algebra library.
//!
//! This crate wraps `dashu` to provide:
//! - Exact rational numbers (`Rational`), always kept in lowest terms
//! - Integer helpers used by radical normalization (square extraction,
//!   exact n-th roots)
//!
//! Coefficients of symbolic terms, character exponents and the reduced
//! angle fractions of the trigonometric evaluator are all built on this
//! crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use arith::{exact_nth_root, extract_square, ibig_to_i64, integer_gcd, integer_lcm};
pub use rational::Rational;

pub use dashu::integer::{IBig, UBig};
