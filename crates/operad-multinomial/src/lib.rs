//! # operad-multinomial
//!
//! Symbolic multinomial values and their exact calculator.
//!
//! A [`Multinomial`] is a sum of monomial [`Term`]s: rational coefficient,
//! square-free radicand and characters with rational exponents. Values of
//! the three recognized constants π, `e` and `i` are ordinary characters,
//! which is what makes exact trigonometry possible:
//!
//! ```
//! use operad_calc::RealCalculator;
//! use operad_multinomial::{Multinomial, MultinomialCalculator};
//!
//! let calc = MultinomialCalculator;
//! let angle = calc.divide_long(&Multinomial::pi(), 6).unwrap();
//! assert_eq!(calc.sin(&angle).unwrap().to_string(), "1/2");
//! ```
//!
//! Operations without an exact answer fail with an error instead of
//! falling back to floating point.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calculator;
pub mod multinomial;
pub mod parse;
pub mod simplify;
pub mod term;

#[cfg(test)]
mod proptests;

pub use calculator::MultinomialCalculator;
pub use multinomial::Multinomial;
pub use parse::parse_multinomial;
pub use simplify::MultinomialSimplifier;
pub use term::{Term, CHAR_E, CHAR_I, CHAR_PI};
