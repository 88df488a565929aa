//! # Operad
//!
//! Calculator-based algebraic structures with exact symbolic values.
//!
//! Generic math objects never hard-code arithmetic; they hold a
//! *calculator*, an injected capability object providing the operation
//! set of one algebraic structure over one element type. The crate
//! ships the calculator trait hierarchy, adapters for building
//! calculators out of weaker pieces, and an exact symbolic
//! [`Multinomial`](operad_multinomial::Multinomial) engine that
//! evaluates trigonometry over rational multiples of π without ever
//! approximating.
//!
//! ## Quick Start
//!
//! ```rust
//! use operad::prelude::*;
//!
//! let calc = MultinomialCalculator;
//! let angle = calc.divide_long(&Multinomial::pi(), 6).unwrap();
//! assert_eq!(calc.sin(&angle).unwrap().to_string(), "1/2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use operad_calc as calc;
pub use operad_multinomial as multinomial;
pub use operad_rational as rational;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use operad_calc::{
        CalcError, CalcResult, DivisionRingCalculator, EqualPredicate, FieldCalculator,
        GroupCalculator, MonoidCalculator, OrderPredicate, RealCalculator, RingCalculator,
        SemigroupCalculator, Simplifier, UfdCalculator, UnitRingCalculator,
    };
    pub use operad_multinomial::{Multinomial, MultinomialCalculator, MultinomialSimplifier, Term};
    pub use operad_rational::{IBig, Rational, UBig};
}
