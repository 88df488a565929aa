//! # operad-calc
//!
//! Algebraic structure calculators for the Operad algebra library.
//!
//! This crate provides:
//! - Abstract calculator traits: `SemigroupCalculator`, `GroupCalculator`,
//!   `RingCalculator`, `UnitRingCalculator`, `DivisionRingCalculator`,
//!   `FieldCalculator`, `UfdCalculator`
//! - The rich `RealCalculator` contract with transcendental operations and
//!   default-method derivations
//! - Factory adapters (`adapters`) building calculators from composable
//!   types, bare equality predicates and weaker calculators
//! - Self-typed number-model operator traits (`models`)
//!
//! ## Trait Hierarchy
//!
//! ```text
//! EqualPredicate
//!  ├── OrderPredicate
//!  ├── SemigroupCalculator ── MonoidCalculator ── GroupCalculator
//!  └── RingCalculator ── UnitRingCalculator ─┬─ DivisionRingCalculator ── FieldCalculator
//!                                            └─ UfdCalculator
//! ```
//!
//! A calculator is a capability-injected dependency: generic math objects
//! hold one calculator instance per element type and route every arithmetic
//! operation through it. Mixing calculators for the same nominal type is a
//! programming error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adapters;
pub mod error;
pub mod float;
pub mod models;
pub mod real;
pub mod simplifier;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::{CalcError, CalcResult};
pub use float::FloatCalculator;
pub use models::{
    field_calculator, group_calculator, ring_calculator, AlgebraModel, DivisionRingNumberModel,
    EuclidRingNumberModel, FieldNumberModel, GroupNumberModel, MonoidNumberModel,
    MulGroupNumberModel, MulMonoidNumberModel, RingNumberModel, VectorModel,
};
pub use real::{
    mapped_calculator, Bijection, FnBijection, IdentityBijection, MappedCalculator,
    RealCalculator, STR_E, STR_I, STR_PI,
};
pub use simplifier::Simplifier;
pub use traits::{
    DivisionRingCalculator, EqualPredicate, FieldCalculator, GroupCalculator, MonoidCalculator,
    OrderPredicate, RingCalculator, SemigroupCalculator, UfdCalculator, UnitRingCalculator,
};
