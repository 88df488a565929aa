//! Error types shared by all calculators.
//!
//! The taxonomy keeps "not implemented" and "mathematically undefined"
//! distinct, so a caller can tell "try a different calculator" apart from
//! "this input is genuinely invalid". No operation in this library recovers
//! locally or falls back to an approximate result; every failure is
//! surfaced to the immediate caller.

use thiserror::Error;

/// Errors produced by calculator operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The calculator or value does not implement the requested operation.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// Division by zero, including `divide_long` with `n == 0`.
    #[error("division by zero")]
    DivisionByZero,

    /// A mathematically undefined input, such as `0^0`, `tan(Pi/2)` or
    /// `arcsin` of a constant outside `[-1, 1]`.
    #[error("undefined: {0}")]
    Undefined(String),

    /// Exact division was requested but the remainder is non-zero.
    #[error("not an exact division: ({dividend}) / ({divisor})")]
    NotExactDivision {
        /// Text form of the dividend.
        dividend: String,
        /// Text form of the divisor.
        divisor: String,
    },

    /// A precondition violation, such as malformed parse input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CalcError {
    /// Creates an [`CalcError::Unsupported`] error.
    #[must_use]
    pub fn unsupported(what: impl Into<String>) -> Self {
        Self::Unsupported(what.into())
    }

    /// Creates an [`CalcError::Undefined`] error.
    #[must_use]
    pub fn undefined(what: impl Into<String>) -> Self {
        Self::Undefined(what.into())
    }

    /// Creates an [`CalcError::InvalidArgument`] error.
    #[must_use]
    pub fn invalid(what: impl Into<String>) -> Self {
        Self::InvalidArgument(what.into())
    }

    /// Creates a [`CalcError::NotExactDivision`] error carrying both
    /// operands for diagnosis.
    #[must_use]
    pub fn not_exact(dividend: impl ToString, divisor: impl ToString) -> Self {
        Self::NotExactDivision {
            dividend: dividend.to_string(),
            divisor: divisor.to_string(),
        }
    }
}

/// Result alias for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;
