//! Error types for interval operations.

use enc_core::CoreError;
use enc_core::numeric::Real;
use thiserror::Error;

pub type IntervalResult<T> = Result<T, IntervalError>;

#[derive(Error, Debug)]
pub enum IntervalError {
    /// Division by an interval containing zero has no bounded enclosure.
    #[error("Divisor interval [{lo}, {hi}] contains zero")]
    DivisorStraddlesZero { lo: Real, hi: Real },

    /// Square root of an interval reaching below zero is rejected rather
    /// than clamped, which would hide the domain violation.
    #[error("Square root of interval [{lo}, {hi}] with negative lower bound")]
    NegativeSqrtDomain { lo: Real, hi: Real },

    #[error("Invalid interval construction: lo = {lo} > hi = {hi}")]
    InvalidConstruction { lo: Real, hi: Real },

    #[error("Integer {0} is not exactly representable as f64")]
    IntegerNotRepresentable(u64),

    #[error("Cannot parse decimal literal: {what}")]
    DecimalParse { what: String },

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}
