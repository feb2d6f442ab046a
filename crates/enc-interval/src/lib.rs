//! Scalar real intervals with outward-rounded arithmetic.
//!
//! An [`Interval`] is a pair of `f64` bounds denoting the closed real set
//! `[lo, hi]`. Every arithmetic operation rounds its result bounds outward,
//! so an interval enclosing the exact operands always encloses the exact
//! result. This is the property that turns floating-point computation into
//! a proof.

pub mod convert;
pub mod error;
pub mod interval;
pub mod report;

pub use error::{IntervalError, IntervalResult};
pub use interval::Interval;
