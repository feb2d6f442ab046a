//! Rigorous enclosures of pi from the Basel series.
//!
//! Builds on the interval engine to turn `sum 1/n^2 = pi^2/6` into a proved
//! two-sided bound: a finite partial sum computed term-by-term in interval
//! arithmetic, an analytic tail enclosure from the integral test, and an
//! interval square root to recover pi.

pub mod basel;
pub mod error;

pub use basel::{SumOrder, partial_sum, pi_enclosure, tail_bound};
pub use error::{SeriesError, SeriesResult};
