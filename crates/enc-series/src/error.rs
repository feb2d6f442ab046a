//! Error types for series enclosure computations.

use enc_interval::IntervalError;
use thiserror::Error;

pub type SeriesResult<T> = Result<T, SeriesError>;

#[derive(Error, Debug)]
pub enum SeriesError {
    /// Term counts must be positive and small enough that both `N` and
    /// `N + 1` convert to `f64` exactly.
    #[error("Invalid term count: {terms} ({why})")]
    InvalidTermCount { terms: u64, why: &'static str },

    #[error("Interval error: {0}")]
    Interval(#[from] IntervalError),
}
