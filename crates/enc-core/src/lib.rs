//! enc-core: stable foundation for the enclosure engine.
//!
//! Contains:
//! - numeric (Real + float decomposition helpers)
//! - rounding (directed-rounding scalar primitives)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod rounding;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
