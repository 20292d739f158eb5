//! ff-core: stable foundation for frostflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + interpolation helpers)

pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
pub use units::*;
