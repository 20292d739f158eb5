//! ff-fluids: refrigerant property lookups for frostflow.
//!
//! Provides:
//! - Property and refrigerant identifiers
//! - The `PropertyProvider` trait: a narrow two-properties-in, one-out
//!   lookup interface over a real equation of state
//! - An embedded R-134a saturation-table backend (`TableProvider`)
//! - A CoolProp backend (`CoolPropProvider`) behind the `coolprop` feature
//!
//! # Architecture
//!
//! The `PropertyProvider` trait isolates the cycle solver and the telemetry
//! generator from any particular property backend: the solver compiles
//! against the trait alone, so a test double or a full CoolProp adapter can
//! be swapped in without touching cycle code. Implementations must tolerate
//! concurrent read-only use; the generator shares one provider handle across
//! its parallel workers.

pub mod error;
pub mod property;
pub mod provider;
pub mod table;

#[cfg(feature = "coolprop")]
pub mod coolprop;

// Re-exports for ergonomics
pub use error::{FluidError, FluidResult};
pub use property::{Property, Refrigerant};
pub use provider::PropertyProvider;
pub use table::TableProvider;

#[cfg(feature = "coolprop")]
pub use coolprop::CoolPropProvider;
