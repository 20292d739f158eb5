//! ff-telemetry: synthetic cold-storage telemetry generation.
//!
//! Drives the cycle solver across a simulated time grid and equipment fleet,
//! layering in:
//! - an ambient-temperature model (seasonal + diurnal + Gaussian noise)
//! - progressive condenser fouling, door-traffic excursions, and compressor
//!   efficiency jitter
//! - threshold classification of every sample into NORMAL/WARNING/ALARM
//!
//! All randomness flows from an explicit seed through per-cell derived
//! sub-seeds, so a run is reproducible and the serial and parallel drivers
//! agree bit-for-bit. Persistence of the produced records is out of scope;
//! the generator hands back an ordered `Vec<TelemetryRecord>`.

pub mod classify;
pub mod config;
pub mod degradation;
pub mod environment;
pub mod error;
pub mod generator;
pub mod record;

pub use classify::{OperatingState, classify};
pub use config::{EquipmentUnit, GeneratorConfig};
pub use degradation::{DegradationModel, DegradedParameters};
pub use environment::AmbientModel;
pub use error::{TelemetryError, TelemetryResult};
pub use generator::TelemetryGenerator;
pub use record::TelemetryRecord;
