//! Telemetry generator errors.

use thiserror::Error;

/// Result type for telemetry generation.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Fatal configuration errors, raised before any computation starts.
///
/// Per-tick solver failures are not errors at this level: the generator
/// logs them and omits the tick, yielding a partial but valid sequence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TelemetryError {
    #[error("Invalid generator configuration: {what}")]
    InvalidConfig { what: &'static str },
}
