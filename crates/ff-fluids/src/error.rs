//! Property lookup errors.

use thiserror::Error;

/// Result type for property lookups.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while resolving refrigerant properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative pressure, quality outside [0,1], etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Query falls outside the valid phase envelope or near the critical point.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Query pair or output not supported by this backend.
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    /// Backend (CoolProp) error.
    #[error("Backend error: {message}")]
    Backend { message: String },
}
