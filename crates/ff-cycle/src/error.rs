//! Cycle solver errors.

use ff_fluids::FluidError;
use thiserror::Error;

/// Result type for cycle computations.
pub type SolveResult<T> = Result<T, CycleError>;

/// Errors that abort a cycle solve.
///
/// Physical-law checks that do not invalidate the energy balance (entropy
/// ordering, flash quality range) are reported as [`crate::CycleWarning`]s
/// attached to the result instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// Malformed operating parameters; raised at validation time, never retried.
    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    /// The property provider could not resolve a query.
    #[error("Property lookup failed at {step}: {source}")]
    Property {
        step: &'static str,
        source: FluidError,
    },

    /// COP is undefined because compressor work is non-positive.
    #[error("Invalid cycle: {what}")]
    InvalidCycle { what: &'static str },
}

impl CycleError {
    pub(crate) fn at(step: &'static str) -> impl FnOnce(FluidError) -> CycleError {
        move |source| CycleError::Property { step, source }
    }
}
