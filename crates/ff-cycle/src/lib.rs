//! ff-cycle: the four-state vapor-compression refrigeration cycle solver.
//!
//! Takes validated [`OperatingParameters`] and a property provider, and
//! produces a [`CycleResult`]: four fully resolved state points plus the
//! cycle KPIs (compressor work, evaporator heat, COP, discharge
//! temperature). Compression is non-ideal via an isentropic efficiency;
//! expansion is isenthalpic. Physical-law findings that do not break the
//! energy balance are attached as [`CycleWarning`]s rather than errors.

pub mod error;
pub mod params;
pub mod solver;
pub mod state;

pub use error::{CycleError, SolveResult};
pub use params::OperatingParameters;
pub use solver::solve_cycle;
pub use state::{CycleResult, CycleWarning, StateLabel, ThermodynamicState};
