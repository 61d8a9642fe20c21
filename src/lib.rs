//! # Drift Ballistics
//!
//! Metric small-arms trajectory tables: velocity, energy, drop, wind drift,
//! time of flight and MOA/MIL corrections at fixed distance increments.
//!
//! The engine is a pure function of its input:
//!
//! ```
//! use drift_ballistics::{compute, TrajectoryInput};
//!
//! let table = compute(&TrajectoryInput::default()).unwrap();
//! assert_eq!(table[0].velocity, 823);
//! assert_eq!(table.last().unwrap().distance, 450);
//! ```

// Re-export the main types and functions
pub use angle_calculations::{zero_angle, AngularCorrection, ZeroRangePolicy};
pub use atmosphere::AtmosphericCorrection;
pub use error::BallisticsError;
pub use inputs::TrajectoryInput;
pub use output::OutputFormat;
pub use trajectory_sampling::TrajectorySample;
pub use trajectory_solver::{compute, SolverOptions, TrajectorySolver};
pub use units::{UnitConverter, UnitSystem};
pub use wind::WindComponents;

// Module declarations
mod angle_calculations;
mod atmosphere;
mod constants;
mod error;
mod inputs;
mod integration;
pub mod output;
pub mod server;
mod trajectory_sampling;
mod trajectory_solver;
mod units;
mod wind;
