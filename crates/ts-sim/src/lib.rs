//! Time-domain simulation of a submerged tidal rotor.
//!
//! Provides:
//! - Run configuration and up-front validation
//! - Write-once per-step state buffer
//! - Rotor torque, thrust and shaft dynamics
//! - Constant-speed operating point search (grid scan + bounded Brent)
//! - Explicit Euler time stepper with depth feedback for cable moorings
//! - Power accounting, named result series and run summary
//! - Parallel parameter sweeps

pub mod config;
pub mod constant_speed;
pub mod error;
pub mod power;
pub mod results;
pub mod rotor;
pub mod state;
pub mod stepper;
pub mod sweep;

pub use config::{AttachmentMethod, ControlStrategy, DEFAULT_INERTIA, SimulationConfig};
pub use constant_speed::{ConstantSpeedSolution, ConstantSpeedSolver};
pub use error::{SimError, SimResult};
pub use power::PowerSeries;
pub use results::{RunSummary, SimulationResults};
pub use rotor::RotorDynamics;
pub use state::{StepRecord, TimeSeriesState};
pub use stepper::{Simulation, simulate};
pub use sweep::{SweepOutcome, run_sweep};
