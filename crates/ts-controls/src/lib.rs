//! Rotor torque control for tidal turbines.
//!
//! A control law turns the rotor's current operating point (speed, inflow,
//! tip-speed ratio, hydrodynamic torque) into a generator torque command and
//! an optional brake torque. Two laws are supported:
//!
//! - **Optimal TSR**: maximum-power-point tracking, `Tc = Kopt · ω²`
//! - **Constant speed**: the generator absorbs exactly the hydrodynamic torque
//!
//! Both share the rated-power and cut-in clamps in [`PowerLimits`]. The law is
//! chosen once and dispatched per step.

pub mod error;
pub mod law;
pub mod limits;

pub use error::{ControlError, ControlResult};
pub use law::{
    ConstantSpeed, ControlLaw, Controller, OperatingPoint, OptimalTsr, TorqueCommand,
    optimal_torque_gain,
};
pub use limits::PowerLimits;
