//! Control laws and the per-step torque command.

use std::f64::consts::PI;

use crate::error::{ControlError, ControlResult};
use crate::limits::PowerLimits;
use serde::{Deserialize, Serialize};
use ts_core::PhysicalContext;
use ts_core::units::Length;
use ts_hydro::OptimalPoint;

/// Maximum-power-point torque gain.
///
/// ```text
/// Kopt = 0.5 · ρ · π · R⁵ · Cp_opt / TSR_opt³
/// ```
pub fn optimal_torque_gain(ctx: &PhysicalContext, radius: Length, optimum: &OptimalPoint) -> f64 {
    let r = radius.value;
    0.5 * ctx.rho() * PI * r.powi(5) * optimum.cp_opt / optimum.tsr_opt.powi(3)
}

/// Rotor state seen by the controller at one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Angular speed (rad/s)
    pub speed: f64,
    /// Attenuated inflow speed at the hub (m/s)
    pub inflow: f64,
    /// Tip-speed ratio
    pub tsr: f64,
    /// Hydrodynamic torque on the rotor (N·m)
    pub hydro_torque: f64,
}

/// Torques applied against the rotor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TorqueCommand {
    /// Generator torque (N·m)
    pub control: f64,
    /// Brake torque (N·m), zero when the brake is disabled
    pub brake: f64,
}

/// Maximum-power-point tracking at the optimal tip-speed ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalTsr {
    /// Torque gain, `Tc = kopt · ω²`
    pub kopt: f64,
    pub tsr_opt: f64,
    /// Rotor radius (m)
    pub radius: f64,
}

impl OptimalTsr {
    /// # Errors
    /// Returns error if the radius is not strictly positive.
    pub fn new(
        ctx: &PhysicalContext,
        radius: Length,
        optimum: &OptimalPoint,
    ) -> ControlResult<Self> {
        if !(radius.value.is_finite() && radius.value > 0.0) {
            return Err(ControlError::InvalidArg {
                what: "rotor radius must be positive",
            });
        }
        Ok(Self {
            kopt: optimal_torque_gain(ctx, radius, optimum),
            tsr_opt: optimum.tsr_opt,
            radius: radius.value,
        })
    }
}

/// Fixed rotor speed; the generator absorbs the hydrodynamic torque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantSpeed {
    /// Operating speed (rad/s)
    pub speed: f64,
}

impl ConstantSpeed {
    /// # Errors
    /// Returns error if the speed is negative or not finite.
    pub fn new(speed: f64) -> ControlResult<Self> {
        if !(speed.is_finite() && speed >= 0.0) {
            return Err(ControlError::NonPhysical {
                what: "constant operating speed must be finite and non-negative",
            });
        }
        Ok(Self { speed })
    }
}

/// Control strategy, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlLaw {
    OptimalTsr(OptimalTsr),
    ConstantSpeed(ConstantSpeed),
}

impl ControlLaw {
    /// Rotor speed at the first step.
    pub fn initial_speed(&self, first_inflow: f64) -> f64 {
        match self {
            ControlLaw::OptimalTsr(law) => law.tsr_opt * first_inflow / law.radius,
            ControlLaw::ConstantSpeed(law) => law.speed,
        }
    }

    /// Generator torque the law asks for before any limit is applied.
    pub fn demanded_torque(&self, op: &OperatingPoint) -> f64 {
        match self {
            ControlLaw::OptimalTsr(law) => law.kopt * op.speed * op.speed,
            ControlLaw::ConstantSpeed(_) => op.hydro_torque,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ControlLaw::OptimalTsr(_) => "optimal",
            ControlLaw::ConstantSpeed(_) => "constant_speed",
        }
    }
}

/// Control law plus drivetrain limits and brake setting.
#[derive(Debug, Clone, PartialEq)]
pub struct Controller {
    pub law: ControlLaw,
    pub limits: PowerLimits,
    pub brake_enabled: bool,
}

impl Controller {
    pub fn new(law: ControlLaw, limits: PowerLimits, brake_enabled: bool) -> Self {
        Self {
            law,
            limits,
            brake_enabled,
        }
    }

    /// Compute the generator and brake torque for one step.
    ///
    /// The brake, when enabled, takes up whatever part of the demanded torque
    /// the rated-power and cut-in clamps removed from the generator.
    pub fn command(&self, op: &OperatingPoint) -> TorqueCommand {
        let demanded = self.law.demanded_torque(op);
        let control = self.limits.clamp(demanded, op.speed, op.inflow);
        let brake = if self.brake_enabled {
            demanded - control
        } else {
            0.0
        };
        TorqueCommand { control, brake }
    }
}
