//! Run configuration.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use ts_core::PhysicalContext;
use ts_core::numeric::{ensure_finite, ensure_same_len, is_strictly_increasing};
use ts_core::units::{Inertia, Length, Power, Velocity};
use ts_hydro::{OptimalPoint, PerformanceCurves};

/// Rotor plus drivetrain moment of inertia (kg·m²) used when none is given.
pub const DEFAULT_INERTIA: f64 = 1.0e6;

/// How the generator torque is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlStrategy {
    /// Track the optimal tip-speed ratio.
    Optimal,
    /// Hold one speed for the whole run, chosen before the march.
    ConstantSpeed,
}

/// How the rotor is held in the water column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentMethod {
    /// Cable mooring; hub depth responds to thrust.
    Cable,
    /// Rigid attachment at the cable depth.
    SolidBar,
}

impl fmt::Display for ControlStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlStrategy::Optimal => write!(f, "optimal"),
            ControlStrategy::ConstantSpeed => write!(f, "constant_speed"),
        }
    }
}

impl fmt::Display for AttachmentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentMethod::Cable => write!(f, "cable"),
            AttachmentMethod::SolidBar => write!(f, "solid_bar"),
        }
    }
}

/// Everything a run needs; not modified once the run starts.
#[derive(Clone)]
pub struct SimulationConfig {
    pub radius: Length,
    pub rated_power: Power,
    /// Hub depth below the surface with no thrust loading
    pub cable_depth: Length,
    /// Seabed/mooring reference depth for the flow profile
    pub mooring_depth: Length,
    pub inertia: Inertia,
    /// Drivetrain efficiency, in (0, 1]
    pub efficiency: f64,
    pub cut_in_speed: Velocity,
    pub brake_enabled: bool,
    pub strategy: ControlStrategy,
    pub attachment: AttachmentMethod,
    /// Surface inflow speed per sample (m/s)
    pub inflow: Vec<f64>,
    /// Sample times (s), strictly increasing
    pub time: Vec<f64>,
    pub optimum: OptimalPoint,
    pub curves: Arc<dyn PerformanceCurves + Send + Sync>,
    pub context: PhysicalContext,
}

impl fmt::Debug for SimulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationConfig")
            .field("radius", &self.radius.value)
            .field("rated_power", &self.rated_power.value)
            .field("cable_depth", &self.cable_depth.value)
            .field("mooring_depth", &self.mooring_depth.value)
            .field("inertia", &self.inertia.value)
            .field("efficiency", &self.efficiency)
            .field("cut_in_speed", &self.cut_in_speed.value)
            .field("brake_enabled", &self.brake_enabled)
            .field("strategy", &self.strategy)
            .field("attachment", &self.attachment)
            .field("samples", &self.time.len())
            .field("optimum", &self.optimum)
            .finish_non_exhaustive()
    }
}

fn positive(v: f64, what: &'static str) -> SimResult<()> {
    if ensure_finite(v, what)? > 0.0 {
        Ok(())
    } else {
        Err(SimError::config(format!("{what} must be positive, got {v}")))
    }
}

impl SimulationConfig {
    /// Number of samples in the run.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Check every field once, before any state is allocated.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Configuration`] on the first invalid field.
    pub fn validate(&self) -> SimResult<()> {
        positive(self.radius.value, "rotor radius")?;
        positive(self.rated_power.value, "rated power")?;
        positive(self.mooring_depth.value, "mooring depth")?;
        positive(self.inertia.value, "inertia")?;
        positive(self.context.rho(), "density")?;
        positive(self.context.g(), "gravity")?;

        let cable = self.cable_depth.value;
        if !(cable.is_finite() && cable >= 0.0 && cable <= self.mooring_depth.value) {
            return Err(SimError::config(format!(
                "cable depth {cable} must lie within [0, {}]",
                self.mooring_depth.value
            )));
        }
        if !(self.efficiency > 0.0 && self.efficiency <= 1.0) {
            return Err(SimError::config(format!(
                "efficiency must be in (0, 1], got {}",
                self.efficiency
            )));
        }
        let cut_in = ensure_finite(self.cut_in_speed.value, "cut-in speed")?;
        if cut_in < 0.0 {
            return Err(SimError::config(format!(
                "cut-in speed must be non-negative, got {cut_in}"
            )));
        }

        OptimalPoint::new(
            self.optimum.cp_opt,
            self.optimum.tsr_opt,
            self.optimum.tsr_max,
        )?;

        if self.time.len() < 2 {
            return Err(SimError::config(format!(
                "at least two time samples are required, got {}",
                self.time.len()
            )));
        }
        ensure_same_len("inflow series", self.time.len(), self.inflow.len())?;
        if self.time.iter().any(|t| !t.is_finite()) || !is_strictly_increasing(&self.time) {
            return Err(SimError::config(
                "time series must be finite and strictly increasing",
            ));
        }
        if let Some((k, u)) = self
            .inflow
            .iter()
            .enumerate()
            .find(|(_, u)| !(u.is_finite() && **u >= 0.0))
        {
            return Err(SimError::config(format!(
                "inflow speed at sample {k} must be finite and non-negative, got {u}"
            )));
        }
        Ok(())
    }
}
