//! Write-once per-step state buffer.
//!
//! The buffer is sized once and filled strictly in index order. Each index is
//! written exactly once; earlier entries can never be changed, so step `k` can
//! only ever have read steps `0..k`.

use crate::error::{SimError, SimResult};

/// Values produced by one step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepRecord {
    /// Angular speed (rad/s)
    pub speed: f64,
    /// Angular acceleration (rad/s²), integrated into the next step's speed
    pub acceleration: f64,
    pub tsr: f64,
    /// Hydrodynamic torque (N·m)
    pub hydro_torque: f64,
    /// Generator torque (N·m)
    pub control_torque: f64,
    /// Brake torque (N·m)
    pub brake_torque: f64,
    /// Thrust force (N)
    pub thrust: f64,
    /// Attenuated inflow speed at the hub (m/s)
    pub inflow_adjusted: f64,
    /// Hub depth below the surface (m)
    pub hub_depth: f64,
    /// Mooring angle from vertical (rad)
    pub mooring_angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesState {
    speed: Vec<f64>,
    acceleration: Vec<f64>,
    tsr: Vec<f64>,
    hydro_torque: Vec<f64>,
    control_torque: Vec<f64>,
    brake_torque: Vec<f64>,
    thrust: Vec<f64>,
    inflow_adjusted: Vec<f64>,
    hub_depth: Vec<f64>,
    mooring_angle: Vec<f64>,
    filled: usize,
}

impl TimeSeriesState {
    /// Zero-filled buffer for `len` steps.
    pub fn new(len: usize) -> Self {
        Self {
            speed: vec![0.0; len],
            acceleration: vec![0.0; len],
            tsr: vec![0.0; len],
            hydro_torque: vec![0.0; len],
            control_torque: vec![0.0; len],
            brake_torque: vec![0.0; len],
            thrust: vec![0.0; len],
            inflow_adjusted: vec![0.0; len],
            hub_depth: vec![0.0; len],
            mooring_angle: vec![0.0; len],
            filled: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.speed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speed.is_empty()
    }

    /// Number of steps written so far.
    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn is_complete(&self) -> bool {
        self.filled == self.len()
    }

    /// Write step `k`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Invariant`] unless `k` is the next unwritten index.
    pub fn record(&mut self, k: usize, step: &StepRecord) -> SimResult<()> {
        if k != self.filled {
            return Err(SimError::Invariant {
                what: "steps must be recorded once each, in index order",
            });
        }
        if k >= self.len() {
            return Err(SimError::Invariant {
                what: "step index beyond the end of the run",
            });
        }
        self.speed[k] = step.speed;
        self.acceleration[k] = step.acceleration;
        self.tsr[k] = step.tsr;
        self.hydro_torque[k] = step.hydro_torque;
        self.control_torque[k] = step.control_torque;
        self.brake_torque[k] = step.brake_torque;
        self.thrust[k] = step.thrust;
        self.inflow_adjusted[k] = step.inflow_adjusted;
        self.hub_depth[k] = step.hub_depth;
        self.mooring_angle[k] = step.mooring_angle;
        self.filled += 1;
        Ok(())
    }

    /// Most recently written step.
    pub fn last(&self) -> Option<StepRecord> {
        let k = self.filled.checked_sub(1)?;
        Some(StepRecord {
            speed: self.speed[k],
            acceleration: self.acceleration[k],
            tsr: self.tsr[k],
            hydro_torque: self.hydro_torque[k],
            control_torque: self.control_torque[k],
            brake_torque: self.brake_torque[k],
            thrust: self.thrust[k],
            inflow_adjusted: self.inflow_adjusted[k],
            hub_depth: self.hub_depth[k],
            mooring_angle: self.mooring_angle[k],
        })
    }

    pub fn speed(&self) -> &[f64] {
        &self.speed
    }

    pub fn acceleration(&self) -> &[f64] {
        &self.acceleration
    }

    pub fn tsr(&self) -> &[f64] {
        &self.tsr
    }

    pub fn hydro_torque(&self) -> &[f64] {
        &self.hydro_torque
    }

    pub fn control_torque(&self) -> &[f64] {
        &self.control_torque
    }

    pub fn brake_torque(&self) -> &[f64] {
        &self.brake_torque
    }

    pub fn thrust(&self) -> &[f64] {
        &self.thrust
    }

    pub fn inflow_adjusted(&self) -> &[f64] {
        &self.inflow_adjusted
    }

    pub fn hub_depth(&self) -> &[f64] {
        &self.hub_depth
    }

    pub fn mooring_angle(&self) -> &[f64] {
        &self.mooring_angle
    }
}
