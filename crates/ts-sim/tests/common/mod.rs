#![allow(dead_code)]

use std::sync::Arc;

use ts_core::PhysicalContext;
use ts_core::units::{kg_m2, m, mps, watts};
use ts_hydro::ParabolicRotor;
use ts_sim::{AttachmentMethod, ControlStrategy, DEFAULT_INERTIA, SimulationConfig};

pub const RADIUS: f64 = 2.0;
pub const CABLE_DEPTH: f64 = 10.0;
pub const MOORING_DEPTH: f64 = 40.0;
pub const CUT_IN: f64 = 0.5;
pub const EFFICIENCY: f64 = 0.9;

pub fn rotor() -> ParabolicRotor {
    ParabolicRotor::new(0.45, 4.0, 0.9).unwrap()
}

/// Rigid, optimal-TSR configuration sampled once per second.
pub fn config(inflow: Vec<f64>) -> SimulationConfig {
    let rotor = rotor();
    let n = inflow.len();
    SimulationConfig {
        radius: m(RADIUS),
        rated_power: watts(1.0e5),
        cable_depth: m(CABLE_DEPTH),
        mooring_depth: m(MOORING_DEPTH),
        inertia: kg_m2(DEFAULT_INERTIA),
        efficiency: EFFICIENCY,
        cut_in_speed: mps(CUT_IN),
        brake_enabled: false,
        strategy: ControlStrategy::Optimal,
        attachment: AttachmentMethod::SolidBar,
        inflow,
        time: (0..n).map(|k| k as f64).collect(),
        optimum: rotor.optimal_point(),
        curves: Arc::new(rotor),
        context: PhysicalContext::default(),
    }
}

/// Surface speed swinging between 3 and 0 m/s with a 50 s period, starting at the peak.
pub fn oscillating_inflow(n: usize) -> Vec<f64> {
    (0..n)
        .map(|k| 1.5 + 1.5 * (2.0 * std::f64::consts::PI * k as f64 / 50.0).cos())
        .map(|u: f64| u.max(0.0))
        .collect()
}
