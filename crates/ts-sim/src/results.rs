//! Named result series and the run summary.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::config::{AttachmentMethod, ControlStrategy, SimulationConfig};
use crate::power::PowerSeries;
use crate::state::TimeSeriesState;
use ts_core::numeric::trapezoid;
use ts_core::units::J_PER_KWH;

/// Series names in export column order.
pub const SERIES_NAMES: [&str; 17] = [
    "time",
    "inflow",
    "inflow_adjusted",
    "hub_depth",
    "mooring_angle",
    "speed",
    "acceleration",
    "tsr",
    "hydro_torque",
    "control_torque",
    "brake_torque",
    "thrust",
    "p_hydro",
    "p_fluid",
    "p_unc",
    "p_mech",
    "p_elec",
];

/// Scalar figures for downstream cost and constraint stages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub samples: usize,
    /// Elapsed simulated time (s)
    pub duration: f64,
    /// Largest thrust magnitude (N)
    pub peak_thrust: f64,
    /// Time-averaged electrical power (W)
    pub mean_electrical_power: f64,
    /// Electrical energy delivered (J)
    pub energy_j: f64,
    pub energy_kwh: f64,
    /// Mean electrical power over rated power
    pub capacity_factor: f64,
    /// Shallowest hub depth reached (m)
    pub min_hub_depth: f64,
    /// Largest mooring angle (rad)
    pub max_mooring_angle: f64,
    /// In-water weight of rotor plus power take-off (N)
    pub turbine_weight: f64,
    /// Operating speed chosen for the constant-speed strategy (rad/s)
    pub constant_speed: Option<f64>,
}

/// Output of one run: state and power series aligned on the time index.
#[derive(Debug, Clone)]
pub struct SimulationResults {
    pub strategy: ControlStrategy,
    pub attachment: AttachmentMethod,
    pub time: Vec<f64>,
    /// Raw surface inflow (m/s)
    pub inflow: Vec<f64>,
    pub state: TimeSeriesState,
    pub power: PowerSeries,
    pub summary: RunSummary,
}

impl SimulationResults {
    pub(crate) fn new(
        config: &SimulationConfig,
        state: TimeSeriesState,
        power: PowerSeries,
        turbine_weight: f64,
        constant_speed: Option<f64>,
    ) -> Self {
        let time = config.time.clone();
        let duration = time[time.len() - 1] - time[0];
        let energy_j = trapezoid(&power.electrical, &time);
        let mean_electrical_power = energy_j / duration;

        let peak_thrust = state.thrust().iter().fold(0.0_f64, |m, f| m.max(f.abs()));
        let min_hub_depth = state
            .hub_depth()
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let max_mooring_angle = state
            .mooring_angle()
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        let summary = RunSummary {
            samples: time.len(),
            duration,
            peak_thrust,
            mean_electrical_power,
            energy_j,
            energy_kwh: energy_j / J_PER_KWH,
            capacity_factor: mean_electrical_power / config.rated_power.value,
            min_hub_depth,
            max_mooring_angle,
            turbine_weight,
            constant_speed,
        };

        Self {
            strategy: config.strategy,
            attachment: config.attachment,
            time,
            inflow: config.inflow.clone(),
            state,
            power,
            summary,
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Look up one series by name.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        let series: &[f64] = match name {
            "time" => &self.time,
            "inflow" => &self.inflow,
            "inflow_adjusted" => self.state.inflow_adjusted(),
            "hub_depth" => self.state.hub_depth(),
            "mooring_angle" => self.state.mooring_angle(),
            "speed" => self.state.speed(),
            "acceleration" => self.state.acceleration(),
            "tsr" => self.state.tsr(),
            "hydro_torque" => self.state.hydro_torque(),
            "control_torque" => self.state.control_torque(),
            "brake_torque" => self.state.brake_torque(),
            "thrust" => self.state.thrust(),
            "p_hydro" => &self.power.hydro,
            "p_fluid" => &self.power.fluid,
            "p_unc" => &self.power.unconstrained,
            "p_mech" => &self.power.mechanical,
            "p_elec" => &self.power.electrical,
            _ => return None,
        };
        Some(series)
    }

    /// Every series keyed by name.
    pub fn series(&self) -> BTreeMap<&'static str, &[f64]> {
        SERIES_NAMES
            .iter()
            .filter_map(|&name| self.get(name).map(|s| (name, s)))
            .collect()
    }

    /// One row per sample, one column per series.
    pub fn to_csv(&self) -> String {
        let columns: Vec<&[f64]> = SERIES_NAMES.iter().filter_map(|n| self.get(n)).collect();
        let mut csv = SERIES_NAMES.join(",");
        csv.push('\n');
        for k in 0..self.len() {
            for (i, column) in columns.iter().enumerate() {
                if i > 0 {
                    csv.push(',');
                }
                let _ = write!(csv, "{}", column[k]);
            }
            csv.push('\n');
        }
        csv
    }
}
