//! Scenario file schema.

use serde::{Deserialize, Serialize};
use ts_sim::{AttachmentMethod, ControlStrategy, DEFAULT_INERTIA};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub environment: EnvironmentDef,
    pub rotor: RotorDef,
    pub mooring: MooringDef,
    pub control: ControlDef,
    pub inflow: InflowDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentDef {
    #[serde(default = "default_density")]
    pub density_kg_m3: f64,
    #[serde(default = "default_gravity")]
    pub gravity_m_s2: f64,
}

impl Default for EnvironmentDef {
    fn default() -> Self {
        Self {
            density_kg_m3: default_density(),
            gravity_m_s2: default_gravity(),
        }
    }
}

fn default_density() -> f64 {
    1025.0
}

fn default_gravity() -> f64 {
    9.8
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RotorDef {
    pub radius_m: f64,
    pub rated_power_w: f64,
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,
    #[serde(default = "default_inertia")]
    pub inertia_kg_m2: f64,
    pub performance: PerformanceDef,
}

fn default_efficiency() -> f64 {
    1.0
}

fn default_inertia() -> f64 {
    DEFAULT_INERTIA
}

/// Rotor performance model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum PerformanceDef {
    /// Closed-form parabolic Cp curve peaking at `tsr_opt`.
    Parabolic {
        cp_max: f64,
        tsr_opt: f64,
        ct_max: f64,
        /// TSR cap; defaults to where Cp returns to zero (`2 · tsr_opt`)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tsr_max: Option<f64>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MooringDef {
    pub attachment: AttachmentMethod,
    pub cable_depth_m: f64,
    pub mooring_depth_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlDef {
    pub strategy: ControlStrategy,
    pub cut_in_speed_m_s: f64,
    #[serde(default)]
    pub brake: bool,
}

/// Surface inflow speed over time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum InflowDef {
    Constant {
        speed_m_s: f64,
        duration_s: f64,
        time_step_s: f64,
    },
    /// `|mean + amplitude · cos(2π t / period + phase)|`; ebb and flood both drive the rotor.
    Harmonic {
        mean_m_s: f64,
        amplitude_m_s: f64,
        period_s: f64,
        duration_s: f64,
        time_step_s: f64,
        #[serde(default)]
        phase_rad: f64,
    },
    Samples {
        time_s: Vec<f64>,
        speed_m_s: Vec<f64>,
    },
}

impl InflowDef {
    /// Sample times and surface speeds.
    pub fn series(&self) -> (Vec<f64>, Vec<f64>) {
        match self {
            InflowDef::Constant {
                speed_m_s,
                duration_s,
                time_step_s,
            } => {
                let time = uniform_times(*duration_s, *time_step_s);
                let speed = vec![*speed_m_s; time.len()];
                (time, speed)
            }
            InflowDef::Harmonic {
                mean_m_s,
                amplitude_m_s,
                period_s,
                duration_s,
                time_step_s,
                phase_rad,
            } => {
                let time = uniform_times(*duration_s, *time_step_s);
                let omega = 2.0 * std::f64::consts::PI / period_s;
                let speed = time
                    .iter()
                    .map(|&t| (mean_m_s + amplitude_m_s * (omega * t + phase_rad).cos()).abs())
                    .collect();
                (time, speed)
            }
            InflowDef::Samples { time_s, speed_m_s } => (time_s.clone(), speed_m_s.clone()),
        }
    }
}

fn uniform_times(duration: f64, step: f64) -> Vec<f64> {
    if !(duration.is_finite() && step.is_finite() && duration >= 0.0 && step > 0.0) {
        return Vec::new();
    }
    let n = (duration / step + 1e-9).floor() as usize + 1;
    (0..n).map(|k| k as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn constant_inflow_series() {
        let inflow = InflowDef::Constant {
            speed_m_s: 2.0,
            duration_s: 10.0,
            time_step_s: 2.5,
        };
        let (t, u) = inflow.series();
        assert_eq!(t, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(u, vec![2.0; 5]);
    }

    #[test]
    fn harmonic_inflow_is_rectified() {
        let inflow = InflowDef::Harmonic {
            mean_m_s: 0.0,
            amplitude_m_s: 2.0,
            period_s: 4.0,
            duration_s: 4.0,
            time_step_s: 1.0,
            phase_rad: 0.0,
        };
        let (t, u) = inflow.series();
        assert_eq!(t.len(), 5);
        assert!(nearly_equal(u[0], 2.0, Tolerances::default()));
        assert!(nearly_equal(u[2], 2.0, Tolerances::default()));
        assert!(u.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn bad_step_gives_empty_series() {
        let inflow = InflowDef::Constant {
            speed_m_s: 2.0,
            duration_s: 10.0,
            time_step_s: 0.0,
        };
        assert!(inflow.series().0.is_empty());
    }
}
