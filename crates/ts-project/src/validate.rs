//! Scenario validation logic.

use crate::schema::{InflowDef, PerformanceDef, Scenario};

/// Newest scenario format this crate reads.
pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}

fn require_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be non-negative"))
    }
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }
    if scenario.name.trim().is_empty() {
        return Err(invalid("name", "", "must not be empty"));
    }

    require_positive("environment.density_kg_m3", scenario.environment.density_kg_m3)?;
    require_positive("environment.gravity_m_s2", scenario.environment.gravity_m_s2)?;

    let rotor = &scenario.rotor;
    require_positive("rotor.radius_m", rotor.radius_m)?;
    require_positive("rotor.rated_power_w", rotor.rated_power_w)?;
    require_positive("rotor.inertia_kg_m2", rotor.inertia_kg_m2)?;
    if !(rotor.efficiency > 0.0 && rotor.efficiency <= 1.0) {
        return Err(invalid("rotor.efficiency", rotor.efficiency, "must be in (0, 1]"));
    }
    match &rotor.performance {
        PerformanceDef::Parabolic {
            cp_max,
            tsr_opt,
            ct_max,
            tsr_max,
        } => {
            if !(*cp_max > 0.0 && *cp_max <= 16.0 / 27.0) {
                return Err(invalid(
                    "rotor.performance.cp_max",
                    cp_max,
                    "must be in (0, 16/27]",
                ));
            }
            require_positive("rotor.performance.tsr_opt", *tsr_opt)?;
            require_positive("rotor.performance.ct_max", *ct_max)?;
            if let Some(cap) = tsr_max {
                if !(cap.is_finite() && cap >= tsr_opt) {
                    return Err(invalid(
                        "rotor.performance.tsr_max",
                        cap,
                        "must not be below tsr_opt",
                    ));
                }
            }
        }
    }

    let mooring = &scenario.mooring;
    require_positive("mooring.mooring_depth_m", mooring.mooring_depth_m)?;
    require_non_negative("mooring.cable_depth_m", mooring.cable_depth_m)?;
    if mooring.cable_depth_m > mooring.mooring_depth_m {
        return Err(invalid(
            "mooring.cable_depth_m",
            mooring.cable_depth_m,
            "must not exceed mooring_depth_m",
        ));
    }

    require_non_negative("control.cut_in_speed_m_s", scenario.control.cut_in_speed_m_s)?;

    validate_inflow(&scenario.inflow)
}

fn validate_inflow(inflow: &InflowDef) -> Result<(), ValidationError> {
    match inflow {
        InflowDef::Constant {
            speed_m_s,
            duration_s,
            time_step_s,
        } => {
            require_non_negative("inflow.speed_m_s", *speed_m_s)?;
            require_positive("inflow.time_step_s", *time_step_s)?;
            require_duration(*duration_s, *time_step_s)
        }
        InflowDef::Harmonic {
            mean_m_s,
            amplitude_m_s,
            period_s,
            duration_s,
            time_step_s,
            phase_rad,
        } => {
            if !(mean_m_s.is_finite() && amplitude_m_s.is_finite() && phase_rad.is_finite()) {
                return Err(invalid(
                    "inflow",
                    format!("{mean_m_s}, {amplitude_m_s}, {phase_rad}"),
                    "harmonic parameters must be finite",
                ));
            }
            require_positive("inflow.period_s", *period_s)?;
            require_positive("inflow.time_step_s", *time_step_s)?;
            require_duration(*duration_s, *time_step_s)
        }
        InflowDef::Samples { time_s, speed_m_s } => {
            if time_s.len() < 2 {
                return Err(invalid("inflow.time_s", time_s.len(), "needs at least two samples"));
            }
            if time_s.len() != speed_m_s.len() {
                return Err(invalid(
                    "inflow.speed_m_s",
                    speed_m_s.len(),
                    "must have one speed per time sample",
                ));
            }
            if !time_s.windows(2).all(|w| w[1] > w[0]) {
                return Err(invalid("inflow.time_s", "", "must be strictly increasing"));
            }
            for (k, &u) in speed_m_s.iter().enumerate() {
                require_non_negative(&format!("inflow.speed_m_s[{k}]"), u)?;
            }
            Ok(())
        }
    }
}

fn require_duration(duration: f64, step: f64) -> Result<(), ValidationError> {
    if !(duration.is_finite() && duration >= step) {
        return Err(invalid(
            "inflow.duration_s",
            duration,
            "must cover at least one time step",
        ));
    }
    Ok(())
}
