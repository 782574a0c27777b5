//! Scenario to simulation configuration.

use std::sync::Arc;

use crate::schema::{PerformanceDef, Scenario};
use crate::validate::validate_scenario;
use crate::{ProjectError, ProjectResult};
use ts_core::PhysicalContext;
use ts_core::units::{kg_m2, m, mps, watts};
use ts_hydro::{OptimalPoint, ParabolicRotor, PerformanceCurves};
use ts_sim::SimulationConfig;

/// Build a [`SimulationConfig`] from a scenario.
///
/// # Errors
///
/// Returns error if the scenario fails validation or a model rejects its parameters.
pub fn compile_scenario(scenario: &Scenario) -> ProjectResult<SimulationConfig> {
    validate_scenario(scenario)?;

    let (curves, optimum): (Arc<dyn PerformanceCurves + Send + Sync>, OptimalPoint) =
        match &scenario.rotor.performance {
            PerformanceDef::Parabolic {
                cp_max,
                tsr_opt,
                ct_max,
                tsr_max,
            } => {
                let rotor = ParabolicRotor::new(*cp_max, *tsr_opt, *ct_max)
                    .map_err(|e| ProjectError::Compile { what: e.to_string() })?;
                let mut optimum = rotor.optimal_point();
                if let Some(cap) = tsr_max {
                    optimum = OptimalPoint::new(optimum.cp_opt, optimum.tsr_opt, *cap)
                        .map_err(|e| ProjectError::Compile { what: e.to_string() })?;
                }
                (Arc::new(rotor), optimum)
            }
        };

    let (time, inflow) = scenario.inflow.series();
    let env = &scenario.environment;

    Ok(SimulationConfig {
        radius: m(scenario.rotor.radius_m),
        rated_power: watts(scenario.rotor.rated_power_w),
        cable_depth: m(scenario.mooring.cable_depth_m),
        mooring_depth: m(scenario.mooring.mooring_depth_m),
        inertia: kg_m2(scenario.rotor.inertia_kg_m2),
        efficiency: scenario.rotor.efficiency,
        cut_in_speed: mps(scenario.control.cut_in_speed_m_s),
        brake_enabled: scenario.control.brake,
        strategy: scenario.control.strategy,
        attachment: scenario.mooring.attachment,
        inflow,
        time,
        optimum,
        curves,
        context: PhysicalContext::with_fluid(env.density_kg_m3, env.gravity_m_s2),
    })
}
