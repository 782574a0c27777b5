//! Power series derived from a completed run.

use serde::Serialize;

use crate::error::{SimError, SimResult};
use crate::rotor::RotorDynamics;
use crate::state::TimeSeriesState;
use ts_hydro::PerformanceCurves;

/// Power per step (W), computed once from the frozen state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerSeries {
    /// Captured hydrodynamic power, `0.5·ρ·π·R²·U³·Cp(TSR)`
    pub hydro: Vec<f64>,
    /// Kinetic power through the disk, `0.5·ρ·π·R²·U³`
    pub fluid: Vec<f64>,
    /// Unconstrained maximum-power-point power, `Kopt·(U·TSR_opt/R)³`
    pub unconstrained: Vec<f64>,
    /// Shaft power into the generator, `ω·Tc`
    pub mechanical: Vec<f64>,
    /// Electrical output, `ω·Tc·η`
    pub electrical: Vec<f64>,
}

impl PowerSeries {
    /// # Errors
    ///
    /// Returns [`SimError::Invariant`] if the state has unwritten steps.
    pub fn compute(
        state: &TimeSeriesState,
        rotor: &RotorDynamics,
        curves: &dyn PerformanceCurves,
        kopt: f64,
        tsr_opt: f64,
        efficiency: f64,
    ) -> SimResult<Self> {
        if !state.is_complete() {
            return Err(SimError::Invariant {
                what: "power is derived only from a completed run",
            });
        }
        let inflow = state.inflow_adjusted();
        let cp = curves.cp_series(state.tsr());

        let hydro = inflow
            .iter()
            .zip(&cp)
            .map(|(&u, &c)| rotor.hydro_power(u, c))
            .collect();
        let fluid = inflow.iter().map(|&u| rotor.fluid_power(u)).collect();
        let unconstrained = inflow
            .iter()
            .map(|&u| kopt * (u * tsr_opt / rotor.radius).powi(3))
            .collect();
        let mechanical: Vec<f64> = state
            .speed()
            .iter()
            .zip(state.control_torque())
            .map(|(&w, &tc)| w * tc)
            .collect();
        let electrical = mechanical.iter().map(|&p| p * efficiency).collect();

        Ok(Self {
            hydro,
            fluid,
            unconstrained,
            mechanical,
            electrical,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_core::numeric::{Tolerances, nearly_equal};
    use crate::state::StepRecord;
    use ts_core::PhysicalContext;
    use ts_core::units::{kg_m2, m};
    use ts_hydro::ParabolicRotor;

    #[test]
    fn incomplete_state_is_rejected() {
        let rotor =
            RotorDynamics::new(&PhysicalContext::default(), m(2.0), kg_m2(1.0), 8.0).unwrap();
        let curves = ParabolicRotor::new(0.45, 4.0, 0.9).unwrap();
        let state = TimeSeriesState::new(2);
        assert!(PowerSeries::compute(&state, &rotor, &curves, 1.0, 4.0, 0.9).is_err());
    }

    #[test]
    fn series_follow_state() {
        let rotor =
            RotorDynamics::new(&PhysicalContext::default(), m(2.0), kg_m2(1.0), 8.0).unwrap();
        let curves = ParabolicRotor::new(0.45, 4.0, 0.9).unwrap();
        let mut state = TimeSeriesState::new(2);
        let step = StepRecord {
            speed: 4.0,
            tsr: 4.0,
            control_torque: 100.0,
            inflow_adjusted: 2.0,
            ..StepRecord::default()
        };
        state.record(0, &step).unwrap();
        state.record(1, &StepRecord::default()).unwrap();

        let power = PowerSeries::compute(&state, &rotor, &curves, 10.0, 4.0, 0.9).unwrap();
        assert!(nearly_equal(
            power.hydro[0],
            0.45 * power.fluid[0],
            Tolerances { abs: 1e-9, rel: 0.0 }
        ));
        assert!(nearly_equal(
            power.unconstrained[0],
            10.0 * 64.0,
            Tolerances { abs: 1e-9, rel: 0.0 }
        ));
        assert_eq!(power.mechanical[0], 400.0);
        assert!(nearly_equal(power.electrical[0], 360.0, Tolerances::default()));
        assert_eq!(power.hydro[1], 0.0);
        assert_eq!(power.electrical[1], 0.0);
    }
}
