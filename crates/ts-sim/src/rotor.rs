//! Rotor loads and shaft dynamics.

use std::f64::consts::PI;

use crate::error::{SimError, SimResult};
use ts_core::PhysicalContext;
use ts_core::units::{Inertia, Length};

/// Hydrodynamic loads on a rotor and its rigid-shaft equation of motion:
///
/// ```text
/// Th = 0.5 · ρ · π · R³ · U² · Cq
/// Ft = 0.5 · ρ · π · R² · U² · Ct
/// Jr · dω/dt = Th − Tc − Tbrake
/// ```
#[derive(Clone, Debug)]
pub struct RotorDynamics {
    /// Rotor radius (m)
    pub radius: f64,
    /// Fluid density (kg/m³)
    pub rho: f64,
    /// Rotor plus drivetrain inertia (kg·m²)
    pub inertia: f64,
    /// Tip-speed ratio cap
    pub tsr_max: f64,
}

impl RotorDynamics {
    /// Create rotor dynamics.
    ///
    /// # Errors
    /// Returns error if radius, inertia or density are not strictly positive.
    pub fn new(
        ctx: &PhysicalContext,
        radius: Length,
        inertia: Inertia,
        tsr_max: f64,
    ) -> SimResult<Self> {
        if !(radius.value.is_finite() && radius.value > 0.0) {
            return Err(SimError::config("rotor radius must be positive"));
        }
        if !(inertia.value.is_finite() && inertia.value > 0.0) {
            return Err(SimError::config("rotor inertia must be positive"));
        }
        if !(ctx.rho().is_finite() && ctx.rho() > 0.0) {
            return Err(SimError::config("density must be positive"));
        }
        Ok(Self {
            radius: radius.value,
            rho: ctx.rho(),
            inertia: inertia.value,
            tsr_max,
        })
    }

    /// Capped tip-speed ratio; exactly zero when the inflow is zero.
    pub fn tip_speed_ratio(&self, speed: f64, inflow: f64) -> f64 {
        if inflow == 0.0 {
            return 0.0;
        }
        (speed * self.radius / inflow).min(self.tsr_max)
    }

    pub fn hydro_torque(&self, inflow: f64, cq: f64) -> f64 {
        0.5 * self.rho * PI * self.radius.powi(3) * inflow * inflow * cq
    }

    pub fn thrust(&self, inflow: f64, ct: f64) -> f64 {
        0.5 * self.rho * PI * self.radius * self.radius * inflow * inflow * ct
    }

    /// Power captured at power coefficient `cp`.
    pub fn hydro_power(&self, inflow: f64, cp: f64) -> f64 {
        0.5 * self.rho * PI * self.radius * self.radius * inflow.powi(3) * cp
    }

    /// Kinetic power flowing through the swept disk.
    pub fn fluid_power(&self, inflow: f64) -> f64 {
        self.hydro_power(inflow, 1.0)
    }

    /// Angular acceleration from the torque balance.
    pub fn acceleration(&self, hydro_torque: f64, control_torque: f64, brake_torque: f64) -> f64 {
        (hydro_torque - control_torque - brake_torque) / self.inertia
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_core::numeric::{Tolerances, nearly_equal};
    use ts_core::units::{kg_m2, m};

    fn rotor() -> RotorDynamics {
        RotorDynamics::new(&PhysicalContext::default(), m(2.0), kg_m2(1.0e6), 8.0).unwrap()
    }

    #[test]
    fn tsr_zero_without_inflow() {
        assert_eq!(rotor().tip_speed_ratio(5.0, 0.0), 0.0);
    }

    #[test]
    fn tsr_is_capped() {
        let r = rotor();
        assert!(nearly_equal(r.tip_speed_ratio(4.0, 2.0), 4.0, Tolerances::default()));
        assert_eq!(r.tip_speed_ratio(40.0, 2.0), 8.0);
    }

    #[test]
    fn loads_scale_with_inflow_squared() {
        let r = rotor();
        let t1 = r.hydro_torque(1.0, 0.1);
        let t2 = r.hydro_torque(2.0, 0.1);
        assert!(nearly_equal(t2 / t1, 4.0, Tolerances::default()));
        let f = r.thrust(2.0, 0.8);
        assert!(nearly_equal(
            f,
            0.5 * 1025.0 * PI * 4.0 * 4.0 * 0.8,
            Tolerances { abs: 1e-6, rel: 0.0 }
        ));
    }

    #[test]
    fn fluid_power_is_unit_cp() {
        let r = rotor();
        assert_eq!(r.fluid_power(2.0), r.hydro_power(2.0, 1.0));
        assert!(nearly_equal(
            r.fluid_power(2.0),
            0.5 * 1025.0 * PI * 4.0 * 8.0,
            Tolerances { abs: 1e-6, rel: 0.0 }
        ));
    }

    #[test]
    fn acceleration_from_torque_balance() {
        let r = rotor();
        assert!(nearly_equal(r.acceleration(3.0e6, 1.0e6, 0.5e6), 1.5, Tolerances::default()));
    }

    #[test]
    fn rejects_bad_parameters() {
        let ctx = PhysicalContext::default();
        assert!(RotorDynamics::new(&ctx, m(0.0), kg_m2(1.0), 8.0).is_err());
        assert!(RotorDynamics::new(&ctx, m(1.0), kg_m2(0.0), 8.0).is_err());
    }
}
