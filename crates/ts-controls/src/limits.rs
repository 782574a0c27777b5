//! Rated-power and cut-in limits on the generator torque.

use crate::error::{ControlError, ControlResult};
use serde::{Deserialize, Serialize};
use ts_core::units::{Power, Velocity};

/// Drivetrain limits applied to every torque command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLimits {
    /// Maximum electrical output (W).
    pub rated_power: f64,
    /// Drivetrain efficiency, in (0, 1].
    pub efficiency: f64,
    /// Inflow speed below which no power is extracted (m/s).
    pub cut_in_speed: f64,
}

impl PowerLimits {
    /// Create drivetrain limits.
    ///
    /// # Arguments
    ///
    /// * `rated_power` - Maximum electrical output, must be positive
    /// * `efficiency` - Drivetrain efficiency in (0, 1]
    /// * `cut_in_speed` - Minimum inflow for power extraction, must be >= 0
    pub fn new(rated_power: Power, efficiency: f64, cut_in_speed: Velocity) -> ControlResult<Self> {
        if !(rated_power.value.is_finite() && rated_power.value > 0.0) {
            return Err(ControlError::InvalidArg {
                what: "rated power must be positive",
            });
        }
        if !(efficiency > 0.0 && efficiency <= 1.0) {
            return Err(ControlError::InvalidArg {
                what: "efficiency must be in (0, 1]",
            });
        }
        if !(cut_in_speed.value.is_finite() && cut_in_speed.value >= 0.0) {
            return Err(ControlError::InvalidArg {
                what: "cut-in speed cannot be negative",
            });
        }
        Ok(Self {
            rated_power: rated_power.value,
            efficiency,
            cut_in_speed: cut_in_speed.value,
        })
    }

    /// Clamp a generator torque so electrical output stays at or below rated power,
    /// then zero it when the inflow is below cut-in.
    pub fn clamp(&self, torque: f64, speed: f64, inflow: f64) -> f64 {
        let mut tc = torque;
        if tc * speed * self.efficiency > self.rated_power {
            tc = (self.rated_power / self.efficiency) / speed;
        }
        if inflow < self.cut_in_speed {
            tc = 0.0;
        }
        tc
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use ts_core::units::{mps, watts};

    proptest! {
        #[test]
        fn clamped_output_never_exceeds_rated(
            rated in 1.0_f64..1.0e6,
            efficiency in 0.05_f64..1.0,
            torque in 0.0_f64..1.0e7,
            speed in 0.0_f64..50.0,
            inflow in 0.0_f64..4.0,
        ) {
            let limits = PowerLimits::new(watts(rated), efficiency, mps(0.5)).unwrap();
            let tc = limits.clamp(torque, speed, inflow);
            prop_assert!(tc * speed * efficiency <= rated * (1.0 + 1e-9));
            if inflow < 0.5 {
                prop_assert_eq!(tc, 0.0);
            }
        }
    }
}
