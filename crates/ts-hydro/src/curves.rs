//! Rotor performance curves as functions of tip-speed ratio.

use crate::error::{HydroError, HydroResult};

/// Dimensionless rotor coefficients versus tip-speed ratio (TSR).
///
/// Implementations must be pure and cheap to call; the time stepper evaluates
/// them once or twice per step. Outside their fitted domain they extrapolate
/// linearly, clamped non-negative for Cp/Ct and non-positive for Cpmin.
pub trait PerformanceCurves {
    /// Power coefficient.
    fn cp(&self, tsr: f64) -> f64;

    /// Thrust coefficient.
    fn ct(&self, tsr: f64) -> f64;

    /// Torque coefficient, `Cq = Cp / TSR`, zero at `TSR == 0` and never negative.
    fn cq(&self, tsr: f64) -> f64 {
        if tsr == 0.0 {
            return 0.0;
        }
        (self.cp(tsr) / tsr).max(0.0)
    }

    /// Minimum blade pressure coefficient (cavitation), `-1` when no data is available.
    fn cpmin(&self, _tsr: f64) -> f64 {
        -1.0
    }

    fn cp_series(&self, tsr: &[f64]) -> Vec<f64> {
        tsr.iter().map(|&x| self.cp(x)).collect()
    }

    fn ct_series(&self, tsr: &[f64]) -> Vec<f64> {
        tsr.iter().map(|&x| self.ct(x)).collect()
    }

    fn cq_series(&self, tsr: &[f64]) -> Vec<f64> {
        tsr.iter().map(|&x| self.cq(x)).collect()
    }
}

/// Peak of the power curve and the TSR cap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptimalPoint {
    /// Maximum power coefficient.
    pub cp_opt: f64,
    /// TSR at which `cp_opt` occurs.
    pub tsr_opt: f64,
    /// Largest TSR the rotor is allowed to reach.
    pub tsr_max: f64,
}

impl OptimalPoint {
    /// # Errors
    /// Returns error unless `cp_opt > 0`, `tsr_opt > 0` and `tsr_max >= tsr_opt`.
    pub fn new(cp_opt: f64, tsr_opt: f64, tsr_max: f64) -> HydroResult<Self> {
        if !(cp_opt.is_finite() && cp_opt > 0.0) {
            return Err(HydroError::InvalidArg {
                what: "optimal power coefficient must be positive",
            });
        }
        if !(tsr_opt.is_finite() && tsr_opt > 0.0) {
            return Err(HydroError::InvalidArg {
                what: "optimal tip-speed ratio must be positive",
            });
        }
        if !(tsr_max.is_finite() && tsr_max >= tsr_opt) {
            return Err(HydroError::InvalidArg {
                what: "maximum tip-speed ratio must not be below the optimum",
            });
        }
        Ok(Self {
            cp_opt,
            tsr_opt,
            tsr_max,
        })
    }
}

/// Closed-form reference rotor.
///
/// ```text
/// Cp(λ) = Cp_max · (λ/λo) · (2 − λ/λo)     clamped >= 0
/// Ct(λ) = Ct_max · tanh(λ/λo)              λ >= 0
/// ```
///
/// Cp peaks at `λo` and returns to zero at `2λo`, which is taken as the TSR cap.
#[derive(Clone, Debug, PartialEq)]
pub struct ParabolicRotor {
    pub cp_max: f64,
    pub tsr_opt: f64,
    pub ct_max: f64,
}

impl ParabolicRotor {
    /// # Errors
    /// Returns error if any coefficient is non-positive or `cp_max` exceeds the Betz limit.
    pub fn new(cp_max: f64, tsr_opt: f64, ct_max: f64) -> HydroResult<Self> {
        if !(cp_max > 0.0 && cp_max <= 16.0 / 27.0) {
            return Err(HydroError::InvalidArg {
                what: "cp_max must be in (0, 16/27]",
            });
        }
        if !(tsr_opt.is_finite() && tsr_opt > 0.0) {
            return Err(HydroError::InvalidArg {
                what: "tsr_opt must be positive",
            });
        }
        if !(ct_max.is_finite() && ct_max > 0.0) {
            return Err(HydroError::InvalidArg {
                what: "ct_max must be positive",
            });
        }
        Ok(Self {
            cp_max,
            tsr_opt,
            ct_max,
        })
    }

    pub fn optimal_point(&self) -> OptimalPoint {
        OptimalPoint {
            cp_opt: self.cp_max,
            tsr_opt: self.tsr_opt,
            tsr_max: 2.0 * self.tsr_opt,
        }
    }
}

impl PerformanceCurves for ParabolicRotor {
    fn cp(&self, tsr: f64) -> f64 {
        let x = tsr / self.tsr_opt;
        (self.cp_max * x * (2.0 - x)).max(0.0)
    }

    fn ct(&self, tsr: f64) -> f64 {
        (self.ct_max * (tsr / self.tsr_opt).tanh()).max(0.0)
    }
}
