//! Choice of a single rotor speed for the constant-speed strategy.
//!
//! The objective is the time-averaged hydrodynamic power a rotor held at a
//! fixed speed would capture from the raw surface inflow:
//!
//! ```text
//! TSR_i(ω) = min(ω · R / U_i, TSR_max)        (0 where U_i = 0)
//! P̄(ω)     = ∫ 0.5 · ρ · π · R² · U³ · Cp(TSR) dt / (t_end − t_0)
//! ```
//!
//! Candidate speeds span the TSR-optimal instantaneous speeds of the series.
//! The first and last candidates with positive mean power bracket a bounded
//! Brent search for the continuous optimum.

use std::f64::consts::PI;

use tracing::debug;

use crate::config::SimulationConfig;
use crate::error::SimResult;
use ts_core::numeric::trapezoid;
use ts_hydro::PerformanceCurves;
use ts_solver::{BoundedConfig, grid_scan, minimize_bounded};

/// Number of coarse candidates in the bracket search.
pub const GRID_POINTS: usize = 50;

/// Outcome of the constant-speed search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSpeedSolution {
    /// Optimal constant rotor speed (rad/s)
    pub speed: f64,
    /// Time-averaged hydrodynamic power at `speed` (W)
    pub mean_power: f64,
    /// Refined search interval
    pub bracket: (f64, f64),
    /// Best coarse candidate and its mean power
    pub best_candidate: (f64, f64),
    pub evaluations: usize,
}

pub struct ConstantSpeedSolver<'a> {
    inflow: &'a [f64],
    time: &'a [f64],
    curves: &'a (dyn PerformanceCurves + Send + Sync),
    radius: f64,
    rho: f64,
    tsr_opt: f64,
    tsr_max: f64,
}

impl<'a> ConstantSpeedSolver<'a> {
    /// Solver over the raw (unattenuated) inflow of a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Configuration`](crate::SimError::Configuration) if
    /// the configuration does not validate.
    pub fn from_config(config: &'a SimulationConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            inflow: &config.inflow,
            time: &config.time,
            curves: &*config.curves,
            radius: config.radius.value,
            rho: config.context.rho(),
            tsr_opt: config.optimum.tsr_opt,
            tsr_max: config.optimum.tsr_max,
        })
    }

    /// Time-averaged hydrodynamic power with the rotor held at `speed`.
    pub fn mean_power(&self, speed: f64) -> f64 {
        let area = PI * self.radius * self.radius;
        let power: Vec<f64> = self
            .inflow
            .iter()
            .map(|&u| {
                let tsr = if u == 0.0 {
                    0.0
                } else {
                    (speed * self.radius / u).min(self.tsr_max)
                };
                0.5 * self.rho * area * u.powi(3) * self.curves.cp(tsr)
            })
            .collect();
        let elapsed = self.time[self.time.len() - 1] - self.time[0];
        trapezoid(&power, self.time) / elapsed
    }

    /// Run the bracket search and the bounded refinement.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DegenerateOptimization`](crate::SimError::DegenerateOptimization)
    /// if no candidate speed yields positive mean power.
    pub fn solve(&self) -> SimResult<ConstantSpeedSolution> {
        let (lo, hi) = self
            .inflow
            .iter()
            .map(|&u| self.tsr_opt * u / self.radius)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), w| {
                (lo.min(w), hi.max(w))
            });

        let objective = |speed: f64| -self.mean_power(speed);
        let scan = grid_scan(objective, lo, hi, GRID_POINTS)?;
        let bracket = scan.bracket_where(|neg_power| neg_power < 0.0)?;
        let best_candidate = scan
            .best()
            .map(|(w, neg_power)| (w, -neg_power))
            .unwrap_or((bracket.0, 0.0));
        debug!(
            lower = bracket.0,
            upper = bracket.1,
            best_speed = best_candidate.0,
            best_power = best_candidate.1,
            "constant-speed bracket"
        );

        let min = minimize_bounded(objective, bracket.0, bracket.1, &BoundedConfig::default())?;
        debug!(
            speed = min.x,
            mean_power = -min.fx,
            evaluations = min.evaluations,
            converged = min.converged,
            "constant-speed optimum"
        );

        Ok(ConstantSpeedSolution {
            speed: min.x,
            mean_power: -min.fx,
            bracket,
            best_candidate,
            evaluations: min.evaluations,
        })
    }
}
