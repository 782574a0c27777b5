//! Parallel parameter sweeps.
//!
//! Members share no mutable state, so each runs on its own rayon task. A
//! member that fails validation or optimisation reports its error without
//! affecting the others.

use rayon::prelude::*;
use tracing::debug;

use crate::config::SimulationConfig;
use crate::error::SimResult;
use crate::results::SimulationResults;
use crate::stepper::simulate;

/// Result of one sweep member.
#[derive(Debug)]
pub struct SweepOutcome {
    pub label: String,
    pub result: SimResult<SimulationResults>,
}

/// Run every `(label, config)` member; output order matches input order.
pub fn run_sweep(members: Vec<(String, SimulationConfig)>) -> Vec<SweepOutcome> {
    members
        .into_par_iter()
        .map(|(label, config)| {
            let result = simulate(config);
            match &result {
                Ok(r) => debug!(
                    member = %label,
                    energy_kwh = r.summary.energy_kwh,
                    "sweep member finished"
                ),
                Err(e) => debug!(member = %label, error = %e, "sweep member failed"),
            }
            SweepOutcome { label, result }
        })
        .collect()
}
