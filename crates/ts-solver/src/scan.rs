//! Coarse grid scan and bracket refinement.

use rayon::prelude::*;

use crate::error::{SolverError, SolverResult};
use ts_core::numeric::{ensure_finite, linspace};

/// Objective values on an evenly spaced grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridScan {
    pub candidates: Vec<f64>,
    pub values: Vec<f64>,
}

/// Evaluate `f` at `num` evenly spaced points on `[lower, upper]`.
///
/// Candidates are independent, so they are evaluated in parallel; the output
/// order always matches the grid order.
///
/// # Errors
///
/// Returns error if `num` is zero or either bound is not finite.
pub fn grid_scan<F>(f: F, lower: f64, upper: f64, num: usize) -> SolverResult<GridScan>
where
    F: Fn(f64) -> f64 + Sync,
{
    if num == 0 {
        return Err(SolverError::InvalidArg {
            what: "grid must have at least one point",
        });
    }
    ensure_finite(lower, "grid lower bound")?;
    ensure_finite(upper, "grid upper bound")?;
    let candidates = linspace(lower, upper, num);
    let values = candidates.par_iter().map(|&x| f(x)).collect();
    Ok(GridScan { candidates, values })
}

impl GridScan {
    /// Candidate with the lowest objective value.
    pub fn best(&self) -> Option<(f64, f64)> {
        self.candidates
            .iter()
            .zip(&self.values)
            .filter(|(_, v)| !v.is_nan())
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&x, &v)| (x, v))
    }

    /// First and last candidates whose objective value satisfies `accept`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptyBracket`] if no candidate is accepted.
    pub fn bracket_where<P>(&self, accept: P) -> SolverResult<(f64, f64)>
    where
        P: Fn(f64) -> bool,
    {
        let mut accepted = self
            .candidates
            .iter()
            .zip(&self.values)
            .filter(|(_, v)| accept(**v))
            .map(|(&x, _)| x);
        let first = accepted.next().ok_or(SolverError::EmptyBracket {
            candidates: self.candidates.len(),
        })?;
        let last = accepted.last().unwrap_or(first);
        Ok((first, last))
    }
}
