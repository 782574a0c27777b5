//! Bounded scalar minimisation by Brent's method.
//!
//! Combines successive parabolic interpolation with golden-section steps on a
//! closed interval `[lower, upper]`. The objective is never evaluated outside
//! the interval. Convergence is declared when the current best point is within
//! `2·tol − (b − a)/2` of the interval midpoint, where
//! `tol = √ε · |x| + xatol / 3`.

use tracing::warn;

use crate::error::{SolverError, SolverResult};
use ts_core::numeric::ensure_finite;

/// Golden-section fraction, `(3 − √5) / 2`.
const GOLDEN: f64 = 0.381_966_011_250_105_1;

/// Bounded minimiser configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedConfig {
    /// Absolute tolerance on the abscissa
    pub xatol: f64,
    /// Maximum number of objective evaluations
    pub max_evals: usize,
}

impl Default for BoundedConfig {
    fn default() -> Self {
        Self {
            xatol: 1e-5,
            max_evals: 500,
        }
    }
}

/// Result of a bounded minimisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    /// Abscissa of the best point found
    pub x: f64,
    /// Objective value at `x`
    pub fx: f64,
    /// Number of objective evaluations
    pub evaluations: usize,
    /// False when the evaluation cap was reached first
    pub converged: bool,
}

#[inline]
fn sign_or_one(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Minimise `f` on `[lower, upper]`.
///
/// Returns `lower` unchanged (after one evaluation) when the bounds coincide.
///
/// # Errors
///
/// Returns error if the bounds are not finite, are reversed, or the
/// configuration has a non-positive tolerance or evaluation cap.
pub fn minimize_bounded<F>(
    f: F,
    lower: f64,
    upper: f64,
    config: &BoundedConfig,
) -> SolverResult<Minimum>
where
    F: Fn(f64) -> f64,
{
    ensure_finite(lower, "lower bound")?;
    ensure_finite(upper, "upper bound")?;
    if lower > upper {
        return Err(SolverError::InvalidBounds { lower, upper });
    }
    if !(config.xatol.is_finite() && config.xatol > 0.0) {
        return Err(SolverError::InvalidArg {
            what: "xatol must be positive",
        });
    }
    if config.max_evals == 0 {
        return Err(SolverError::InvalidArg {
            what: "max_evals must be at least one",
        });
    }

    let sqrt_eps = f64::EPSILON.sqrt();
    let (mut a, mut b) = (lower, upper);

    // Best point (x), second best (w) and previous second best (v).
    let mut v = a + GOLDEN * (b - a);
    let mut w = v;
    let mut x = v;
    let mut fx = f(x);
    let mut fv = fx;
    let mut fw = fx;
    let mut evaluations = 1;

    let mut step = 0.0_f64;
    let mut prev_step = 0.0_f64;

    let mut xm = 0.5 * (a + b);
    let mut tol1 = sqrt_eps * x.abs() + config.xatol / 3.0;
    let mut tol2 = 2.0 * tol1;
    let mut converged = true;

    while (x - xm).abs() > tol2 - 0.5 * (b - a) {
        let mut golden = true;

        if prev_step.abs() > tol1 {
            golden = false;
            let mut r = (x - w) * (fx - fv);
            let mut q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            r = prev_step;
            prev_step = step;

            if p.abs() < (0.5 * q * r).abs() && p > q * (a - x) && p < q * (b - x) {
                step = p / q;
                let u = x + step;
                if (u - a) < tol2 || (b - u) < tol2 {
                    step = tol1 * sign_or_one(xm - x);
                }
            } else {
                golden = true;
            }
        }

        if golden {
            prev_step = if x >= xm { a - x } else { b - x };
            step = GOLDEN * prev_step;
        }

        let u = x + sign_or_one(step) * step.abs().max(tol1);
        let fu = f(u);
        evaluations += 1;

        if fu <= fx {
            if u >= x {
                a = x;
            } else {
                b = x;
            }
            v = w;
            fv = fw;
            w = x;
            fw = fx;
            x = u;
            fx = fu;
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                fv = fw;
                w = u;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        }

        xm = 0.5 * (a + b);
        tol1 = sqrt_eps * x.abs() + config.xatol / 3.0;
        tol2 = 2.0 * tol1;

        if evaluations >= config.max_evals {
            converged = false;
            warn!(
                evaluations,
                x, fx, "bounded minimiser stopped on its evaluation cap"
            );
            break;
        }
    }

    Ok(Minimum {
        x,
        fx,
        evaluations,
        converged,
    })
}
