use crate::{TsError, TsResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> TsResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TsError::NonFinite { what, value: v })
    }
}

/// Paired series must have one entry each.
pub fn ensure_same_len(what: &'static str, expected: usize, actual: usize) -> TsResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(TsError::LengthMismatch {
            what,
            expected,
            actual,
        })
    }
}

/// `num` evenly spaced points over `[start, end]`, endpoints included.
pub fn linspace(start: Real, end: Real, num: usize) -> Vec<Real> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let delta = (end - start) / (num - 1) as Real;
            let mut points: Vec<Real> = (0..num).map(|i| start + i as Real * delta).collect();
            // Ensure exact endpoint
            points[num - 1] = end;
            points
        }
    }
}

/// Trapezoidal integral of `y` over the abscissa `x`.
///
/// Slices of unequal length are integrated over their common prefix.
pub fn trapezoid(y: &[Real], x: &[Real]) -> Real {
    y.windows(2)
        .zip(x.windows(2))
        .map(|(yy, xx)| 0.5 * (yy[0] + yy[1]) * (xx[1] - xx[0]))
        .sum()
}

/// Mean spacing between consecutive samples; 0 for fewer than two samples.
pub fn mean_step(x: &[Real]) -> Real {
    if x.len() < 2 {
        return 0.0;
    }
    let total: Real = x.windows(2).map(|w| w[1] - w[0]).sum();
    total / (x.len() - 1) as Real
}

pub fn is_strictly_increasing(x: &[Real]) -> bool {
    x.windows(2).all(|w| w[1] > w[0])
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn trapezoid_of_constant_is_value_times_span(
            value in -100.0_f64..100.0,
            steps in prop::collection::vec(0.01_f64..10.0, 1..40),
        ) {
            let mut x = vec![0.0];
            for dx in &steps {
                let last = *x.last().unwrap();
                x.push(last + dx);
            }
            let y = vec![value; x.len()];
            let span = x[x.len() - 1] - x[0];
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            prop_assert!(nearly_equal(trapezoid(&y, &x), value * span, tol));
        }
    }
}
