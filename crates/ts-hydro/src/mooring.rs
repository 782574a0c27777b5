//! Hub depth models.
//!
//! A rigidly attached rotor sits at a fixed depth. A cable-moored rotor is
//! pushed downstream by thrust and swings up on its cable:
//!
//! ```text
//! θ[k]     = atan(Ft[k-1] / W)
//! d_hub[k] = d_cable · cos(θ[k])
//! ```
//!
//! The thrust is taken from the previous step, so depth never depends on the
//! step currently being solved.

use crate::error::{HydroError, HydroResult};
use ts_core::units::{Force, Length};

/// Hub depth and mooring angle (rad) for one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HubPosition {
    pub depth: f64,
    pub angle: f64,
}

/// Hub position as a function of the previous step's thrust.
pub trait DepthModel: Send + Sync {
    /// Position for the current step; `previous_thrust` is `None` on the first step.
    fn position(&self, previous_thrust: Option<f64>) -> HubPosition;

    /// Constant depth when the position never depends on thrust.
    fn fixed_depth(&self) -> Option<f64> {
        None
    }
}

/// Rigid (solid bar) attachment.
#[derive(Clone, Debug)]
pub struct StaticDepth {
    depth: f64,
}

impl StaticDepth {
    pub fn new(depth: Length) -> Self {
        Self { depth: depth.value }
    }
}

impl DepthModel for StaticDepth {
    fn position(&self, _previous_thrust: Option<f64>) -> HubPosition {
        HubPosition {
            depth: self.depth,
            angle: 0.0,
        }
    }

    fn fixed_depth(&self) -> Option<f64> {
        Some(self.depth)
    }
}

/// Cable attachment with thrust-driven depth feedback.
#[derive(Clone, Debug)]
pub struct FeedbackDepth {
    cable_depth: f64,
    weight: f64,
}

impl FeedbackDepth {
    /// # Errors
    /// Returns error if the in-water weight is not strictly positive.
    pub fn new(cable_depth: Length, weight: Force) -> HydroResult<Self> {
        if !(weight.value.is_finite() && weight.value > 0.0) {
            return Err(HydroError::NonPhysical {
                what: "turbine weight must be positive for cable mooring",
            });
        }
        Ok(Self {
            cable_depth: cable_depth.value,
            weight: weight.value,
        })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl DepthModel for FeedbackDepth {
    fn position(&self, previous_thrust: Option<f64>) -> HubPosition {
        match previous_thrust {
            None => HubPosition {
                depth: self.cable_depth,
                angle: 0.0,
            },
            Some(thrust) => {
                let angle = (thrust / self.weight).atan();
                HubPosition {
                    depth: self.cable_depth * angle.cos(),
                    angle,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_core::numeric::{Tolerances, nearly_equal};
    use ts_core::units::{m, newtons};

    #[test]
    fn static_depth_ignores_thrust() {
        let model = StaticDepth::new(m(12.0));
        let p = model.position(Some(1.0e5));
        assert_eq!(p.depth, 12.0);
        assert_eq!(p.angle, 0.0);
        assert_eq!(model.fixed_depth(), Some(12.0));
    }

    #[test]
    fn feedback_first_step_hangs_vertically() {
        let model = FeedbackDepth::new(m(10.0), newtons(2000.0)).unwrap();
        let p = model.position(None);
        assert_eq!(p.depth, 10.0);
        assert_eq!(p.angle, 0.0);
        assert_eq!(model.fixed_depth(), None);
    }

    #[test]
    fn thrust_equal_to_weight_gives_45_degrees() {
        let model = FeedbackDepth::new(m(10.0), newtons(2000.0)).unwrap();
        let p = model.position(Some(2000.0));
        assert!(nearly_equal(p.angle, std::f64::consts::FRAC_PI_4, Tolerances::default()));
        assert!(nearly_equal(
            p.depth,
            10.0 * std::f64::consts::FRAC_1_SQRT_2,
            Tolerances::default()
        ));
    }

    #[test]
    fn zero_thrust_keeps_cable_depth() {
        let model = FeedbackDepth::new(m(10.0), newtons(2000.0)).unwrap();
        assert_eq!(model.position(Some(0.0)).depth, 10.0);
    }

    #[test]
    fn non_positive_weight_rejected() {
        assert!(FeedbackDepth::new(m(10.0), newtons(0.0)).is_err());
        assert!(FeedbackDepth::new(m(10.0), newtons(-5.0)).is_err());
    }
}
