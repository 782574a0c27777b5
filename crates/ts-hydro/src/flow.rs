//! Inflow attenuation at the rotor hub.
//!
//! The vertical velocity profile above the seabed is a 1/7-power law in the
//! lower half of the water column and uniform in the upper half:
//!
//! ```text
//! U_avg = U_surface / 1.07
//! u(z)  = k · U_avg · (z / d_moor)^(1/7)      z <= d_moor / 2
//! u(z)  = 1.07 · U_avg                         z >  d_moor / 2
//! ```
//!
//! with `z` measured up from the mooring reference. The rotor sweeps the band
//! `[dz - R, dz + R]`, `dz = d_moor - d_hub`. The kinetic-power flux `u³` is
//! integrated over the part of the band that falls in each region, averaged
//! over the swept height and inverted to an equivalent uniform speed:
//!
//! ```text
//! P_avg = ρ · A / (4R) · (1.1407 · d_moor^(-3/7) · U_avg³ · [z^(10/7)]_za^zb
//!                         + (1.07 · U_avg)³ · (zd - zc))
//! U_eq  = (2 · P_avg / (ρ · A))^(1/3)
//! ```
//!
//! The band is clipped to the water column: the power-law part never extends
//! below the seabed (z = 0) and the uniform part never above the surface
//! (z = d_moor). Clipped sub-intervals collapse to zero length instead of
//! inverting. Because the surface clip still averages over the full swept
//! height `2R`, a hub shallower than `R` sees less than the surface speed
//! rather than exactly `U_surface`.

use std::f64::consts::PI;

use crate::error::{HydroError, HydroResult};
use ts_core::PhysicalContext;
use ts_core::numeric::{ensure_finite, ensure_same_len};
use ts_core::units::Length;

/// Ratio of surface speed to depth-averaged speed.
const SURFACE_TO_MEAN: f64 = 1.07;
/// Antiderivative coefficient of the cubed power-law profile.
const POWER_LAW_FLUX_COEFF: f64 = 1.1407;
/// Exponent of the cubed power-law antiderivative.
const FLUX_EXPONENT: f64 = 10.0 / 7.0;
/// Depth scaling exponent of the cubed power-law profile.
const DEPTH_EXPONENT: f64 = 3.0 / 7.0;

/// Which part of the water column the rotor band occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandCase {
    /// Band lies entirely in the power-law region.
    PowerLaw,
    /// Band lies entirely in the uniform-flow region.
    Uniform,
    /// Band straddles the boundary-layer half-depth.
    Straddle,
}

/// Integration bounds for one hub depth, measured up from the mooring reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileBands {
    pub case: BandCase,
    /// `[za, zb]` integrated with the power-law antiderivative.
    pub power_law: (f64, f64),
    /// `[zc, zd]` integrated as uniform flow.
    pub uniform: (f64, f64),
}

/// Depth attenuation model for one rotor in one water column.
#[derive(Clone, Debug)]
pub struct FlowAttenuation {
    radius: f64,
    mooring_depth: f64,
    rho: f64,
}

impl FlowAttenuation {
    /// Create a flow attenuation model.
    ///
    /// # Errors
    /// Returns error if the radius or mooring depth is not strictly positive.
    pub fn new(ctx: &PhysicalContext, radius: Length, mooring_depth: Length) -> HydroResult<Self> {
        if ensure_finite(radius.value, "rotor radius")? <= 0.0 {
            return Err(HydroError::InvalidArg {
                what: "rotor radius must be positive",
            });
        }
        if ensure_finite(mooring_depth.value, "mooring depth")? <= 0.0 {
            return Err(HydroError::InvalidArg {
                what: "mooring depth must be positive",
            });
        }
        if ensure_finite(ctx.rho(), "density")? <= 0.0 {
            return Err(HydroError::NonPhysical {
                what: "density must be positive",
            });
        }
        Ok(Self {
            radius: radius.value,
            mooring_depth: mooring_depth.value,
            rho: ctx.rho(),
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mooring_depth(&self) -> f64 {
        self.mooring_depth
    }

    /// Classify the swept band and compute its clipped integration bounds.
    pub fn bands(&self, hub_depth: f64) -> ProfileBands {
        let half = 0.5 * self.mooring_depth;
        let dz = self.mooring_depth - hub_depth;
        let lo = dz - self.radius;
        let hi = dz + self.radius;

        let case = if hi <= half {
            BandCase::PowerLaw
        } else if lo >= half {
            BandCase::Uniform
        } else {
            BandCase::Straddle
        };

        let (power_law, uniform) = match case {
            BandCase::PowerLaw => (self.clip_power_law(lo, hi), (0.0, 0.0)),
            BandCase::Uniform => ((0.0, 0.0), self.clip_uniform(lo, hi)),
            BandCase::Straddle => (self.clip_power_law(lo, half), self.clip_uniform(half, hi)),
        };

        ProfileBands {
            case,
            power_law,
            uniform,
        }
    }

    fn clip_power_law(&self, lo: f64, hi: f64) -> (f64, f64) {
        let za = lo.max(0.0);
        (za, hi.max(za))
    }

    fn clip_uniform(&self, lo: f64, hi: f64) -> (f64, f64) {
        let zd = hi.min(self.mooring_depth);
        (lo.min(zd), zd)
    }

    /// Equivalent uniform inflow speed for one surface speed and hub depth.
    pub fn at_depth(&self, surface_speed: f64, hub_depth: f64) -> f64 {
        let bands = self.bands(hub_depth);
        let (za, zb) = bands.power_law;
        let (zc, zd) = bands.uniform;

        let area = PI * self.radius * self.radius;
        let u_avg = surface_speed / SURFACE_TO_MEAN;
        let u_avg3 = u_avg * u_avg * u_avg;

        let power_law = POWER_LAW_FLUX_COEFF
            * (1.0 / self.mooring_depth).powf(DEPTH_EXPONENT)
            * u_avg3
            * (zb.powf(FLUX_EXPONENT) - za.powf(FLUX_EXPONENT));
        let uniform = (SURFACE_TO_MEAN * u_avg).powi(3) * (zd - zc);

        let flux_avg = self.rho * area * (power_law + uniform) / (4.0 * self.radius);
        (2.0 * flux_avg / (self.rho * area)).cbrt()
    }

    /// Elementwise [`at_depth`](Self::at_depth) over paired surface speeds and hub depths.
    ///
    /// # Errors
    /// Returns error if the two series differ in length.
    pub fn at_depths(&self, surface_speed: &[f64], hub_depth: &[f64]) -> HydroResult<Vec<f64>> {
        ensure_same_len("hub depth series", surface_speed.len(), hub_depth.len())?;
        Ok(surface_speed
            .iter()
            .zip(hub_depth)
            .map(|(&u, &d)| self.at_depth(u, d))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_core::numeric::{Tolerances, nearly_equal};
    use ts_core::units::m;

    fn model(radius: f64, mooring_depth: f64) -> FlowAttenuation {
        FlowAttenuation::new(&PhysicalContext::default(), m(radius), m(mooring_depth)).unwrap()
    }

    #[test]
    fn rejects_non_positive_radius() {
        let ctx = PhysicalContext::default();
        assert!(FlowAttenuation::new(&ctx, m(0.0), m(40.0)).is_err());
        assert!(FlowAttenuation::new(&ctx, m(-1.0), m(40.0)).is_err());
        assert!(FlowAttenuation::new(&ctx, m(1.0), m(0.0)).is_err());
    }

    #[test]
    fn non_finite_inputs_are_non_physical() {
        let ctx = PhysicalContext::default();
        let err = FlowAttenuation::new(&ctx, m(f64::NAN), m(40.0)).unwrap_err();
        assert_eq!(err, HydroError::NonPhysical { what: "rotor radius" });
        let err = FlowAttenuation::new(&ctx, m(2.0), m(f64::INFINITY)).unwrap_err();
        assert_eq!(err, HydroError::NonPhysical { what: "mooring depth" });
    }

    #[test]
    fn zero_surface_speed_gives_zero() {
        let flow = model(2.0, 40.0);
        assert_eq!(flow.at_depth(0.0, 10.0), 0.0);
        assert_eq!(flow.at_depth(0.0, 30.0), 0.0);
    }

    #[test]
    fn uniform_band_returns_surface_speed() {
        // dz = 30, band [28, 32] is above the half-depth of 20
        let flow = model(2.0, 40.0);
        let bands = flow.bands(10.0);
        assert_eq!(bands.case, BandCase::Uniform);
        assert_eq!(bands.power_law, (0.0, 0.0));
        assert_eq!(bands.uniform, (28.0, 32.0));
        assert!(nearly_equal(flow.at_depth(2.0, 10.0), 2.0, Tolerances::default()));
    }

    #[test]
    fn power_law_band_is_slower_than_surface() {
        // dz = 8, band [6, 10] sits below the half-depth
        let flow = model(2.0, 40.0);
        let bands = flow.bands(32.0);
        assert_eq!(bands.case, BandCase::PowerLaw);
        assert_eq!(bands.uniform, (0.0, 0.0));
        let u = flow.at_depth(2.0, 32.0);
        assert!(u > 0.0 && u < 2.0);
    }

    #[test]
    fn straddling_band_splits_at_half_depth() {
        // dz = 20, band [18, 22]
        let flow = model(2.0, 40.0);
        let bands = flow.bands(20.0);
        assert_eq!(bands.case, BandCase::Straddle);
        assert_eq!(bands.power_law, (18.0, 20.0));
        assert_eq!(bands.uniform, (20.0, 22.0));
        let u = flow.at_depth(2.0, 20.0);
        assert!(u < 2.0);
        assert!(u > flow.at_depth(2.0, 32.0));
    }

    #[test]
    fn deeper_hub_sees_less_flow_in_boundary_layer() {
        let flow = model(1.0, 40.0);
        let shallow = flow.at_depth(2.5, 25.0);
        let deep = flow.at_depth(2.5, 35.0);
        assert!(deep < shallow);
    }

    #[test]
    fn band_below_seabed_is_clipped() {
        // Hub at 39.5 m with a 2 m radius pokes through the seabed.
        let flow = model(2.0, 40.0);
        let bands = flow.bands(39.5);
        assert_eq!(bands.power_law.0, 0.0);
        assert!(bands.power_law.1 >= bands.power_law.0);
        let u = flow.at_depth(2.0, 39.5);
        assert!(u.is_finite() && u >= 0.0);
    }

    #[test]
    fn band_above_surface_is_clipped() {
        let flow = model(2.0, 40.0);
        let bands = flow.bands(1.0);
        assert_eq!(bands.uniform.1, 40.0);
        assert!(bands.uniform.1 >= bands.uniform.0);
        assert!(flow.at_depth(2.0, 1.0) < 2.0);
    }

    #[test]
    fn series_matches_scalar() {
        let flow = model(1.5, 30.0);
        let u = [0.0, 0.5, 1.2, 2.4];
        let d = [5.0, 14.0, 15.0, 25.0];
        let series = flow.at_depths(&u, &d).unwrap();
        for i in 0..u.len() {
            assert_eq!(series[i], flow.at_depth(u[i], d[i]));
        }
    }

    #[test]
    fn series_length_mismatch_is_error() {
        let flow = model(1.5, 30.0);
        let err = flow.at_depths(&[1.0, 2.0], &[10.0]).unwrap_err();
        assert_eq!(
            err,
            HydroError::LengthMismatch {
                what: "hub depth series",
                expected: 2,
                actual: 1
            }
        );
    }
}
