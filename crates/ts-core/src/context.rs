//! Physical constants for a run.
//!
//! Built once and handed by value to every model that needs it.

use crate::units::{Accel, Density, kg_per_m3, mps2};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalContext {
    /// Seawater density
    pub density: Density,
    /// Gravitational acceleration
    pub gravity: Accel,
}

impl Default for PhysicalContext {
    fn default() -> Self {
        Self::with_fluid(1025.0, 9.8)
    }
}

impl PhysicalContext {
    pub fn with_fluid(density_kg_m3: f64, gravity_m_s2: f64) -> Self {
        Self {
            density: kg_per_m3(density_kg_m3),
            gravity: mps2(gravity_m_s2),
        }
    }

    #[inline]
    pub fn rho(&self) -> f64 {
        self.density.value
    }

    #[inline]
    pub fn g(&self) -> f64 {
        self.gravity.value
    }
}
