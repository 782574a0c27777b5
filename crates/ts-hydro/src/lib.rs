//! Hydrodynamic building blocks for a submerged tidal rotor.
//!
//! Provides:
//! - Depth-dependent inflow attenuation (1/7-power-law boundary layer)
//! - Performance-curve contract (Cp/Ct/Cq/Cpmin vs tip-speed ratio)
//! - Hub depth models for rigid and cable-moored attachment
//! - Unit mass/weight estimates for the rotor and power take-off

pub mod curves;
pub mod error;
pub mod flow;
pub mod mass;
pub mod mooring;

pub use curves::{OptimalPoint, ParabolicRotor, PerformanceCurves};
pub use error::{HydroError, HydroResult};
pub use flow::{BandCase, FlowAttenuation, ProfileBands};
pub use mass::{pto_mass, rotor_mass, unit_mass, unit_weight};
pub use mooring::{DepthModel, FeedbackDepth, HubPosition, StaticDepth};
