//! Scalar optimisation for rotor operating points.
//!
//! This crate provides the two halves of a bracket-then-refine search:
//! a coarse grid scan whose candidates are evaluated in parallel, and a
//! bounded Brent minimiser that polishes the best region of the scan to a
//! continuous optimum.

pub mod bounded;
pub mod error;
pub mod scan;

pub use bounded::{BoundedConfig, Minimum, minimize_bounded};
pub use error::{SolverError, SolverResult};
pub use scan::{GridScan, grid_scan};
