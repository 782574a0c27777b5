//! ts-core: stable foundation for tidesim.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + series helpers)
//! - context (physical constants passed explicitly to every model)
//! - error (shared error types)

pub mod context;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use context::PhysicalContext;
pub use error::{TsError, TsResult};
pub use numeric::*;
pub use units::*;
