//! Error types for solver operations.

use thiserror::Error;
use ts_core::error::TsError;

/// Errors that can occur during scalar optimisation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invalid bounds: lower {lower} is above upper {upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("No acceptable candidate among {candidates} grid points")]
    EmptyBracket { candidates: usize },

    #[error("Core error: {0}")]
    Core(#[from] TsError),
}

pub type SolverResult<T> = Result<T, SolverError>;
