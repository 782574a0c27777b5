//! Error types for control law construction.

use thiserror::Error;

/// Result type for control operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur while building a controller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a control function.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Parameter outside its physical range.
    #[error("Non-physical parameter: {what}")]
    NonPhysical { what: &'static str },
}

impl From<ts_hydro::HydroError> for ControlError {
    fn from(e: ts_hydro::HydroError) -> Self {
        match e {
            ts_hydro::HydroError::InvalidArg { what } => ControlError::InvalidArg { what },
            ts_hydro::HydroError::NonPhysical { what } => ControlError::NonPhysical { what },
            ts_hydro::HydroError::LengthMismatch { what, .. } => ControlError::InvalidArg { what },
        }
    }
}
