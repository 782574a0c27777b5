//! Error types for hydrodynamic models.

use thiserror::Error;
use ts_core::error::TsError;

/// Errors that can occur while building or evaluating hydrodynamic models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydroError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Length mismatch: {what} (expected {expected}, got {actual})")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type HydroResult<T> = Result<T, HydroError>;

impl From<TsError> for HydroError {
    fn from(e: TsError) -> Self {
        match e {
            TsError::NonFinite { what, .. } => HydroError::NonPhysical { what },
            TsError::LengthMismatch {
                what,
                expected,
                actual,
            } => HydroError::LengthMismatch {
                what,
                expected,
                actual,
            },
        }
    }
}
