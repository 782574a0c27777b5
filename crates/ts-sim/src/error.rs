//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while building or running a simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    #[error("Degenerate optimization: {what}")]
    DegenerateOptimization { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}

pub type SimResult<T> = Result<T, SimError>;

impl SimError {
    pub(crate) fn config(what: impl Into<String>) -> Self {
        SimError::Configuration { what: what.into() }
    }
}

impl From<ts_hydro::HydroError> for SimError {
    fn from(e: ts_hydro::HydroError) -> Self {
        SimError::Configuration {
            what: e.to_string(),
        }
    }
}

impl From<ts_controls::ControlError> for SimError {
    fn from(e: ts_controls::ControlError) -> Self {
        SimError::Configuration {
            what: e.to_string(),
        }
    }
}

impl From<ts_solver::SolverError> for SimError {
    fn from(e: ts_solver::SolverError) -> Self {
        match e {
            ts_solver::SolverError::EmptyBracket { .. } => SimError::DegenerateOptimization {
                what: e.to_string(),
            },
            other => SimError::Configuration {
                what: other.to_string(),
            },
        }
    }
}

impl From<ts_core::TsError> for SimError {
    fn from(e: ts_core::TsError) -> Self {
        SimError::Configuration {
            what: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bracket_maps_to_degenerate() {
        let err: SimError = ts_solver::SolverError::EmptyBracket { candidates: 50 }.into();
        assert!(matches!(err, SimError::DegenerateOptimization { .. }));
    }

    #[test]
    fn hydro_errors_are_configuration() {
        let err: SimError = ts_hydro::HydroError::InvalidArg { what: "radius" }.into();
        assert!(matches!(err, SimError::Configuration { .. }));
        assert!(err.to_string().contains("radius"));
    }
}
