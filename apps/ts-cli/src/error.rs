use std::path::PathBuf;

pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Project(#[from] ts_project::ProjectError),

    #[error("Simulation failed: {0}")]
    Simulation(#[from] ts_sim::SimError),

    #[error("Unknown series '{name}' (available: {available})")]
    UnknownSeries { name: String, available: String },

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{failed} of {total} sweep members failed")]
    SweepFailed { failed: usize, total: usize },
}
