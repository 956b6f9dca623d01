use course_modules_core::{BlockError, HostError};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot file not found: {path}")]
    SnapshotNotFound { path: PathBuf },

    #[error("Block error: {0}")]
    Block(#[from] BlockError),

    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl CliError {
    pub fn snapshot_not_found(path: PathBuf) -> Self {
        CliError::SnapshotNotFound { path }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
