//! Trainset table error types.

use std::path::PathBuf;

/// Errors that can occur when loading a trainset name table.
#[derive(Debug, thiserror::Error)]
pub enum TrainsetError {
    /// Table file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Table is not a JSON array of identifier/name rows
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
