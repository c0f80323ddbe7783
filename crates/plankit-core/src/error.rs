//! Error types for project persistence.

use thiserror::Error;

/// Errors produced while reading or writing project files.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid project JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file was written by an incompatible application version.
    #[error("unsupported project file version: {found}")]
    UnsupportedVersion {
        /// Version string found in the file.
        found: String,
    },
}
