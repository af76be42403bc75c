//! Error types for the session layer.

use std::path::PathBuf;

/// Error type for session and journey-file operations.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// Error from the core crate (unknown card, bad reference data, ...)
    #[error(transparent)]
    Core(#[from] gapfinder_core::GapFinderError),

    /// Journey file could not be read
    #[error("Failed to read journey file {path:?}: {source}")]
    JourneyFile {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Journey file is not valid YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Journey file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
