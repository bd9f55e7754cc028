//! Error types for gott.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by loading, saving, configuration and output.
///
/// Parsing a line never fails, so there is no parse variant for task text.
#[derive(Debug, Error)]
pub enum GottError {
    /// The todo file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The todo file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Lookup returned nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GottError {
    /// Check if this error came from reading the todo file.
    #[must_use]
    pub const fn is_read_error(&self) -> bool {
        matches!(self, Self::Read { .. })
    }
}
