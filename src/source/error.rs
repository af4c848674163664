//! Error types for quiz retrieval.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while retrieving a quiz set.
///
/// The `Display` text is shown to the user as the load error.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network failure or timeout.
    #[error("Failed to fetch questions: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Failed to fetch questions: {url} responded with status {status}")]
    Status { status: u16, url: String },

    /// Payload is not a valid quiz document.
    #[error("Malformed quiz payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read quiz file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
