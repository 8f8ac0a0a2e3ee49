// Error types for the github-activity CLI.
// Distinguishes the user-facing "not found" case from generic HTTP and
// transport failures, plus cache persistence errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("HTTP error {status}: {status_text} @ {url}")]
    Http {
        status: u16,
        status_text: String,
        url: String,
    },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Failed to write cache file {path}: {source}")]
    CachePersist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
