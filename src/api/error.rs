// ABOUTME: Error types for backend requests
// Display strings are shown to the user as-is, so they read as complete sentences

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Non-2xx response; `message` is the server detail or a generic fallback
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Malformed(&'static str),

    #[error("API response missing '{0}' field")]
    MissingField(&'static str),
}
