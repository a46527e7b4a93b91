//! Error types for the REST API client

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when using the REST API client
#[derive(Debug, Error)]
pub enum RestClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed: {status}")]
    Status { status: StatusCode },

    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RestClientError {
    /// HTTP status of a rejected request, if the engine answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RestClientError::Status { status } => Some(*status),
            RestClientError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Result type alias for REST client operations
pub type RestClientResult<T> = Result<T, RestClientError>;
