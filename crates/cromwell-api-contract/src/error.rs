//! Error types for working with API contract values

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when decoding or exporting a raw JSON payload
#[derive(Debug, Error)]
pub enum ApiContractError {
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for contract operations
pub type ApiContractResult<T> = Result<T, ApiContractError>;
