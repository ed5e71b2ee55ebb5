//! Client error types

use thiserror::Error;

/// Client error type
///
/// Three families, mirroring how failures surface to the user:
/// transport (fetch rejected), application (`success == false` envelope),
/// and validation (precondition caught before any network call).
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network, timeout, non-2xx status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a success=false envelope
    #[error("{0}")]
    Api(String),

    /// Response did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client-side precondition not met; never sent to the backend
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the failure never left the client
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
