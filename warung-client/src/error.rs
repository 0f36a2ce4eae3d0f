//! Client error types

use shared::error::AppError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (transport fault; retry is the caller's call)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the operation; message passed through verbatim
    #[error("API error: {0}")]
    Api(String),

    /// Domain rule violated before any external call was made
    #[error("{0}")]
    Domain(#[from] AppError),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// The stable domain reason code, if this is a domain error
    pub fn reason_code(&self) -> Option<shared::error::ErrorCode> {
        match self {
            ClientError::Domain(err) => Some(err.code),
            _ => None,
        }
    }

    /// True for transport-level faults where the snapshot was left untouched
    /// and the caller may retry at its discretion
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Http(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
