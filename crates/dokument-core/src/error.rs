//! Error types for backend gateways
//!
//! A status code returned by a journal backend is not an error; it travels
//! inside [`crate::StatusResult`]. `BackendError` is reserved for failures
//! to get an answer at all.

use thiserror::Error;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors that can occur while talking to a journal backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection refused, reset, DNS failure etc.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Timeout waiting for response
    #[error("Request timed out")]
    Timeout,

    /// Backend answered with a body we could not decode
    #[error("Invalid response from backend: {0}")]
    InvalidResponse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            BackendError::Transport(_) => 503,
            BackendError::Timeout => 504,
            BackendError::InvalidResponse(_) => 502,
            BackendError::Internal(_) => 500,
        }
    }
}
