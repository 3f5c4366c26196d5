//! Error types for journal client operations

use thiserror::Error;

/// Result type alias for journal client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while calling a journal backend.
///
/// A backend that answers with a non-success status is not an error;
/// see [`dokument_core::StatusResult`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Header value could not be built
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

impl ClientError {
    /// Classify a reqwest error into timeout / connection / generic failure
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::ConnectionFailed(err.to_string())
        } else {
            ClientError::HttpError(err)
        }
    }
}
