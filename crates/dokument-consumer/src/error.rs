//! Conversion of client failures into backend errors

use dokument_client::ClientError;
use dokument_core::BackendError;

/// Map a [`ClientError`] onto the backend error taxonomy.
///
/// Only failures to get an answer end up here; upstream statuses travel in
/// the `StatusResult`.
pub fn map_err(e: ClientError) -> BackendError {
    match e {
        ClientError::Timeout => BackendError::Timeout,
        ClientError::ConnectionFailed(m) => BackendError::Transport(m),
        ClientError::HttpError(e) => BackendError::Transport(e.to_string()),
        ClientError::ParseError(m) => BackendError::InvalidResponse(m),
        other => BackendError::Internal(other.to_string()),
    }
}
