//! Status-carrying result of a backend call

use http::StatusCode;

/// Outcome of a backend call: the status the backend decided on, and the
/// body when there is one.
///
/// The constructors keep two invariants:
/// - a success status without a body becomes `204 No Content`
/// - a non-success status never carries a body
#[derive(Debug, Clone, PartialEq)]
pub struct StatusResult<T> {
    status: StatusCode,
    body: Option<T>,
}

impl<T> StatusResult<T> {
    /// Normalise a backend answer
    pub fn new(status: StatusCode, body: Option<T>) -> Self {
        match body {
            Some(body) if status.is_success() => Self {
                status,
                body: Some(body),
            },
            None if status.is_success() => Self::no_content(),
            _ => Self { status, body: None },
        }
    }

    pub fn ok(body: T) -> Self {
        Self::new(StatusCode::OK, Some(body))
    }

    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body: None,
        }
    }

    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    pub fn into_body(self) -> Option<T> {
        self.body
    }

    pub fn into_parts(self) -> (StatusCode, Option<T>) {
        (self.status, self.body)
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StatusResult<U> {
        StatusResult {
            status: self.status,
            body: self.body.map(f),
        }
    }
}

impl<T> StatusResult<Vec<T>> {
    /// The list when the backend answered with success, otherwise empty
    pub fn into_list(self) -> Vec<T> {
        if self.status.is_success() {
            self.body.unwrap_or_default()
        } else {
            Vec::new()
        }
    }
}
