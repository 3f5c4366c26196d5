//! HTTP request handlers for the bidrag-dokument API
//!
//! Handlers parse tagged identifiers from the path, call the
//! `JournalpostService` and turn its `StatusResult` into a response.

pub mod avvik;
pub mod journalpost;
pub mod sakjournal;

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use dokument_core::{BearerToken, StatusResult, TaggedIdentifier};
use serde::Serialize;

use crate::error::ApiError;

/// Header carrying the case worker's unit
pub const X_ENHET: &str = "x-enhet";

/// The caller's bearer token, required on every journal route
pub struct CallerBearer(pub BearerToken);

impl<S: Send + Sync> FromRequestParts<S> for CallerBearer {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(CallerBearer(BearerToken::new(bearer.token())))
    }
}

/// The unit from the `X-Enhet` header, required on writes
pub struct Unit(pub String);

impl<S: Send + Sync> FromRequestParts<S> for Unit {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(X_ENHET)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Missing X-Enhet header".to_string()))?;

        checked_unit(raw).map(Unit)
    }
}

/// A unit is forwarded upstream as the `X-Enhet` header, so it must be a
/// valid non-empty header value
pub(crate) fn checked_unit(raw: &str) -> Result<String, ApiError> {
    if raw.is_empty() || HeaderValue::from_str(raw).is_err() {
        tracing::warn!(unit = ?raw, "Rejected unit");
        return Err(ApiError::BadRequest(format!("Invalid unit: {:?}", raw)));
    }
    Ok(raw.to_string())
}

/// Parse a tagged identifier from the path
pub(crate) fn parse_tagged(raw: &str) -> Result<TaggedIdentifier, ApiError> {
    dokument_core::parse(raw).map_err(|e| {
        tracing::warn!(input = %raw, error = %e, "Rejected tagged identifier");
        ApiError::from(e)
    })
}

/// Decode a JSON body taken as `Result<Json<T>, JsonRejection>`, after the
/// path has been checked
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

/// Status and JSON body as decided by the backend
pub(crate) fn respond<T: Serialize>(result: StatusResult<T>) -> Response {
    match result.into_parts() {
        (status, Some(body)) => (status, Json(body)).into_response(),
        (status, None) => status.into_response(),
    }
}

/// Status only, for writes whose answer carries nothing
pub(crate) fn respond_status(result: StatusResult<()>) -> Response {
    result.status().into_response()
}

/// A registration that succeeded without `201 Created` means the entry
/// already existed and answers `200 OK`
pub(crate) fn respond_registered(result: StatusResult<()>) -> Response {
    match result.status() {
        StatusCode::CREATED => StatusCode::CREATED.into_response(),
        status if status.is_success() => StatusCode::OK.into_response(),
        status => status.into_response(),
    }
}
