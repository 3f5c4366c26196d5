//! Deviation handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use dokument_core::Avvikshendelse;

use super::{checked_unit, json_body, parse_tagged, respond, CallerBearer};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /avvik/{taggedCaseNumber}/{taggedId}
pub async fn list_avvik(
    State(state): State<AppState>,
    Path((tagged_case_number, tagged_id)): Path<(String, String)>,
    CallerBearer(bearer): CallerBearer,
) -> Result<Response, ApiError> {
    let case_number = parse_tagged(&tagged_case_number)?;
    let id = parse_tagged(&tagged_id)?;

    let result = state
        .service()
        .find_deviations(case_number.raw_id(), &id, &bearer)
        .await?;
    Ok(respond(result))
}

/// POST /avvik/{unit}/{taggedId}
pub async fn create_avvik(
    State(state): State<AppState>,
    Path((unit, tagged_id)): Path<(String, String)>,
    CallerBearer(bearer): CallerBearer,
    body: Result<Json<Avvikshendelse>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = parse_tagged(&tagged_id)?;
    let unit = checked_unit(&unit)?;
    let event = json_body(body)?;
    tracing::debug!(unit = %unit, id = %id, avvik_type = ?event.avvik_type(), "Create deviation");

    let result = state
        .service()
        .create_deviation(&unit, &id, &event, &bearer)
        .await?;
    Ok(respond(result))
}
