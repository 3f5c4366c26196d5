//! Journal entry handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use dokument_core::{EditJournalEntryCommand, RegisterJournalEntryCommand};

use super::{
    json_body, parse_tagged, respond, respond_registered, respond_status, CallerBearer, Unit,
};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /journalpost/{taggedId}
pub async fn get_journalpost(
    State(state): State<AppState>,
    Path(tagged_id): Path<String>,
    CallerBearer(bearer): CallerBearer,
) -> Result<Response, ApiError> {
    tracing::debug!(id = %tagged_id, "Fetch journal entry");
    let id = parse_tagged(&tagged_id)?;

    let result = state.service().fetch_entry(&id, &bearer).await?;
    Ok(respond(result))
}

/// POST /journalpost/ny
pub async fn register_journalpost(
    State(state): State<AppState>,
    CallerBearer(bearer): CallerBearer,
    Unit(unit): Unit,
    body: Result<Json<RegisterJournalEntryCommand>, JsonRejection>,
) -> Result<Response, ApiError> {
    let command = json_body(body)?;
    tracing::debug!(unit = %unit, id = ?command.id, "Register journal entry");

    let result = state.service().register(&unit, &command, &bearer).await?;
    Ok(respond_registered(result))
}

/// POST /journalpost
pub async fn update_journalpost(
    State(state): State<AppState>,
    CallerBearer(bearer): CallerBearer,
    Unit(unit): Unit,
    body: Result<Json<EditJournalEntryCommand>, JsonRejection>,
) -> Result<Response, ApiError> {
    let command = json_body(body)?;
    tracing::debug!(unit = %unit, id = ?command.id, "Edit journal entry");

    let result = state.service().update(&unit, &command, &bearer).await?;
    Ok(respond_status(result))
}
