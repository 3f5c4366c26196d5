//! Case journal handler

use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde::Deserialize;

use super::{parse_tagged, respond, CallerBearer};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SakjournalQuery {
    /// Domain area, e.g. BID (child support) or FAR (paternity)
    #[serde(alias = "domainArea")]
    pub fagomrade: String,
}

/// GET /sakjournal/{taggedCaseNumber}?fagomrade=
pub async fn get_sakjournal(
    State(state): State<AppState>,
    Path(tagged_case_number): Path<String>,
    Query(query): Query<SakjournalQuery>,
    CallerBearer(bearer): CallerBearer,
) -> Result<Response, ApiError> {
    tracing::debug!(case = %tagged_case_number, fagomrade = %query.fagomrade, "Fetch case journal");
    let case_number = parse_tagged(&tagged_case_number)?;

    let result = state
        .service()
        .find_entries(case_number.raw_id(), &query.fagomrade, &bearer)
        .await?;
    Ok(respond(result))
}
