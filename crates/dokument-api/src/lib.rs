//! dokument-api - bidrag-dokument REST API layer
//!
//! Exposes the `JournalpostService` over HTTP. Every journal route needs an
//! `Authorization: Bearer` header, which is forwarded to the backends.
//!
//! # Usage
//!
//! ```ignore
//! use dokument_api::{create_router, AppState};
//! use dokument_gateway::JournalpostService;
//!
//! let service = JournalpostService::new(journalpost, arkiv);
//! let router = create_router(AppState::new(service));
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the bidrag-dokument REST API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Liveness
        .route("/status", get(|| async { "OK" }))
        // Journal entries
        .route(
            "/journalpost",
            post(handlers::journalpost::update_journalpost),
        )
        .route(
            "/journalpost/ny",
            post(handlers::journalpost::register_journalpost),
        )
        .route(
            "/journalpost/{tagged_id}",
            get(handlers::journalpost::get_journalpost),
        )
        // Case journal
        .route(
            "/sakjournal/{tagged_case_number}",
            get(handlers::sakjournal::get_sakjournal),
        )
        // Deviations: GET takes a case number, POST takes the unit
        .route(
            "/avvik/{scope}/{tagged_id}",
            get(handlers::avvik::list_avvik).post(handlers::avvik::create_avvik),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
