//! Application state for the bidrag-dokument API

use std::sync::Arc;

use dokument_gateway::JournalpostService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service: Arc<JournalpostService>,
}

impl AppState {
    pub fn new(service: JournalpostService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn service(&self) -> &JournalpostService {
        &self.service
    }
}
