//! dokument-gateway - aggregation over the journal backends
//!
//! [`JournalpostService`] sits between the REST layer and the two backend
//! gateways. It picks the backend from the source-system tag of an
//! identifier, merges case journals from both backends and turns a
//! registration into an edit.
//!
//! ```text
//!                ┌──────────────────────┐
//!   REST layer ─▶│  JournalpostService  │
//!                └──────────┬───────────┘
//!                  bid ┌────┴────┐ joark / gsak
//!                      ▼         ▼
//!            ┌──────────────┐ ┌──────────────┐
//!            │  journalpost │ │    arkiv     │
//!            │   (reads,    │ │ (read-only)  │
//!            │   writes)    │ │              │
//!            └──────────────┘ └──────────────┘
//! ```

mod service;

pub use service::JournalpostService;

// Re-export core types for convenience
pub use dokument_core::{BackendError, BackendResult, JournalBackend};
