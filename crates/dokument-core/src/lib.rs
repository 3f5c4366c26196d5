//! dokument-core - Core traits and types for bidrag-dokument
//!
//! This crate provides the abstractions shared by the backend gateways,
//! the aggregation service and the REST layer:
//!
//! - [`identifier`] parses source-system tagged identifiers (`bid-101`, `joark-7`)
//! - [`models`] holds the journal DTOs exchanged with both journal backends
//! - [`JournalBackend`] is the capability set every backend gateway implements

pub mod backend;
pub mod error;
pub mod identifier;
pub mod models;

pub use backend::{BearerToken, JournalBackend};
pub use error::{BackendError, BackendResult};
pub use identifier::{parse, ParseError, SourceSystem, TaggedIdentifier};
pub use models::*;
