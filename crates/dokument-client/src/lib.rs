//! Journal backend REST client
//!
//! A thin typed client used by the backend gateways to call
//! bidrag-dokument-journalpost and bidrag-dokument-arkiv. Every call
//! forwards the caller's bearer token and returns the backend's status and
//! body as a [`dokument_core::StatusResult`].
//!
//! # Example
//!
//! ```rust,no_run
//! use dokument_client::JournalClient;
//! use dokument_core::{BearerToken, JournalEntry};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JournalClient::new("http://localhost:8090/bidrag-dokument-journalpost")?;
//!     let bearer = BearerToken::new("eyJ0eXAi...");
//!
//!     let result = client.get::<JournalEntry>("/journalpost/1", &[], &bearer).await?;
//!     println!("{}", result.status());
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module provides a fake journal backend and a server
//! harness for integration tests.

mod client;
mod error;
pub mod testing;

pub use client::{encode_path_segment, JournalClient, X_ENHET_HEADER};
pub use error::{ClientError, Result};
