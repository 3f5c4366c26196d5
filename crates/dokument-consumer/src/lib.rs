//! dokument-consumer - journal backend gateways
//!
//! Implements `JournalBackend` for the two journal backends by calling them
//! over HTTP through `JournalClient`:
//!
//! - [`JournalpostConsumer`] talks to bidrag-dokument-journalpost, which
//!   owns `bid` entries and is the only backend that takes writes and
//!   deviations.
//! - [`ArkivConsumer`] talks to bidrag-dokument-arkiv (joark) and is
//!   read-only from this service.
//!
//! [`LoggingBackend`] wraps either one and logs the outcome of every call.

mod arkiv;
mod error;
mod journalpost;
mod logging;

pub use arkiv::ArkivConsumer;
pub use error::map_err;
pub use journalpost::JournalpostConsumer;
pub use logging::LoggingBackend;
