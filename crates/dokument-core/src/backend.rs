//! JournalBackend trait - the capability set of a journal backend gateway

use std::fmt;

use async_trait::async_trait;

use crate::error::BackendResult;
use crate::identifier::TaggedIdentifier;
use crate::models::{
    AvvikType, Avvikshendelse, CreatedDeviationRef, EditJournalEntryCommand, JournalEntry,
    RegisterJournalEntryCommand, StatusResult,
};

/// The caller's `Authorization` credential, forwarded verbatim upstream.
///
/// Lives for one request only.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw token; the `Bearer ` scheme is added when missing.
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.starts_with("Bearer ") {
            Self(token)
        } else {
            Self(format!("Bearer {}", token))
        }
    }

    /// Full header value, `Bearer <token>`
    pub fn header_value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// Operations every journal backend gateway exposes.
///
/// A backend status that is not a success is returned inside
/// [`StatusResult`], not as an error; `Err` means the backend could not be
/// reached. Gateways that do not handle deviations or writes keep the
/// default implementations, which answer `400 Bad Request` without calling
/// out.
#[async_trait]
pub trait JournalBackend: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fetch a single journal entry
    async fn fetch_entry(
        &self,
        id: &TaggedIdentifier,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<JournalEntry>>;

    /// Find the journal entries of a case within a domain area
    async fn find_entries(
        &self,
        case_number: &str,
        domain_area: &str,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<Vec<JournalEntry>>>;

    /// Deviation kinds that can be raised against an entry
    async fn find_deviations(
        &self,
        case_number: &str,
        id: &TaggedIdentifier,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<Vec<AvvikType>>> {
        let _ = (case_number, id, bearer);
        Ok(StatusResult::bad_request())
    }

    /// Raise a deviation against an entry on behalf of `unit`
    async fn create_deviation(
        &self,
        unit: &str,
        id: &TaggedIdentifier,
        event: &Avvikshendelse,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<CreatedDeviationRef>> {
        let _ = (unit, id, event, bearer);
        Ok(StatusResult::bad_request())
    }

    /// Register a new journal entry.
    ///
    /// `JournalpostService::register` does not call this; it sends
    /// registrations through [`JournalBackend::update`].
    async fn register(
        &self,
        command: &RegisterJournalEntryCommand,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<JournalEntry>> {
        let _ = (command, bearer);
        Ok(StatusResult::bad_request())
    }

    /// Edit an existing journal entry on behalf of `unit`
    async fn update(
        &self,
        unit: &str,
        command: &EditJournalEntryCommand,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<()>> {
        let _ = (unit, command, bearer);
        Ok(StatusResult::bad_request())
    }
}
