//! LoggingBackend - logs the outcome of every call to a journal backend

use async_trait::async_trait;
use dokument_core::{
    AvvikType, Avvikshendelse, BackendResult, BearerToken, CreatedDeviationRef,
    EditJournalEntryCommand, JournalBackend, JournalEntry, RegisterJournalEntryCommand,
    StatusResult, TaggedIdentifier,
};
use tracing::{info, warn};

/// Wraps a [`JournalBackend`] and logs backend, method, identifying key and
/// resulting status for each call. Transport failures are logged at warn
/// and returned unchanged.
pub struct LoggingBackend<B> {
    inner: B,
}

impl<B: JournalBackend> LoggingBackend<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    fn log<T>(&self, method: &str, key: &str, result: &BackendResult<StatusResult<T>>) {
        match result {
            Ok(r) => info!(
                backend = self.inner.name(),
                method,
                key,
                status = r.status().as_u16(),
                "Backend answered"
            ),
            Err(e) => warn!(
                backend = self.inner.name(),
                method,
                key,
                error = %e,
                "Call to backend failed"
            ),
        }
    }
}

#[async_trait]
impl<B: JournalBackend> JournalBackend for LoggingBackend<B> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn fetch_entry(
        &self,
        id: &TaggedIdentifier,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<JournalEntry>> {
        let result = self.inner.fetch_entry(id, bearer).await;
        self.log("fetch_entry", &id.to_string(), &result);
        result
    }

    async fn find_entries(
        &self,
        case_number: &str,
        domain_area: &str,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<Vec<JournalEntry>>> {
        let result = self.inner.find_entries(case_number, domain_area, bearer).await;
        self.log("find_entries", case_number, &result);
        result
    }

    async fn find_deviations(
        &self,
        case_number: &str,
        id: &TaggedIdentifier,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<Vec<AvvikType>>> {
        let result = self.inner.find_deviations(case_number, id, bearer).await;
        self.log("find_deviations", &id.to_string(), &result);
        result
    }

    async fn create_deviation(
        &self,
        unit: &str,
        id: &TaggedIdentifier,
        event: &Avvikshendelse,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<CreatedDeviationRef>> {
        let result = self.inner.create_deviation(unit, id, event, bearer).await;
        self.log("create_deviation", &id.to_string(), &result);
        result
    }

    async fn register(
        &self,
        command: &RegisterJournalEntryCommand,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<JournalEntry>> {
        let result = self.inner.register(command, bearer).await;
        self.log("register", command.id.as_deref().unwrap_or("-"), &result);
        result
    }

    async fn update(
        &self,
        unit: &str,
        command: &EditJournalEntryCommand,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<()>> {
        let result = self.inner.update(unit, command, bearer).await;
        self.log("update", command.id.as_deref().unwrap_or("-"), &result);
        result
    }
}
