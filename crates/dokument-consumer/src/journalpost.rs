//! JournalpostConsumer - gateway to bidrag-dokument-journalpost

use async_trait::async_trait;
use dokument_client::{encode_path_segment, JournalClient};
use dokument_core::{
    AvvikType, Avvikshendelse, BackendResult, BearerToken, CreatedDeviationRef,
    EditJournalEntryCommand, JournalBackend, JournalEntry, RegisterJournalEntryCommand,
    StatusResult, TaggedIdentifier,
};

use crate::error::map_err;

/// Gateway to the bidrag journal (system `bid`).
///
/// The full capability set: reads, deviations and writes.
pub struct JournalpostConsumer {
    client: JournalClient,
}

impl JournalpostConsumer {
    pub fn new(client: JournalClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JournalBackend for JournalpostConsumer {
    fn name(&self) -> &str {
        "bidrag-dokument-journalpost"
    }

    async fn fetch_entry(
        &self,
        id: &TaggedIdentifier,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<JournalEntry>> {
        let path = format!("/journalpost/{}", encode_path_segment(id.raw_id()));
        self.client.get(&path, &[], bearer).await.map_err(map_err)
    }

    async fn find_entries(
        &self,
        case_number: &str,
        domain_area: &str,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<Vec<JournalEntry>>> {
        let path = format!("/sak/{}", encode_path_segment(case_number));
        self.client
            .get(&path, &[("fagomrade", domain_area)], bearer)
            .await
            .map_err(map_err)
    }

    async fn find_deviations(
        &self,
        case_number: &str,
        id: &TaggedIdentifier,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<Vec<AvvikType>>> {
        let path = format!(
            "/sak/{}/journal/{}/avvik",
            encode_path_segment(case_number),
            encode_path_segment(id.raw_id())
        );
        self.client.get(&path, &[], bearer).await.map_err(map_err)
    }

    async fn create_deviation(
        &self,
        unit: &str,
        id: &TaggedIdentifier,
        event: &Avvikshendelse,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<CreatedDeviationRef>> {
        let path = format!("/journal/{}/avvik", encode_path_segment(id.raw_id()));
        self.client
            .post(&path, event, Some(unit), bearer)
            .await
            .map_err(map_err)
    }

    /// Direct `POST /journalpost/ny`; the service registers through `update`
    async fn register(
        &self,
        command: &RegisterJournalEntryCommand,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<JournalEntry>> {
        self.client
            .post("/journalpost/ny", command, None, bearer)
            .await
            .map_err(map_err)
    }

    async fn update(
        &self,
        unit: &str,
        command: &EditJournalEntryCommand,
        bearer: &BearerToken,
    ) -> BackendResult<StatusResult<()>> {
        self.client
            .post_status_only("/journalpost", command, Some(unit), bearer)
            .await
            .map_err(map_err)
    }
}
