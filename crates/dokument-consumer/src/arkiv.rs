//! ArkivConsumer - gateway to bidrag-dokument-arkiv (joark)

use async_trait::async_trait;
use dokument_client::{encode_path_segment, JournalClient};
use dokument_core::{
    BackendResult, BearerToken, JournalBackend, JournalEntry, StatusResult, TaggedIdentifier,
};

use crate::error::map_err;

/// Gateway to the national archive (system `joark`).
///
/// Read-only: deviations and writes keep the trait defaults and answer
/// `400 Bad Request` without calling out.
pub struct ArkivConsumer {
    client: JournalClient,
}

impl ArkivConsumer {
    pub fn new(client: JournalClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JournalBackend for ArkivConsumer {
    fn name(&self) -> &str {
        "bidrag-dokument-arkiv"
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
        let path = format!("/sakjournal/{}", encode_path_segment(case_number));
        self.client
            .get(&path, &[("fagomrade", domain_area)], bearer)
            .await
            .map_err(map_err)
    }
}
