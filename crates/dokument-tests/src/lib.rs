//! End-to-end tests for bidrag-dokument
//!
//! The tests run the whole stack in process: the REST router, the
//! `JournalpostService`, both consumers wrapped in `LoggingBackend`, and two
//! fake journal backends on real sockets.
//!
//! ```bash
//! cargo test -p dokument-tests
//! ```
//!
//! - `e2e_test.rs` - routing, aggregation and status mapping through HTTP
//!
//! [`Stack`] wires everything together.

use std::sync::Arc;
use std::time::Duration;

use dokument_api::{create_router, AppState};
use dokument_client::testing::{FakeUpstream, TestServer};
use dokument_client::JournalClient;
use dokument_consumer::{ArkivConsumer, JournalpostConsumer, LoggingBackend};
use dokument_gateway::JournalpostService;

pub const AUTH: &str = "Bearer e2e-token";

/// The daemon's stack between two fake journal backends
pub struct Stack {
    pub journalpost: FakeUpstream,
    pub arkiv: FakeUpstream,
    pub server: TestServer,
    journalpost_server: Option<TestServer>,
    _arkiv_server: TestServer,
}

impl Stack {
    pub async fn start() -> std::io::Result<Self> {
        Self::with_timeout(Duration::from_secs(5)).await
    }

    /// Start with `timeout` on every outbound request
    pub async fn with_timeout(timeout: Duration) -> std::io::Result<Self> {
        let journalpost = FakeUpstream::new();
        let arkiv = FakeUpstream::new();
        let journalpost_server = journalpost.start().await?;
        let arkiv_server = arkiv.start().await?;

        let client = |base_url: &str| {
            JournalClient::with_config(base_url, timeout, Duration::from_secs(1))
                .map_err(std::io::Error::other)
        };

        let service = JournalpostService::new(
            Arc::new(LoggingBackend::new(JournalpostConsumer::new(client(
                &journalpost_server.base_url(),
            )?))),
            Arc::new(LoggingBackend::new(ArkivConsumer::new(client(
                &arkiv_server.base_url(),
            )?))),
        );
        let server = TestServer::start(create_router(AppState::new(service))).await?;

        Ok(Self {
            journalpost,
            arkiv,
            server,
            journalpost_server: Some(journalpost_server),
            _arkiv_server: arkiv_server,
        })
    }

    /// Take the journalpost backend off the network
    pub async fn stop_journalpost(&mut self) {
        if let Some(server) = self.journalpost_server.take() {
            server.shutdown().await;
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.server
            .http
            .get(self.server.url(path))
            .header("Authorization", AUTH)
            .send()
            .await
    }

    pub async fn post(
        &self,
        path: &str,
        unit: Option<&str>,
        body: &serde_json::Value,
    ) -> reqwest::Result<reqwest::Response> {
        let mut request = self
            .server
            .http
            .post(self.server.url(path))
            .header("Authorization", AUTH)
            .json(body);
        if let Some(unit) = unit {
            request = request.header("X-Enhet", unit);
        }
        request.send().await
    }

    /// Requests seen by both fake backends
    pub fn upstream_calls(&self) -> usize {
        self.journalpost.request_count() + self.arkiv.request_count()
    }
}
