//! Test utilities for dokument-client
//!
//! [`TestServer`] runs an axum router on an ephemeral port. [`FakeUpstream`]
//! is a router that plays a journal backend: it answers with canned
//! responses and records every request it receives.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use parking_lot::Mutex;
use tokio::net::TcpListener;

/// A test server that automatically shuts down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub http: reqwest::Client,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Serve `router` on 127.0.0.1 with an OS-assigned port
    ///
    /// # Example
    ///
    /// ```ignore
    /// use dokument_client::testing::{FakeUpstream, TestServer};
    ///
    /// let upstream = FakeUpstream::new();
    /// let server = TestServer::start(upstream.router()).await?;
    /// let client = JournalClient::new(&server.base_url())?;
    /// ```
    pub async fn start(router: Router) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(std::io::Error::other)?;

        Ok(Self {
            addr,
            http,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Get the base URL of the test server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Absolute URL for a path on this server
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Shutdown the server gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// A request as seen by [`FakeUpstream`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub unit: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: StatusCode,
    body: Option<serde_json::Value>,
    delay: Option<Duration>,
}

#[derive(Default)]
struct FakeUpstreamState {
    routes: Mutex<HashMap<(String, String), CannedResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Canned journal backend. Unknown routes answer 404.
#[derive(Clone, Default)]
pub struct FakeUpstream {
    state: Arc<FakeUpstreamState>,
}

impl FakeUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` (path without query) with `status` and `body`
    pub fn respond(
        &self,
        method: &str,
        path: &str,
        status: u16,
        body: Option<serde_json::Value>,
    ) -> &Self {
        self.insert(method, path, status, body, None)
    }

    /// Like [`FakeUpstream::respond`], after sleeping for `delay`
    pub fn respond_after(
        &self,
        method: &str,
        path: &str,
        delay: Duration,
        status: u16,
        body: Option<serde_json::Value>,
    ) -> &Self {
        self.insert(method, path, status, body, Some(delay))
    }

    fn insert(
        &self,
        method: &str,
        path: &str,
        status: u16,
        body: Option<serde_json::Value>,
        delay: Option<Duration>,
    ) -> &Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.state.routes.lock().insert(
            (method.to_uppercase(), path.to_string()),
            CannedResponse {
                status,
                body,
                delay,
            },
        );
        self
    }

    /// All requests received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().len()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .fallback(answer)
            .with_state(self.state.clone())
    }

    /// Start serving on an ephemeral port
    pub async fn start(&self) -> std::io::Result<TestServer> {
        TestServer::start(self.router()).await
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn answer(State(state): State<Arc<FakeUpstreamState>>, request: Request) -> Response {
    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);
    let authorization = header(request.headers(), "authorization");
    let unit = header(request.headers(), "x-enhet");

    let bytes = to_bytes(request.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let body = serde_json::from_slice(&bytes).ok();

    state.requests.lock().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query,
        authorization,
        unit,
        body,
    });

    let canned = state.routes.lock().get(&(method, path)).cloned();
    let Some(canned) = canned else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    match canned.body {
        Some(body) => (canned.status, axum::Json(body)).into_response(),
        None => (canned.status, Body::empty()).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_format() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        let url = format!("http://{}", addr);
        assert_eq!(url, "http://127.0.0.1:8080");
    }

    #[tokio::test]
    async fn fake_upstream_records_and_answers() {
        let upstream = FakeUpstream::new();
        upstream.respond("GET", "/ping", 200, Some(serde_json::json!({"pong": true})));
        let server = upstream.start().await.unwrap();

        let response = server
            .http
            .get(server.url("/ping?x=1"))
            .header("Authorization", "Bearer t")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let requests = upstream.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query.as_deref(), Some("x=1"));
        assert_eq!(requests[0].authorization.as_deref(), Some("Bearer t"));
    }

    #[tokio::test]
    async fn fake_upstream_answers_404_for_unknown_routes() {
        let upstream = FakeUpstream::new();
        let server = upstream.start().await.unwrap();

        let response = server.http.get(server.url("/nope")).send().await.unwrap();

        assert_eq!(response.status().as_u16(), 404);
        assert_eq!(upstream.request_count(), 1);
    }
}
