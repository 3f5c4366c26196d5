//! Journal backend HTTP client implementation

use std::time::Duration;

use dokument_core::{BearerToken, StatusResult};
use http::StatusCode;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{ClientError, Result};

/// Header carrying the case worker's unit on write requests
pub const X_ENHET_HEADER: &str = "X-Enhet";

/// Percent-encode an id so it stays a single path segment
pub fn encode_path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// REST client for one journal backend.
///
/// Every request carries the caller's bearer token. The client holds no
/// credentials of its own.
#[derive(Debug, Clone)]
pub struct JournalClient {
    client: Client,
    base_url: Url,
}

impl JournalClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the backend, including any context path
    ///   (e.g., "http://localhost:8090/bidrag-dokument-journalpost")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a URL below the base URL, keeping its context path.
    fn url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    /// GET a JSON resource
    #[instrument(skip(self, bearer))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        bearer: &BearerToken,
    ) -> Result<StatusResult<T>> {
        let url = self.url(path)?;
        debug!("GET {}", url);

        let request = self.client.get(url).query(query);
        self.send(request, bearer).await
    }

    /// POST a JSON body and decode the JSON answer
    #[instrument(skip(self, body, bearer))]
    pub async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        unit: Option<&str>,
        bearer: &BearerToken,
    ) -> Result<StatusResult<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!("POST {}", url);

        let request = with_unit(self.client.post(url).json(body), unit)?;
        self.send(request, bearer).await
    }

    /// POST a JSON body where only the status of the answer matters
    #[instrument(skip(self, body, bearer))]
    pub async fn post_status_only<B>(
        &self,
        path: &str,
        body: &B,
        unit: Option<&str>,
        bearer: &BearerToken,
    ) -> Result<StatusResult<()>>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        debug!("POST {}", url);

        let request = with_unit(self.client.post(url).json(body), unit)?;
        let response = with_bearer(request, bearer)?
            .send()
            .await
            .map_err(ClientError::from_reqwest)?;

        let status = response.status();
        let body = (status != StatusCode::NO_CONTENT).then_some(());
        Ok(StatusResult::new(status, body))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        bearer: &BearerToken,
    ) -> Result<StatusResult<T>> {
        let response = with_bearer(request, bearer)?
            .send()
            .await
            .map_err(ClientError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "Backend answered without success");
            return Ok(StatusResult::new(status, None));
        }

        let bytes = response.bytes().await.map_err(ClientError::from_reqwest)?;
        if bytes.is_empty() {
            return Ok(StatusResult::new(status, None));
        }

        let body = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::ParseError(e.to_string()))?;

        Ok(StatusResult::new(status, Some(body)))
    }
}

fn with_bearer(request: RequestBuilder, bearer: &BearerToken) -> Result<RequestBuilder> {
    let value = HeaderValue::from_str(bearer.header_value())
        .map_err(|e| ClientError::InvalidHeader(format!("Invalid auth token: {}", e)))?;
    Ok(request.header(AUTHORIZATION, value))
}

fn with_unit(request: RequestBuilder, unit: Option<&str>) -> Result<RequestBuilder> {
    match unit {
        Some(unit) => {
            let value = HeaderValue::from_str(unit)
                .map_err(|e| ClientError::InvalidHeader(format!("Invalid unit: {}", e)))?;
            Ok(request.header(X_ENHET_HEADER, value))
        }
        None => Ok(request),
    }
}
