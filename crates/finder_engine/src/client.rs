use std::time::Duration;

use finder_core::SearchResult;
use finder_logging::finder_debug;
use futures_util::StreamExt;
use url::Url;

use crate::{FailureKind, SearchError};

#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Origin serving the search API, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    pub endpoint_path: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            endpoint_path: "/api/addons".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

impl SearchSettings {
    /// Endpoint URL with `query` encoded as the `q` parameter.
    pub fn endpoint_url(&self, query: &str) -> Result<Url, SearchError> {
        let base = Url::parse(&self.base_url)
            .map_err(|err| SearchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let mut url = base
            .join(&self.endpoint_path)
            .map_err(|err| SearchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut().clear().append_pair("q", query);
        Ok(url)
    }
}

#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSearchClient {
    settings: SearchSettings,
    client: reqwest::Client,
}

impl ReqwestSearchClient {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SearchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, SearchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl SearchClient for ReqwestSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = self.settings.endpoint_url(query)?;
        finder_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = self.read_body(response).await?;
        serde_json::from_slice(&body)
            .map_err(|err| SearchError::new(FailureKind::Decode, err.to_string()))
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> SearchError {
    SearchError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return SearchError::new(FailureKind::Decode, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
