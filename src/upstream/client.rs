//! HTTP client for the KCSC OpenAPI.
//!
//! # Responsibilities
//! - Build upstream URLs from the configured base and validated parameters
//! - Attach the server-held key as the `key` query parameter
//! - Issue exactly one GET per call, bounded by the configured timeout
//!
//! # Design Decisions
//! - No retries; a failed call is reported once as `UpstreamError`
//! - reqwest errors are stored without their URL, which carries the key
//! - Timeouts are distinct from other failures (504 vs 502)
//! - Bodies are decoded with the `Content-Type` charset (UTF-8 when absent)

use axum::http::StatusCode;
use reqwest::Client;
use std::time::{Duration, Instant};
use url::Url;

use crate::codes::{CodeNumber, CodeType};
use crate::config::{Secret, UpstreamConfig};

/// Error type for upstream calls.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream base URL `{0}` cannot take path segments")]
    InvalidBaseUrl(String),

    #[error("failed to build upstream client: {0}")]
    Build(reqwest::Error),

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Request(reqwest::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::Request(e.without_url())
        }
    }
}

/// Status and decoded body text of an upstream reply.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Client for the two read-only upstream endpoints.
pub struct UpstreamClient {
    http: Client,
    base_url: Url,
    api_key: Secret,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|u| !u.cannot_be_a_base())
            .ok_or_else(|| UpstreamError::InvalidBaseUrl(config.base_url.clone()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("kcsc-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(UpstreamError::Build)?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// `GET {base}/CodeList?key=...`
    pub async fn code_list(&self) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.endpoint(&["CodeList"])?;
        self.get(url).await
    }

    /// `GET {base}/CodeViewer/{code_type}/{code}?key=...`
    pub async fn code_viewer(
        &self,
        code_type: CodeType,
        code: &CodeNumber,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.endpoint(&["CodeViewer", code_type.as_str(), code.as_str()])?;
        self.get(url).await
    }

    /// Base URL with `segments` appended. The key is added at send time so
    /// the returned URL is safe to log.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<UpstreamResponse, UpstreamError> {
        let start = Instant::now();
        tracing::debug!(upstream = %url, "Forwarding to upstream");

        let response = self
            .http
            .get(url.clone())
            .query(&[("key", self.api_key.expose())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::info!(
            upstream = %url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Upstream responded"
        );

        Ok(UpstreamResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> UpstreamClient {
        UpstreamClient::new(&UpstreamConfig {
            base_url: base_url.to_string(),
            api_key: Secret::new("k"),
            timeout_secs: 30,
        })
        .unwrap()
    }

    #[test]
    fn builds_code_list_url() {
        let url = client("https://kcsc.re.kr/OpenApi").endpoint(&["CodeList"]).unwrap();
        assert_eq!(url.as_str(), "https://kcsc.re.kr/OpenApi/CodeList");
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let code: CodeNumber = "111000".parse().unwrap();
        let url = client("http://127.0.0.1:9000/OpenApi/")
            .endpoint(&["CodeViewer", CodeType::Kwcs.as_str(), code.as_str()])
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/OpenApi/CodeViewer/KWCS/111000");
    }

    #[test]
    fn endpoint_never_contains_the_key() {
        let url = client("https://kcsc.re.kr/OpenApi").endpoint(&["CodeList"]).unwrap();
        assert!(url.query().is_none());
    }

    #[test]
    fn rejects_non_base_urls() {
        let err = UpstreamClient::new(&UpstreamConfig {
            base_url: "data:text/plain,hi".into(),
            ..Default::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, UpstreamError::InvalidBaseUrl(_)));
    }
}
