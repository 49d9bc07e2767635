//! Trustable score HTTP client.
//!
//! Async reqwest client. The base URL is bound at construction so tests can
//! point it at a mock server.

use serde::Deserialize;
use trustable_core::{Brand, MAX_SCORE};

/// Score API client.
#[derive(Clone)]
pub struct ScoreClient {
    http: reqwest::Client,
    api_base: String,
}

/// Error type for score lookups.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// No credential supplied
    #[error("No API key supplied")]
    MissingCredential,
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),
    /// Network error
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP error with status code
    #[error("HTTP {0}: {1}")]
    Http(u16, String),
    /// Body was not JSON or lacked a numeric score
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Success body of `GET /score/<brand>`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreResponse {
    #[serde(rename = "trustableScore")]
    pub trustable_score: f64,
}

impl ScoreClient {
    /// Create a client for the API rooted at `api_base`.
    pub fn new(api_base: impl Into<String>) -> Result<Self, ScoreError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("trustable-widget/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ScoreError::Client(e.to_string()))?;

        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Lookup URL for a brand. The brand is percent-encoded as one path segment.
    pub fn score_url(&self, brand: &Brand) -> String {
        format!("{}/score/{}", self.api_base, urlencoding::encode(brand.as_str()))
    }

    /// Fetch the remote score for `brand`. Exactly one request, no retry.
    pub async fn fetch_score(&self, brand: &Brand, credential: &str) -> Result<u8, ScoreError> {
        if credential.is_empty() {
            return Err(ScoreError::MissingCredential);
        }

        let url = self.score_url(brand);
        let response = self.http.get(&url)
            .bearer_auth(credential)
            .send()
            .await
            .map_err(|e| ScoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoreError::Http(status.as_u16(), body));
        }

        let body: ScoreResponse = response.json()
            .await
            .map_err(|e| ScoreError::Parse(e.to_string()))?;

        Ok(normalize_score(body.trustable_score))
    }
}

/// Round a remote score to the nearest integer and clamp it to `0..=100`.
pub fn normalize_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, MAX_SCORE as f64) as u8
}
