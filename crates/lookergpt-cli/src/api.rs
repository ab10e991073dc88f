//! LookerGPT API Client

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

/// API Client for the LookerGPT proxy
pub struct LookerGptClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct GptResponse {
    pub reply: String,
}

impl LookerGptClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Ask the proxy for a reporting URL
    ///
    /// Any status is accepted; the proxy always answers with a `reply`.
    /// When the body cannot be read, the status reason phrase stands in.
    pub async fn ask(&self, query: &str) -> Result<String> {
        let url = format!("{}/api/gpt?query={}", self.base_url, urlencoding::encode(query));

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to LookerGPT server")?;

        let status = resp.status();
        match resp.json::<GptResponse>().await {
            Ok(body) => Ok(body.reply),
            Err(_) => Ok(status
                .canonical_reason()
                .unwrap_or(status.as_str())
                .to_string()),
        }
    }
}
