//! OpenAI Completions Implementation
//!
//! Calls the legacy `/v1/completions` endpoint using reqwest.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use lookergpt::{CompletionOptions, CompletionOutcome, CompletionProvider, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// HTTP implementation of CompletionProvider
///
/// Built once at startup and shared by every request.
#[derive(Clone)]
pub struct OpenAiCompletions {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
    presence_penalty: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: Option<String>,
}

impl OpenAiCompletions {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Reason phrase for a status, falling back to the numeric code.
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

#[async_trait]
impl CompletionProvider for OpenAiCompletions {
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<CompletionOutcome, DomainError> {
        let request = CompletionRequest {
            model: &options.model,
            prompt,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            presence_penalty: options.presence_penalty,
        };

        let mut builder = self
            .client
            .post(format!("{}/completions", self.base_url))
            .json(&request);

        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| DomainError::external("Completion request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Completion API error status");
            return Ok(CompletionOutcome::UpstreamFailure {
                status: status.as_u16(),
                status_text: status_text(status),
            });
        }

        let raw = response
            .text()
            .await
            .map_err(|e| DomainError::external("Failed to read completion response", e))?;

        tracing::debug!(payload = %raw, "Completion API response");

        let payload: CompletionResponse = serde_json::from_str(&raw)
            .map_err(|e| DomainError::external("Failed to parse completion response", e))?;

        let text = payload.choices.into_iter().next().and_then(|c| c.text);

        Ok(CompletionOutcome::Completed { text })
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
