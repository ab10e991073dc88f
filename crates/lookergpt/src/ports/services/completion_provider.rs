//! Completion Provider Port
//!
//! Abstract interface for a hosted text-completion API. The proxy only needs
//! one call: prompt in, first choice (or the upstream's failure status) out.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::CompletionOutcome;

/// Fine-tuned model that answers with explore URLs.
pub const DEFAULT_MODEL: &str = "davinci:ft-personal-2023-04-22-18-37-13";

/// Sampling options for a completion call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Model identifier
    pub model: String,
    /// Temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Presence penalty (-2.0 - 2.0)
    pub presence_penalty: f32,
}

impl CompletionOptions {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.1,
            max_tokens: 200,
            presence_penalty: 0.5,
        }
    }
}

/// Completion provider interface
///
/// Implementations return `Ok(CompletionOutcome::UpstreamFailure)` when the
/// provider answered with a non-success status. `Err` means no usable answer
/// came back at all (connection failure, undecodable body).
///
/// # Example
///
/// ```rust,ignore
/// use lookergpt::ports::CompletionProvider;
///
/// struct OpenAiCompletions { /* ... */ }
///
/// #[async_trait]
/// impl CompletionProvider for OpenAiCompletions {
///     async fn complete(&self, prompt: &str, options: &CompletionOptions)
///         -> Result<CompletionOutcome, DomainError> {
///         // POST /v1/completions
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for a single prompt
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<CompletionOutcome, DomainError>;

    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl CompletionProvider for Echo {
        async fn complete(
            &self,
            prompt: &str,
            options: &CompletionOptions,
        ) -> Result<CompletionOutcome, DomainError> {
            Ok(CompletionOutcome::Completed {
                text: Some(format!("{}:{}", options.model, prompt)),
            })
        }

        fn provider_name(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn test_default_options() {
        let options = CompletionOptions::default();
        assert_eq!(options.model, DEFAULT_MODEL);
        assert_eq!(options.temperature, 0.1);
        assert_eq!(options.max_tokens, 200);
        assert_eq!(options.presence_penalty, 0.5);
    }

    #[tokio::test]
    async fn test_provider_as_trait_object() {
        let provider: Box<dyn CompletionProvider> = Box::new(Echo);
        let options = CompletionOptions::default().with_model("m");
        let outcome = provider.complete("q", &options).await.unwrap();
        assert_eq!(
            outcome,
            CompletionOutcome::Completed {
                text: Some("m:q".to_string())
            }
        );
        assert_eq!(provider.provider_name(), "echo");
    }
}
