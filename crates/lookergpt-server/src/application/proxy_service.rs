//! Proxy Application Service (Use Case)
//!
//! Query in, Reply out: render the prompt, call the provider once, map the
//! outcome. No retries and no input validation.

use std::sync::Arc;

use lookergpt::{
    CompletionOptions, CompletionOutcome, CompletionProvider, DomainError, PromptCatalog, Query,
    Reply,
};

/// Application service for the completion proxy
pub struct ProxyService<P: CompletionProvider> {
    provider: Arc<P>,
    catalog: PromptCatalog,
    options: CompletionOptions,
}

impl<P: CompletionProvider> ProxyService<P> {
    pub fn new(provider: Arc<P>, options: CompletionOptions) -> Self {
        Self {
            provider,
            catalog: PromptCatalog::builtin(),
            options,
        }
    }

    /// Forward a query upstream and turn the answer into a reply
    pub async fn ask(&self, query: &Query) -> Result<Reply, DomainError> {
        let prompt = self.catalog.render(query);
        let outcome = self.provider.complete(&prompt, &self.options).await?;

        if let CompletionOutcome::UpstreamFailure {
            status,
            status_text,
        } = &outcome
        {
            tracing::warn!(
                "Upstream {} failed: {} {}",
                self.provider.provider_name(),
                status,
                status_text
            );
        }

        let reply = Reply::from_outcome(outcome);

        tracing::info!(
            query_len = query.as_str().len(),
            url = reply.report_url().unwrap_or("-"),
            "Reply generated"
        );

        Ok(reply)
    }
}
