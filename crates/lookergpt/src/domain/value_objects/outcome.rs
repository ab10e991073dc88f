//! CompletionOutcome - what the completion API handed back

use serde::{Deserialize, Serialize};

/// Result of one upstream completion call that produced an HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompletionOutcome {
    /// Success status. `text` is the first choice's text, if there was one.
    Completed { text: Option<String> },
    /// Non-success status, with its reason phrase.
    UpstreamFailure { status: u16, status_text: String },
}
