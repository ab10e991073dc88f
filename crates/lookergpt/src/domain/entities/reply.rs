//! Reply - text returned to the browser for display

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{extract_report_url, CompletionOutcome};

/// Model output, or the upstream's status text when the call failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reply(String);

impl Reply {
    /// Shown when the model answered without any completion text.
    pub const PLACEHOLDER: &'static str = "nothing found";

    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Map an upstream outcome onto the text the user sees.
    ///
    /// Completion text passes through untouched, including empty strings.
    pub fn from_outcome(outcome: CompletionOutcome) -> Self {
        match outcome {
            CompletionOutcome::Completed { text: Some(text) } => Self(text),
            CompletionOutcome::Completed { text: None } => Self(Self::PLACEHOLDER.to_string()),
            CompletionOutcome::UpstreamFailure { status_text, .. } => Self(status_text),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// First URL-looking substring of the reply, if any.
    pub fn report_url(&self) -> Option<&str> {
        extract_report_url(&self.0)
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_text_passes_through_verbatim() {
        let text = "  https://headout.looker.com/explore/analytics_reporting/bookings?fields=bookings.booking_id\n";
        let reply = Reply::from_outcome(CompletionOutcome::Completed {
            text: Some(text.to_string()),
        });
        assert_eq!(reply.as_str(), text);
    }

    #[test]
    fn test_empty_text_is_not_replaced() {
        let reply = Reply::from_outcome(CompletionOutcome::Completed {
            text: Some(String::new()),
        });
        assert_eq!(reply.as_str(), "");
    }

    #[test]
    fn test_missing_text_uses_placeholder() {
        let reply = Reply::from_outcome(CompletionOutcome::Completed { text: None });
        assert_eq!(reply.as_str(), "nothing found");
    }

    #[test]
    fn test_upstream_failure_uses_status_text() {
        let reply = Reply::from_outcome(CompletionOutcome::UpstreamFailure {
            status: 429,
            status_text: "Too Many Requests".to_string(),
        });
        assert_eq!(reply.as_str(), "Too Many Requests");
        assert!(reply.report_url().is_none());
    }

    #[test]
    fn test_report_url_from_reply() {
        let reply = Reply::new("Go to https://example.com/path?x=1 now");
        assert_eq!(reply.report_url(), Some("https://example.com/path?x=1"));
    }
}
