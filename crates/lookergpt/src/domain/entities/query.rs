//! Query - the user's question, alive for one request

use serde::{Deserialize, Serialize};

/// Free-text question as typed into the form.
///
/// No validation is applied; empty text is forwarded like any other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(String);

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
