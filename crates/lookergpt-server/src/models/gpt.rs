//! Gpt - Completion proxy DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use lookergpt::{Query, Reply};

/// Query string of `GET /api/gpt`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GptParams {
    /// Natural-language question; missing is treated as empty
    #[serde(default)]
    pub query: String,
}

impl GptParams {
    /// Pick the first `query` value from decoded query-string pairs.
    ///
    /// Repeated keys are accepted; later values and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let query = pairs
            .into_iter()
            .find(|(key, _)| key == "query")
            .map(|(_, value)| value)
            .unwrap_or_default();

        Self { query }
    }
}

impl From<GptParams> for Query {
    fn from(params: GptParams) -> Self {
        Query::new(params.query)
    }
}

/// Proxy response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GptReply {
    /// Model output, the upstream status text, or an error description
    pub reply: String,
}

impl From<Reply> for GptReply {
    fn from(reply: Reply) -> Self {
        Self {
            reply: reply.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_query_value_wins() {
        let params = GptParams::from_pairs(pairs(&[("query", "a"), ("query", "b")]));
        assert_eq!(params.query, "a");
    }

    #[test]
    fn test_missing_query_is_empty() {
        let params = GptParams::from_pairs(pairs(&[("q", "a")]));
        assert_eq!(params.query, "");
    }
}
