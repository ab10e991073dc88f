//! Server configuration
//!
//! Read once from the process environment at startup (after `.env` is loaded).

use std::net::SocketAddr;

use thiserror::Error;

use lookergpt::{ports::DEFAULT_MODEL, CompletionOptions};

use crate::adapters::openai::DEFAULT_BASE_URL;

const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Configuration for the proxy server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Completion API key
    pub api_key: Option<String>,
    /// Completion API base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Listen address
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("OPENAI_API_KEY").or_else(|| get("NEXT_PUBLIC_OPEN_AI_KEY"));

        let bind = get("LOOKERGPT_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            name: "LOOKERGPT_BIND",
            reason: format!("{bind}: {e}"),
        })?;

        Ok(Self {
            api_key,
            base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: get("LOOKERGPT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            bind_addr,
        })
    }

    /// Sampling options for every upstream call
    pub fn completion_options(&self) -> CompletionOptions {
        CompletionOptions::default().with_model(self.model.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://127.0.0.1:9999/v1"),
            ("LOOKERGPT_MODEL", "gpt-3.5-turbo-instruct"),
            ("LOOKERGPT_BIND", "127.0.0.1:8080"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.base_url, "http://127.0.0.1:9999/v1");
        assert_eq!(config.bind_addr.port(), 8080);

        let options = config.completion_options();
        assert_eq!(options.model, "gpt-3.5-turbo-instruct");
        assert_eq!(options.max_tokens, 200);
    }

    #[test]
    fn test_legacy_key_name_and_empty_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", ""),
            ("NEXT_PUBLIC_OPEN_AI_KEY", "sk-legacy"),
            ("LOOKERGPT_MODEL", "  "),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("sk-legacy"));
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_invalid_bind_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("LOOKERGPT_BIND", "not-an-addr")]))
            .unwrap_err();
        assert!(err.to_string().contains("LOOKERGPT_BIND"));
    }
}
