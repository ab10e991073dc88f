//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn external<E: std::fmt::Display>(context: &str, err: E) -> Self {
        Self::ExternalService(format!("{context}: {err}"))
    }
}
