//! LookerGPT Domain Library
//!
//! Core types and interfaces for turning a natural-language question into a
//! Looker explore URL through a hosted completion model.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure types and logic
//!   - `entities/`: Request-scoped values (Query, Reply)
//!   - `value_objects/`: Immutable value types (CompletionOutcome, report URLs)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External service interfaces (completion provider)
//!
//! - **Prompts** (`prompts/`): Static prompt data, kept out of request handling
//!
//! # Usage
//!
//! ```rust,ignore
//! use lookergpt::{extract_report_url, CompletionOutcome, Reply};
//!
//! let reply = Reply::from_outcome(CompletionOutcome::Completed { text: None });
//! assert_eq!(reply.as_str(), Reply::PLACEHOLDER);
//! assert!(extract_report_url(reply.as_str()).is_none());
//! ```

pub mod domain;
pub mod ports;
pub mod prompts;

// Re-export commonly used types
pub use domain::{
    extract_report_url, CompletionOutcome, DomainError, Query, Reply, URL_PATTERN,
};
pub use ports::{CompletionOptions, CompletionProvider};
pub use prompts::PromptCatalog;
