//! Value Objects
//!
//! Immutable value types.

mod outcome;
mod report_url;

pub use outcome::CompletionOutcome;
pub use report_url::{extract_report_url, URL_PATTERN};
