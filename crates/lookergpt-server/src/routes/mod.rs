//! LookerGPT Routes
//!
//! - / - Form UI page
//! - /api/gpt - Completion proxy
//! - /swagger-ui - OpenAPI documentation

pub mod gpt;
pub mod page;
pub mod swagger;
