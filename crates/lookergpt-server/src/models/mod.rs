//! LookerGPT Data Models
//!
//! - Gpt: completion proxy request/response DTOs

mod gpt;

pub use gpt::*;
