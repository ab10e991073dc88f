//! Application Layer (Use Cases)
//!
//! Orchestrates prompt construction and the upstream completion call.

mod proxy_service;

pub use proxy_service::ProxyService;
