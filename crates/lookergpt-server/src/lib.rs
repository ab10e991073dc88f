//! LookerGPT API Server
//!
//! Completion proxy plus the single-page form that drives it.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod adapters;
pub mod application;
pub mod config;
pub mod models;
pub mod routes;

use adapters::OpenAiCompletions;
use application::ProxyService;

/// Type alias for the proxy service with the concrete provider
pub type AppProxyService = ProxyService<OpenAiCompletions>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<AppProxyService>,
}

impl AppState {
    pub fn new(proxy: AppProxyService) -> Self {
        Self {
            proxy: Arc::new(proxy),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "LookerGPT proxy is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the router with shared state
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::page::router())
        .merge(routes::gpt::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
