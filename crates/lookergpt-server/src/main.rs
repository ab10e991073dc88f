use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lookergpt_server::adapters::OpenAiCompletions;
use lookergpt_server::application::ProxyService;
use lookergpt_server::config::ServerConfig;
use lookergpt_server::{build_router, AppState};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("lookergpt=info,lookergpt_server=info,tower_http=info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("🔎 LookerGPT proxy initializing...");

    let config = ServerConfig::from_env()?;

    if config.api_key.is_some() {
        tracing::info!("🔐 Completion API key loaded");
    } else {
        tracing::warn!("⚠️  No OPENAI_API_KEY set - upstream calls will be unauthenticated");
    }

    let provider = Arc::new(OpenAiCompletions::with_base_url(
        config.api_key.clone(),
        config.base_url.clone(),
    ));
    let proxy = ProxyService::new(provider, config.completion_options());

    tracing::info!("🧠 Model {} via {}", config.model, config.base_url);

    let router = build_router(AppState::new(proxy));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ LookerGPT ready on http://{}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
