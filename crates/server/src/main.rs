//! Sahayak server entry point

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use sahayak_chat::Chatbot;
use sahayak_llm::{GroqBackend, GroqConfig, LlmBackend};
use sahayak_retrieval::load_knowledge_base;
use sahayak_server::{create_router, load_settings, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Priority: env vars > config/{env} > config/default > defaults
    let env = std::env::var("SAHAYAK_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load config, using defaults");
            Settings::default()
        }
    };

    tracing::info!("Starting Sahayak server v{}", env!("CARGO_PKG_VERSION"));

    let kb = Arc::new(load_knowledge_base(&settings.knowledge.dataset_path)?);

    let api_key = settings.llm.resolve_api_key()?;
    let backend: Arc<dyn LlmBackend> = Arc::new(GroqBackend::new(
        GroqConfig::new(api_key)
            .with_model(settings.llm.model.clone())
            .with_endpoint(settings.llm.endpoint.clone())
            .with_timeout(Duration::from_secs(settings.llm.timeout_secs)),
    )?);
    tracing::info!(model = %settings.llm.model, "LLM backend ready");

    // Built once, shared across all requests
    let chatbot = Arc::new(Chatbot::new(kb, backend));
    let router = create_router(AppState::new(chatbot));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
