mod config;
mod errors;
mod generation;
mod knowledge;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::strategy::strategy_for;
use crate::knowledge::store::KnowledgeStore;
use crate::llm_client::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails startup if OPENAI_API_KEY is absent)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("quiebre_api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Quiebre API v{}", env!("CARGO_PKG_VERSION"));

    // Knowledge store partitions must exist before serving traffic
    let store = KnowledgeStore::new(&config.data_dir);
    store.ensure_layout().await?;
    info!("Knowledge store ready under {}/", config.data_dir);

    // One long-lived generation client for the whole process
    let llm = Arc::new(OpenAiClient::new(config.openai_api_key.clone()));
    info!("Generation client initialized (model: {})", llm_client::MODEL);

    // The prompt strategy is fixed per deployment
    let strategy = strategy_for(config.prompt_mode);
    info!("Prompt strategy: {:?}", config.prompt_mode);

    let state = AppState {
        llm,
        strategy,
        store,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
