mod capture;
mod config;
mod db;
mod errors;
mod feedback;
mod identity;
mod interviews;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::capture::capability::SpeechCapability;
use crate::capture::sessions::CaptureSessions;
use crate::config::Config;
use crate::db::create_pool;
use crate::feedback::evaluator::GeminiEvaluator;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Greenroom API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Probe speech capability once; every capture session inherits the result
    let speech = SpeechCapability::probe(&config.speech_provider);
    match speech.warning() {
        None => info!("Speech capture enabled (provider: {})", config.speech_provider),
        Some(warning) => warn!(
            "Speech capture disabled (provider: {}): {warning}",
            config.speech_provider
        ),
    }

    // Build app state
    let state = AppState {
        db,
        llm: llm.clone(),
        config: config.clone(),
        evaluator: Arc::new(GeminiEvaluator(llm)),
        captures: CaptureSessions::new(speech),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
