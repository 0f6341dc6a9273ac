mod assist;
mod config;
mod editing;
mod errors;
mod export;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;

use anyhow::{bail, Result};
use std::net::SocketAddr;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::assist::compatibility::{
    CompatibilityScorer, KeywordCompatibilityScorer, LlmCompatibilityScorer,
};
use crate::assist::text::LlmTextRewriter;
use crate::assist::InFlight;
use crate::config::{Config, ScorerBackend};
use crate::editing::{EditorSession, StyleSelection};
use crate::export::CommandPdfExporter;
use crate::llm_client::LlmClient;
use crate::models::placeholder_document;
use crate::render::TemplateRegistry;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cvstudio v{}", env!("CARGO_PKG_VERSION"));

    // Template registry
    let templates = TemplateRegistry::builtin();
    if !templates.contains(&config.default_template) {
        bail!(
            "DEFAULT_TEMPLATE '{}' is not a registered template",
            config.default_template
        );
    }
    info!(
        "{} templates registered (default: {})",
        templates.entries().len(),
        config.default_template
    );

    // Initialize LLM client (optional)
    let llm = config
        .anthropic_api_key
        .clone()
        .map(|key| LlmClient::new(key, config.anthropic_model.clone()));
    match &llm {
        Some(client) => info!("LLM client initialized (model: {})", client.model()),
        None => warn!("ANTHROPIC_API_KEY not set; AI features will report 'not configured'"),
    }

    // Compatibility scorer, swapped via COMPATIBILITY_SCORER
    let scorer: Arc<dyn CompatibilityScorer> = match config.compatibility_scorer {
        ScorerBackend::Llm => Arc::new(LlmCompatibilityScorer::new(llm.clone())),
        ScorerBackend::Keyword => Arc::new(KeywordCompatibilityScorer),
    };
    info!("Compatibility scorer: {}", scorer.backend());

    // PDF export
    if config.pdf_render_command.is_none() {
        warn!("PDF_RENDER_COMMAND not set; export will report 'not configured'");
    }
    let exporter = CommandPdfExporter::new(
        config.pdf_render_command.clone(),
        config.export_dir.clone(),
    );

    // The editing session starts on the Empty form document
    let session = EditorSession::new(
        placeholder_document(),
        StyleSelection::with_template(config.default_template.clone()),
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        session: Arc::new(RwLock::new(session)),
        templates: Arc::new(templates),
        scorer,
        rewriter: Arc::new(LlmTextRewriter::new(llm)),
        exporter: Arc::new(exporter),
        in_flight: InFlight::default(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
