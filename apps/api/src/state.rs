use std::sync::Arc;

use tokio::sync::RwLock;

use crate::assist::{CompatibilityScorer, InFlight, TextRewriter};
use crate::config::Config;
use crate::editing::EditorSession;
use crate::export::DocumentExporter;
use crate::render::TemplateRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The one editing session. Writers are serialised in arrival order.
    pub session: Arc<RwLock<EditorSession>>,
    pub templates: Arc<TemplateRegistry>,
    /// Pluggable scorer, selected by COMPATIBILITY_SCORER.
    pub scorer: Arc<dyn CompatibilityScorer>,
    pub rewriter: Arc<dyn TextRewriter>,
    pub exporter: Arc<dyn DocumentExporter>,
    pub in_flight: InFlight,
}
