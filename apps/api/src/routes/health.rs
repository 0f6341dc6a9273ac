use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and which collaborators are configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "cvstudio",
        "collaborators": {
            "ai": state.config.anthropic_api_key.is_some(),
            "ai_model": state.config.anthropic_model,
            "compatibility_scorer": state.scorer.backend(),
            "export": state.config.pdf_render_command.is_some(),
        }
    }))
}
