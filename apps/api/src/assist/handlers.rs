//! Axum route handlers for the AI assist features.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assist::compatibility::{check_job_description, CompatibilityResult};
use crate::assist::text::{RewriteAction, RewriteTarget, NOTHING_TO_PROCESS};
use crate::editing::merge::is_blank;
use crate::editing::session::SessionSnapshot;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CompatibilityRequest {
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    pub action: RewriteAction,
    pub target: RewriteTarget,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    /// False when the target disappeared while the request was running.
    pub applied: bool,
    pub text: String,
    pub session: SessionSnapshot,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/compatibility
///
/// Scores the display document (placeholders filled in) against a job description.
pub async fn handle_compatibility(
    State(state): State<AppState>,
    Json(request): Json<CompatibilityRequest>,
) -> Result<Json<CompatibilityResult>, AppError> {
    check_job_description(&request.job_description)?;

    let flag = &state.in_flight.scoring;
    let _guard = flag.try_acquire().ok_or(AppError::InFlight(flag.name()))?;

    let display = state.session.read().await.display().clone();
    let result = state
        .scorer
        .score(&display, &request.job_description)
        .await?;

    info!(
        backend = state.scorer.backend(),
        score = result.score,
        "compatibility scored"
    );
    state
        .session
        .write()
        .await
        .record_compatibility(result.clone());

    Ok(Json(result))
}

/// POST /api/v1/ai/rewrite
///
/// Rewrites a form field and writes the result into the latest form document.
pub async fn handle_rewrite(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    let flag = &state.in_flight.text;
    let _guard = flag.try_acquire().ok_or(AppError::InFlight(flag.name()))?;

    let source = state
        .session
        .read()
        .await
        .source_text(request.target)?
        .to_string();
    if is_blank(&source) {
        return Err(AppError::Validation(NOTHING_TO_PROCESS.to_string()));
    }

    let text = state
        .rewriter
        .rewrite(&source, request.action, request.target)
        .await?;

    let mut session = state.session.write().await;
    let applied = session.apply_rewrite(request.target, text.clone());
    Ok(Json(RewriteResponse {
        applied,
        text,
        session: session.snapshot(),
    }))
}
