//! Axum route handlers for the editing session.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::editing::paths::{FieldPath, ListItem, ListKind};
use crate::editing::session::{SessionSnapshot, StyleUpdate};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SetFieldRequest {
    pub path: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct AppendItemRequest {
    #[serde(default)]
    pub item: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SetItemRequest {
    pub item: Value,
}

#[derive(Debug, Deserialize)]
pub struct BulkSkillsRequest {
    pub text: String,
}

fn decode_item(kind: ListKind, value: Value) -> Result<ListItem, AppError> {
    ListItem::from_json(kind, value)
        .map_err(|e| AppError::Validation(format!("invalid {kind} item: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.read().await.snapshot())
}

/// PATCH /api/v1/session/fields
pub async fn handle_set_field(
    State(state): State<AppState>,
    Json(request): Json<SetFieldRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let path: FieldPath = request.path.parse()?;

    let mut session = state.session.write().await;
    session.set_field(path, request.value);
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/session/lists/:list
///
/// Without an `item`, appends the list type's blank entry.
pub async fn handle_append_item(
    State(state): State<AppState>,
    Path(list): Path<String>,
    Json(request): Json<AppendItemRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let kind: ListKind = list.parse()?;
    let item = match request.item {
        Some(value) => decode_item(kind, value)?,
        None => ListItem::blank(kind),
    };

    let mut session = state.session.write().await;
    session.append_item(item);
    Ok(Json(session.snapshot()))
}

/// PUT /api/v1/session/lists/:list/:index
pub async fn handle_set_item(
    State(state): State<AppState>,
    Path((list, index)): Path<(String, usize)>,
    Json(request): Json<SetItemRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let kind: ListKind = list.parse()?;
    let item = decode_item(kind, request.item)?;

    let mut session = state.session.write().await;
    session.set_item(index, item)?;
    Ok(Json(session.snapshot()))
}

/// DELETE /api/v1/session/lists/:list/:index
pub async fn handle_remove_item(
    State(state): State<AppState>,
    Path((list, index)): Path<(String, usize)>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let kind: ListKind = list.parse()?;

    let mut session = state.session.write().await;
    session.remove_item(kind, index)?;
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/session/skills/bulk
///
/// Splits on newlines and commas; every token becomes an Intermediate skill.
pub async fn handle_bulk_add_skills(
    State(state): State<AppState>,
    Json(request): Json<BulkSkillsRequest>,
) -> Json<SessionSnapshot> {
    let mut session = state.session.write().await;
    let added = session.add_skills_from_text(&request.text);
    tracing::debug!(added, "bulk skill entry");
    Json(session.snapshot())
}

/// POST /api/v1/session/reset
pub async fn handle_reset(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session.write().await;
    session.reset();
    tracing::info!(revision = session.revision(), "session reset to empty form");
    Json(session.snapshot())
}

/// PUT /api/v1/session/style
pub async fn handle_update_style(
    State(state): State<AppState>,
    Json(update): Json<StyleUpdate>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = state.session.write().await;
    session.update_style(update, &state.templates)?;
    Ok(Json(session.snapshot()))
}
