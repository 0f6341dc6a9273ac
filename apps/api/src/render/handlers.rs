//! Axum route handlers for template listing and live preview.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::render::html::to_html;
use crate::render::registry::{RenderedDocument, TemplateEntry};
use crate::render::style::{FontPairing, FontPairingInfo, Palette, PALETTES};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewSource {
    /// The merged document, placeholders filled in.
    #[default]
    Display,
    /// Exactly what the user typed.
    Form,
}

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub source: PreviewSource,
}

#[derive(Debug, Serialize)]
pub struct StylesResponse {
    pub palettes: &'static [Palette],
    pub fonts: Vec<FontPairingInfo>,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<Vec<TemplateEntry>> {
    Json(state.templates.entries().to_vec())
}

/// GET /api/v1/styles
pub async fn handle_list_styles() -> Json<StylesResponse> {
    Json(StylesResponse {
        palettes: &PALETTES,
        fonts: FontPairing::ALL.into_iter().map(FontPairingInfo::from).collect(),
    })
}

async fn render_current(
    state: &AppState,
    source: PreviewSource,
) -> Result<RenderedDocument, AppError> {
    let session = state.session.read().await;
    let doc = match source {
        PreviewSource::Display => session.display(),
        PreviewSource::Form => session.form(),
    };
    let style = session.style();
    Ok(state
        .templates
        .render(&style.template, doc, &style.accent, style.font)?)
}

/// GET /api/v1/preview
///
/// HTML fragment of the current session in the selected style.
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Result<Html<String>, AppError> {
    let rendered = render_current(&state, query.source).await?;
    Ok(Html(to_html(&rendered.root)))
}

/// GET /api/v1/preview/tree
pub async fn handle_preview_tree(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<RenderedDocument>, AppError> {
    Ok(Json(render_current(&state, query.source).await?))
}
