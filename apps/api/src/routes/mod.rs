pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::assist::handlers as assist;
use crate::editing::handlers as editing;
use crate::export::handlers as export;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Editing session
        .route("/api/v1/session", get(editing::handle_get_session))
        .route("/api/v1/session/fields", patch(editing::handle_set_field))
        .route("/api/v1/session/lists/:list", post(editing::handle_append_item))
        .route(
            "/api/v1/session/lists/:list/:index",
            put(editing::handle_set_item).delete(editing::handle_remove_item),
        )
        .route(
            "/api/v1/session/skills/bulk",
            post(editing::handle_bulk_add_skills),
        )
        .route("/api/v1/session/reset", post(editing::handle_reset))
        .route("/api/v1/session/style", put(editing::handle_update_style))
        // Templates and preview
        .route("/api/v1/templates", get(render::handle_list_templates))
        .route("/api/v1/styles", get(render::handle_list_styles))
        .route("/api/v1/preview", get(render::handle_preview))
        .route("/api/v1/preview/tree", get(render::handle_preview_tree))
        // AI assist
        .route(
            "/api/v1/ai/compatibility",
            post(assist::handle_compatibility),
        )
        .route("/api/v1/ai/rewrite", post(assist::handle_rewrite))
        // Export
        .route("/api/v1/export", post(export::handle_export))
        .with_state(state)
}
