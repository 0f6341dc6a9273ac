use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assist::AssistError;
use crate::editing::EditError;
use crate::export::ExportError;
use crate::render::style::StyleError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("A {0} request is already in progress")]
    InFlight(&'static str),

    #[error(transparent)]
    Assist(#[from] AssistError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Edit(e @ EditError::IndexOutOfBounds { .. }) => {
                tracing::warn!("Rejected edit: {e}");
                (StatusCode::BAD_REQUEST, "INDEX_OUT_OF_BOUNDS", e.to_string())
            }
            AppError::Edit(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
            AppError::Style(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
            AppError::InFlight(_) => (StatusCode::CONFLICT, "REQUEST_IN_FLIGHT", self.to_string()),
            AppError::Assist(AssistError::NotConfigured(msg)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "NOT_CONFIGURED", msg.clone())
            }
            AppError::Assist(AssistError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Assist(e) => {
                tracing::error!("AI collaborator error: {e:?}");
                (StatusCode::BAD_GATEWAY, "COLLABORATOR_ERROR", e.to_string())
            }
            AppError::Export(e @ ExportError::NotConfigured) => {
                (StatusCode::SERVICE_UNAVAILABLE, "NOT_CONFIGURED", e.to_string())
            }
            AppError::Export(e) => {
                tracing::error!("Export error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_FAILED", e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::paths::ListKind;
    use crate::llm_client::LlmError;

    #[test]
    fn test_index_out_of_bounds_maps_to_400() {
        let err = AppError::from(EditError::IndexOutOfBounds {
            list: ListKind::Skills,
            index: 3,
            len: 1,
        });
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "INDEX_OUT_OF_BOUNDS");
        assert!(message.contains("skills"));
    }

    #[test]
    fn test_in_flight_maps_to_409() {
        let (status, code, _) = AppError::InFlight("text processing").parts();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, "REQUEST_IN_FLIGHT");
    }

    #[test]
    fn test_collaborator_message_is_passed_through_verbatim() {
        let err = AppError::from(AssistError::Failed {
            message: "Failed to get suggestion from AI. Please try again.",
            source: LlmError::EmptyContent,
        });
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "COLLABORATOR_ERROR");
        assert_eq!(message, "Failed to get suggestion from AI. Please try again.");
    }

    #[test]
    fn test_missing_configuration_maps_to_503() {
        let (status, code, _) = AppError::from(ExportError::NotConfigured).parts();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(code, "NOT_CONFIGURED");
    }

    #[test]
    fn test_internal_error_hides_details() {
        let (status, _, message) = AppError::from(anyhow::anyhow!("secret")).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!message.contains("secret"));
    }
}
