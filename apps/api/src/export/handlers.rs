//! Axum route handler for PDF export.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::errors::AppError;
use crate::export::suggested_file_name;
use crate::state::AppState;

/// `Content-Disposition` for a download; non-ASCII characters are replaced
/// so the header value stays valid.
fn attachment_header(file_name: &str) -> String {
    let ascii: String = file_name
        .chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' { c } else { '_' })
        .collect();
    format!("attachment; filename=\"{ascii}\"")
}

/// POST /api/v1/export
///
/// Renders the display document in the current style, exports it to PDF and
/// returns the file.
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let flag = &state.in_flight.export;
    let _guard = flag.try_acquire().ok_or(AppError::InFlight(flag.name()))?;

    let (rendered, file_name) = {
        let session = state.session.read().await;
        let style = session.style();
        let rendered = state.templates.render(
            &style.template,
            session.display(),
            &style.accent,
            style.font,
        )?;
        (rendered, suggested_file_name(&session.display().personal.name))
    };

    let file = state.exporter.export(&rendered, &file_name).await?;
    info!(file = %file.file_name, template = rendered.template, "export finished");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, attachment_header(&file.file_name)),
        ],
        file.bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_header_is_ascii() {
        assert_eq!(
            attachment_header("Ada_Lovelace.pdf"),
            "attachment; filename=\"Ada_Lovelace.pdf\""
        );
        assert_eq!(
            attachment_header("José.pdf"),
            "attachment; filename=\"Jos_.pdf\""
        );
    }
}
