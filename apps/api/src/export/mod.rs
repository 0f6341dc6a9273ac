//! Export: turns the rendered display document into a persisted PDF.

pub mod exporter;
pub mod filename;
pub mod handlers;

use thiserror::Error;

pub use exporter::{CommandPdfExporter, DocumentExporter};
pub use filename::suggested_file_name;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF export is not configured. Set PDF_RENDER_COMMAND to enable it.")]
    NotConfigured,

    #[error("An error occurred while generating the PDF: {0}")]
    Io(#[from] std::io::Error),

    #[error("An error occurred while generating the PDF: the renderer exited with {status}")]
    RendererFailed { status: String, stderr: String },

    #[error("An error occurred while generating the PDF: the renderer produced no file")]
    MissingOutput,
}
