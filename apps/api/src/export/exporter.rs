//! Document exporters. `AppState` holds an `Arc<dyn DocumentExporter>`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::export::ExportError;
use crate::render::html::standalone_page;
use crate::render::registry::RenderedDocument;

#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub file_name: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait DocumentExporter: Send + Sync {
    async fn export(
        &self,
        document: &RenderedDocument,
        file_name: &str,
    ) -> Result<ExportedFile, ExportError>;
}

/// Prints the document to PDF with an external HTML renderer (headless
/// Chromium, wkhtmltopdf, ...), then copies the result into `export_dir`.
///
/// The command line is split on whitespace; `{input}` and `{output}` inside
/// any argument are replaced by the HTML and PDF paths.
pub struct CommandPdfExporter {
    command: Option<String>,
    export_dir: PathBuf,
}

impl CommandPdfExporter {
    pub fn new(command: Option<String>, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            command,
            export_dir: export_dir.into(),
        }
    }
}

/// Argument vector for one run. `None` when the template has no program.
fn command_line(template: &str, input: &Path, output: &Path) -> Option<Vec<String>> {
    let input = input.to_string_lossy();
    let output = output.to_string_lossy();
    let argv: Vec<String> = template
        .split_whitespace()
        .map(|arg| arg.replace("{input}", &input).replace("{output}", &output))
        .collect();
    if argv.is_empty() {
        None
    } else {
        Some(argv)
    }
}

#[async_trait]
impl DocumentExporter for CommandPdfExporter {
    async fn export(
        &self,
        document: &RenderedDocument,
        file_name: &str,
    ) -> Result<ExportedFile, ExportError> {
        let template = self.command.as_deref().ok_or(ExportError::NotConfigured)?;

        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("cv.html");
        let output = workdir.path().join("cv.pdf");
        tokio::fs::write(&input, standalone_page(document, file_name)).await?;

        let argv = command_line(template, &input, &output).ok_or(ExportError::NotConfigured)?;
        debug!(program = %argv[0], "running PDF renderer");
        let run = Command::new(&argv[0]).args(&argv[1..]).output().await?;
        if !run.status.success() {
            return Err(ExportError::RendererFailed {
                status: run.status.to_string(),
                stderr: String::from_utf8_lossy(&run.stderr).trim().to_string(),
            });
        }

        let bytes = match tokio::fs::read(&output).await {
            Ok(bytes) if !bytes.is_empty() => bytes,
            _ => return Err(ExportError::MissingOutput),
        };

        tokio::fs::create_dir_all(&self.export_dir).await?;
        let path = self.export_dir.join(file_name);
        tokio::fs::write(&path, &bytes).await?;
        info!(path = %path.display(), size = bytes.len(), "exported PDF");

        Ok(ExportedFile {
            file_name: file_name.to_string(),
            path,
            bytes,
        })
    }
}
