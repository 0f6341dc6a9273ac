//! AI assist: compatibility scoring against a job description and rewriting
//! of free-text fields. Both are optional collaborators; the editor works
//! without them.

pub mod compatibility;
pub mod handlers;
pub mod inflight;
pub mod prompts;
pub mod text;

use thiserror::Error;

use crate::llm_client::LlmError;

pub use compatibility::CompatibilityScorer;
pub use inflight::InFlight;
pub use text::TextRewriter;

pub const NOT_CONFIGURED: &str =
    "AI service not configured. Please set ANTHROPIC_API_KEY in the environment.";

/// Errors surfaced by the AI collaborators. `Display` is the message shown
/// to the user.
#[derive(Debug, Error)]
pub enum AssistError {
    #[error("{0}")]
    NotConfigured(String),

    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Failed {
        message: &'static str,
        #[source]
        source: LlmError,
    },
}

impl AssistError {
    pub fn not_configured() -> Self {
        AssistError::NotConfigured(NOT_CONFIGURED.to_string())
    }
}
