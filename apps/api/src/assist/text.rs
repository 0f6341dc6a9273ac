//! Text processing: expand, shorten or rephrase a summary or an experience
//! description.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::assist::prompts::rewrite_prompt;
use crate::assist::AssistError;
use crate::editing::merge::is_blank;
use crate::llm_client::prompts::RAW_TEXT_SYSTEM;
use crate::llm_client::LlmClient;

const REWRITE_FAILED: &str = "Failed to get suggestion from AI. Please try again.";
pub const NOTHING_TO_PROCESS: &str = "There is no text to process yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteAction {
    Expand,
    Shorten,
    Rephrase,
}

/// Which form field the result is written back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RewriteTarget {
    Summary,
    ExperienceDescription { index: usize },
}

impl RewriteTarget {
    /// How the field is described to the model.
    pub fn context_label(&self) -> &'static str {
        match self {
            RewriteTarget::Summary => "CV summary",
            RewriteTarget::ExperienceDescription { .. } => "CV work experience description",
        }
    }
}

#[async_trait]
pub trait TextRewriter: Send + Sync {
    async fn rewrite(
        &self,
        text: &str,
        action: RewriteAction,
        target: RewriteTarget,
    ) -> Result<String, AssistError>;
}

pub struct LlmTextRewriter {
    llm: Option<LlmClient>,
}

impl LlmTextRewriter {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TextRewriter for LlmTextRewriter {
    async fn rewrite(
        &self,
        text: &str,
        action: RewriteAction,
        target: RewriteTarget,
    ) -> Result<String, AssistError> {
        let llm = self.llm.as_ref().ok_or_else(AssistError::not_configured)?;
        if is_blank(text) {
            return Err(AssistError::Validation(NOTHING_TO_PROCESS.to_string()));
        }

        let prompt = rewrite_prompt(action, target, text);
        llm.call_text(&prompt, RAW_TEXT_SYSTEM)
            .await
            .map_err(|source| AssistError::Failed {
                message: REWRITE_FAILED,
                source,
            })
    }
}
