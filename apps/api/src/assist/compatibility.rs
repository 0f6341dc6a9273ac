//! Compatibility scoring: how well the display document matches a job description.
//!
//! `AppState` holds an `Arc<dyn CompatibilityScorer>`, chosen at startup via
//! `COMPATIBILITY_SCORER`.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assist::prompts::compatibility_prompt;
use crate::assist::AssistError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::ResumeDocument;

const SCORING_FAILED: &str =
    "Failed to get analysis from AI. Please check the job description and try again.";
pub const EMPTY_JOB_DESCRIPTION: &str = "Please paste a job description first.";

// ────────────────────────────────────────────────────────────────────────────
// Result shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    #[serde(default)]
    pub matched: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
}

/// Passed through as received; the score is not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub score: f64,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default, alias = "keywordMatch")]
    pub keyword_match: KeywordMatch,
}

pub fn check_job_description(job_description: &str) -> Result<(), AssistError> {
    if job_description.trim().is_empty() {
        Err(AssistError::Validation(EMPTY_JOB_DESCRIPTION.to_string()))
    } else {
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait CompatibilityScorer: Send + Sync {
    /// "llm" | "keyword", for logs.
    fn backend(&self) -> &'static str;

    async fn score(
        &self,
        document: &ResumeDocument,
        job_description: &str,
    ) -> Result<CompatibilityResult, AssistError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmCompatibilityScorer
// ────────────────────────────────────────────────────────────────────────────

/// Asks the AI service for a score, suggestions and keyword coverage.
/// Without an API key every call fails with a "not configured" message.
pub struct LlmCompatibilityScorer {
    llm: Option<LlmClient>,
}

impl LlmCompatibilityScorer {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CompatibilityScorer for LlmCompatibilityScorer {
    fn backend(&self) -> &'static str {
        "llm"
    }

    async fn score(
        &self,
        document: &ResumeDocument,
        job_description: &str,
    ) -> Result<CompatibilityResult, AssistError> {
        let llm = self.llm.as_ref().ok_or_else(AssistError::not_configured)?;
        check_job_description(job_description)?;

        let failed = |source: LlmError| AssistError::Failed {
            message: SCORING_FAILED,
            source,
        };
        let document_json =
            serde_json::to_string_pretty(document).map_err(|e| failed(LlmError::Parse(e)))?;
        let prompt = compatibility_prompt(&document_json, job_description);

        llm.call_json::<CompatibilityResult>(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(failed)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordCompatibilityScorer
// ────────────────────────────────────────────────────────────────────────────

/// Offline, deterministic scorer. Works without an API key.
///
/// Algorithm:
/// 1. Keywords: tokens of the job description made of alphanumerics and
///    `+ # .`, at least two characters, not a stop word, first occurrence
///    wins (case-insensitive).
/// 2. A keyword matches when the document contains it as a whole word,
///    tokenised the same way.
/// 3. score = round(matched / keywords × 100), 0 without keywords.
pub struct KeywordCompatibilityScorer;

#[async_trait]
impl CompatibilityScorer for KeywordCompatibilityScorer {
    fn backend(&self) -> &'static str {
        "keyword"
    }

    async fn score(
        &self,
        document: &ResumeDocument,
        job_description: &str,
    ) -> Result<CompatibilityResult, AssistError> {
        check_job_description(job_description)?;
        Ok(keyword_compatibility(document, job_description))
    }
}

const STOP_WORDS: &[&str] = &[
    "a", "about", "across", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "both", "but", "by", "can", "do", "each", "etc", "for", "from", "has", "have", "how", "if",
    "in", "including", "into", "is", "it", "its", "job", "looking", "may", "more", "must", "not",
    "of", "on", "or", "other", "our", "over", "plus", "role", "should", "such", "team", "that",
    "the", "their", "them", "they", "this", "to", "up", "us", "we", "what", "who", "will", "with",
    "within", "work", "you", "your",
];

fn is_keyword_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '+' | '#' | '.')
}

/// Lower-cased words of `text`, split the same way for both sides of a match.
fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !is_keyword_char(c))
        // sentence punctuation, not part of the word
        .map(|raw| raw.trim_end_matches('.').to_lowercase())
        .filter(|token| !token.is_empty())
}

/// Lower-cased keywords in first-occurrence order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for token in tokens(text) {
        if token.chars().count() < 2 || STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        if !keywords.contains(&token) {
            keywords.push(token);
        }
    }
    keywords
}

/// Every word of the document's text fields. Keywords match whole words only.
fn document_words(doc: &ResumeDocument) -> HashSet<String> {
    let p = &doc.personal;
    let mut parts = vec![p.name.as_str(), p.title.as_str(), doc.summary.as_str()];
    for exp in &doc.experience {
        parts.extend([exp.role.as_str(), exp.company.as_str(), exp.description.as_str()]);
    }
    for edu in &doc.education {
        parts.extend([edu.institution.as_str(), edu.degree.as_str()]);
    }
    parts.extend(doc.skills.iter().map(|s| s.name.as_str()));
    for lang in &doc.languages {
        parts.extend([lang.language.as_str(), lang.proficiency.as_str()]);
    }
    for cert in &doc.certificates {
        parts.extend([cert.name.as_str(), cert.issuer.as_str()]);
    }
    parts.iter().flat_map(|part| tokens(part)).collect()
}

pub fn keyword_compatibility(doc: &ResumeDocument, job_description: &str) -> CompatibilityResult {
    let words = document_words(doc);
    let (matched, missing): (Vec<String>, Vec<String>) = extract_keywords(job_description)
        .into_iter()
        .partition(|keyword| words.contains(keyword));

    let total = matched.len() + missing.len();
    let score = if total == 0 {
        0.0
    } else {
        (matched.len() as f64 / total as f64 * 100.0).round()
    };

    let suggestions = if missing.is_empty() {
        vec!["Your CV already mentions every keyword found in the job description.".to_string()]
    } else {
        missing
            .iter()
            .take(3)
            .map(|keyword| {
                format!("Consider mentioning \"{keyword}\" if it reflects your experience.")
            })
            .collect()
    };

    debug!(score, matched = matched.len(), missing = missing.len(), "keyword compatibility");

    CompatibilityResult {
        score,
        suggestions,
        keyword_match: KeywordMatch { matched, missing },
    }
}
