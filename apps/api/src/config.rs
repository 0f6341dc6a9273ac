use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::llm_client;

/// Which compatibility scorer backs `/api/v1/ai/compatibility`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerBackend {
    Llm,
    Keyword,
}

impl FromStr for ScorerBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "llm" => Ok(ScorerBackend::Llm),
            "keyword" => Ok(ScorerBackend::Keyword),
            other => bail!("COMPATIBILITY_SCORER must be 'llm' or 'keyword', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// Collaborator settings are optional: a missing API key or PDF command only
/// fails the call that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub compatibility_scorer: ScorerBackend,
    pub pdf_render_command: Option<String>,
    pub export_dir: PathBuf,
    pub default_template: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            anthropic_api_key: get("ANTHROPIC_API_KEY"),
            anthropic_model: get("ANTHROPIC_MODEL")
                .unwrap_or_else(|| llm_client::DEFAULT_MODEL.to_string()),
            compatibility_scorer: get("COMPATIBILITY_SCORER")
                .as_deref()
                .unwrap_or("llm")
                .parse()?,
            pdf_render_command: get("PDF_RENDER_COMMAND"),
            export_dir: PathBuf::from(get("EXPORT_DIR").unwrap_or_else(|| "exports".to_string())),
            default_template: get("DEFAULT_TEMPLATE")
                .unwrap_or_else(|| "timeline-accent".to_string()),
        })
    }
}
