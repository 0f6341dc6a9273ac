//! LLM Client: the only code in cvstudio that talks to the Anthropic API.
//!
//! Two reply shapes are used: JSON (compatibility analysis) and raw text
//! (rewrites pasted back into a form field). Each gets its own token budget.
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Used when `ANTHROPIC_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";
const JSON_MAX_TOKENS: u32 = 2048;
const TEXT_MAX_TOKENS: u32 = 1024;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("gave up after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [UserMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct Reply {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl Reply {
    /// The first text block, if any.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Outcome of a single HTTP attempt.
enum Attempt {
    Done(Reply),
    Retry(LlmError),
    Fail(LlmError),
}

/// Rate limits and server errors are worth another attempt.
fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Wait before attempt `attempt` (0-based): none, 1s, 2s, 4s...
fn backoff_delay(attempt: u32) -> Duration {
    match attempt {
        0 => Duration::ZERO,
        n => Duration::from_secs(1 << (n - 1).min(5)),
    }
}

/// Prefers the API's own error message over the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn attempt(&self, body: &MessagesRequest<'_>) -> Attempt {
        let response = match self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return Attempt::Retry(LlmError::Http(e)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            };
            return if is_retryable(status) {
                Attempt::Retry(err)
            } else {
                Attempt::Fail(err)
            };
        }

        match response.json::<Reply>().await {
            Ok(reply) => Attempt::Done(reply),
            Err(e) => Attempt::Fail(LlmError::Http(e)),
        }
    }

    /// One user turn against the Messages API, retried with backoff on
    /// transport errors, 429 and 5xx.
    async fn complete(&self, prompt: &str, system: &str, max_tokens: u32) -> Result<Reply, LlmError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens,
            system,
            messages: [UserMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error = None;
        for attempt in 0..MAX_ATTEMPTS {
            let delay = backoff_delay(attempt);
            if !delay.is_zero() {
                warn!(attempt, delay_ms = delay.as_millis() as u64, "retrying LLM call");
                tokio::time::sleep(delay).await;
            }

            match self.attempt(&body).await {
                Attempt::Done(reply) => {
                    if let Some(usage) = &reply.usage {
                        debug!(
                            input_tokens = usage.input_tokens,
                            output_tokens = usage.output_tokens,
                            "LLM call succeeded"
                        );
                    }
                    return Ok(reply);
                }
                Attempt::Retry(err) => {
                    warn!("LLM call failed: {err}");
                    last_error = Some(err);
                }
                Attempt::Fail(err) => return Err(err),
            }
        }

        Err(last_error.unwrap_or(LlmError::Exhausted {
            attempts: MAX_ATTEMPTS,
        }))
    }

    /// Deserializes the reply text as JSON. The prompt must ask for JSON only.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let reply = self.complete(prompt, system, JSON_MAX_TOKENS).await?;
        let text = reply.text().ok_or(LlmError::EmptyContent)?;
        Ok(serde_json::from_str(strip_code_fence(text))?)
    }

    /// The reply text, trimmed. Blank replies are an error.
    pub async fn call_text(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let reply = self.complete(prompt, system, TEXT_MAX_TOKENS).await?;
        match reply.text().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(LlmError::EmptyContent),
        }
    }
}

/// Unwraps a markdown code fence (with or without a language tag) around
/// model output. A missing closing fence is tolerated.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // drop the language tag line, e.g. "json"
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let rest = rest.trim_start();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence_with_json_tag() {
        let input = "```json\n{\"score\": 80}\n```";
        assert_eq!(strip_code_fence(input), "{\"score\": 80}");
    }

    #[test]
    fn test_strip_code_fence_without_tag() {
        let input = "```\n{\"score\": 80}\n```";
        assert_eq!(strip_code_fence(input), "{\"score\": 80}");
    }

    #[test]
    fn test_strip_code_fence_keeps_unterminated_block() {
        let input = "```json\n{\"score\": 80}";
        assert_eq!(strip_code_fence(input), "{\"score\": 80}");
    }

    #[test]
    fn test_strip_code_fence_leaves_plain_json() {
        let input = "  {\"score\": 80}\n";
        assert_eq!(strip_code_fence(input), "{\"score\": 80}");
    }

    #[test]
    fn test_reply_text_picks_first_text_block() {
        let reply: Reply = serde_json::from_value(serde_json::json!({
            "content": [
                {"type": "tool_use"},
                {"type": "text", "text": "  Led a team of five.  "}
            ],
            "usage": {"input_tokens": 10, "output_tokens": 5}
        }))
        .unwrap();
        assert_eq!(reply.text(), Some("  Led a team of five.  "));
    }

    #[test]
    fn test_reply_without_usage_still_parses() {
        let reply: Reply = serde_json::from_value(serde_json::json!({
            "content": [{"type": "text", "text": "ok"}]
        }))
        .unwrap();
        assert!(reply.usage.is_none());
        assert_eq!(reply.text(), Some("ok"));
    }

    #[test]
    fn test_backoff_doubles_after_first_attempt() {
        assert_eq!(backoff_delay(0), Duration::ZERO);
        assert_eq!(backoff_delay(1), Duration::from_secs(1));
        assert_eq!(backoff_delay(2), Duration::from_secs(2));
        assert_eq!(backoff_delay(3), Duration::from_secs(4));
    }

    #[test]
    fn test_only_rate_limits_and_server_errors_are_retried() {
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_retryable(StatusCode::UNAUTHORIZED));
        assert!(!is_retryable(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_api_error_message_prefers_envelope() {
        let body = r#"{"type":"error","error":{"type":"invalid_request_error","message":"bad key"}}"#;
        assert_eq!(api_error_message(body.to_string()), "bad key");
        assert_eq!(api_error_message("gateway down".to_string()), "gateway down");
    }
}
