//! HTTP client for an OpenAI-compatible chat-completion endpoint.
//!
//! A client carries exactly one caller's API key and is meant to be built
//! per request; nothing here is process-wide.

use std::time::Duration;

use mas_core::{ApiKey, AppConfig};
use reqwest::Client;

use crate::error::LlmError;
use crate::prompts::Prompt;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ErrorEnvelope};

/// Upper bound on how much of a non-JSON error body ends up in an error message.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Endpoint settings shared by every completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmSettings {
    /// Base URL without trailing slash, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl LlmSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.llm_base_url.clone(),
            model: config.llm_model.clone(),
            timeout_secs: config.llm_timeout_secs,
        }
    }
}

pub struct CompletionClient {
    client: Client,
    url: String,
    model: String,
    api_key: ApiKey,
}

impl CompletionClient {
    /// Creates a client bound to `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(settings: &LlmSettings, api_key: ApiKey) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            url: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            model: settings.model.clone(),
            api_key,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` as a system + user exchange and returns the first
    /// choice's text. One attempt, no retry.
    ///
    /// # Errors
    ///
    /// - [`LlmError::Upstream`] for any non-2xx status (invalid key, rate
    ///   limit, unknown model).
    /// - [`LlmError::Http`] on network failure or timeout.
    /// - [`LlmError::Deserialize`] if the body is not a completion response.
    /// - [`LlmError::EmptyCompletion`] if no choice carries content.
    pub async fn complete(&self, prompt: &Prompt) -> Result<String, LlmError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
        };

        tracing::debug!(
            model = %self.model,
            prompt_chars = prompt.user.chars().count(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = upstream_message(&body);
            tracing::warn!(status = status.as_u16(), %message, "chat completion failed");
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::Deserialize {
                context: format!("chat completion from model {}", self.model),
                source: e,
            })?;

        let content = parsed
            .into_first_content()
            .ok_or(LlmError::EmptyCompletion)?;
        tracing::debug!(completion_chars = content.chars().count(), "chat completion received");
        Ok(content)
    }
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("url", &self.url)
            .field("model", &self.model)
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

/// Pulls `error.message` out of an OpenAI error envelope, falling back to a
/// clipped copy of the raw body.
fn upstream_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    mas_core::truncate_chars(trimmed, MAX_ERROR_BODY_CHARS).to_string()
}
