//! OpenAI-compatible chat completion client.
//!
//! Works with OpenAI, OpenRouter, Ollama, and other compatible APIs.

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::LLMError;
use crate::types::{ChatMessage, ChatResponse};

/// Model used when none is given.
pub const DEFAULT_MODEL: &str = "gpt-4o";
/// Public provider endpoint used when `OPENAI_API_BASE` is unset.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";

const BASE_URL_ENV: &str = "OPENAI_API_BASE";
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Client for an OpenAI-compatible chat completions endpoint.
///
/// Immutable after construction: the model identifier and resolved base URL
/// never change, and no state is carried between calls. Construction does
/// no network I/O and no validation; an unreachable endpoint or invalid
/// model surfaces on the first [`ChatClient::chat`] call.
pub struct ChatClient {
    client: Client,
    model: String,
    base_url: String,
    api_key: Option<String>,
}

impl ChatClient {
    /// Create a client for `model`, resolving the base URL from
    /// `OPENAI_API_BASE` (default: the public OpenAI endpoint) and the API
    /// key from `OPENAI_API_KEY` (optional; local servers need none).
    pub fn new(model: impl Into<String>) -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = std::env::var(API_KEY_ENV).ok();
        Self::with_config(model, base_url, api_key)
    }

    /// Create a client with an explicit base URL and API key, bypassing the
    /// environment.
    pub fn with_config(
        model: impl Into<String>,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a chat completion request.
    ///
    /// Sends the full message sequence in one request and returns the first
    /// choice's text plus the total token count. Exactly one outbound call
    /// per invocation; no retry, no recovery. Transport and provider
    /// failures propagate as [`LLMError`].
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<ChatResponse, LLMError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let request = CompletionRequest {
            model: &self.model,
            messages,
        };

        debug!(model = %self.model, messages = messages.len(), "sending chat completion request");

        let mut req = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");

        if let Some(ref key) = self.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let response = req.json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!(status, "provider returned an error response");
            return Err(LLMError::Api { status, message });
        }

        let completion: CompletionResponse = response.json().await?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LLMError::ResponseShape("response contained no choices".to_string()))?;
        let usage = completion
            .usage
            .ok_or_else(|| LLMError::ResponseShape("response missing usage".to_string()))?;

        Ok(ChatResponse {
            content: choice.message.content.unwrap_or_default(),
            total_tokens: usage.total_tokens,
        })
    }
}

impl Default for ChatClient {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

// --- Wire format ---

#[derive(serde::Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(serde::Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Option<CompletionUsage>,
}

#[derive(serde::Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(serde::Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[derive(serde::Deserialize)]
struct CompletionUsage {
    total_tokens: u32,
}
