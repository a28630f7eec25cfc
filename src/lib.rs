//! Minimal client for OpenAI-compatible chat completion APIs.
//!
//! One adapter, one operation: [`ChatClient::chat`] submits an ordered
//! conversation in a single request and returns the completion text plus
//! the total token usage reported by the provider. No retries, no
//! streaming, no caching; failures propagate to the caller.

mod client;
mod error;
mod types;

pub use client::{ChatClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::LLMError;
pub use types::{ChatMessage, ChatResponse, Role};
