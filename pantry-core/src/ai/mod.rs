//! Chat-completion client for LLM integration via OpenRouter.
//!
//! This module provides:
//! - `ChatClient` trait for abstracting chat-completion backends
//! - `OpenRouterClient` implementation (OpenAI-compatible API)
//! - `FakeChatClient` for tests, with scripted per-model responses
//! - Configuration via environment variables
//!
//! # Configuration
//!
//! Set these environment variables:
//!
//! - `OPENROUTER_API_KEY` (required): Your OpenRouter API key
//! - `PANTRY_AI_BASE_URL` (optional): API base URL
//! - `PANTRY_AI_MODELS` (optional): Comma-separated model priority list
//! - `PANTRY_AI_TIMEOUT_SECS` (optional): Per-attempt timeout in seconds

mod client;
mod config;
mod fake;
mod types;

pub use client::OpenRouterClient;
pub use config::{AiConfig, ConfigError, DEFAULT_ATTEMPT_TIMEOUT_SECS, DEFAULT_BASE_URL};
pub use fake::FakeChatClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};

use async_trait::async_trait;
use thiserror::Error;

/// Error type for chat-completion calls.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Trait for chat-completion clients.
///
/// Implementations must be stateless across calls and thread-safe. The model is
/// chosen per call so one client can serve a whole fallback sequence.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Complete a chat request against the given model identifier.
    async fn complete(&self, model: &str, request: ChatRequest) -> Result<ChatResponse, AiError>;
}
