//! AI configuration from environment variables.

use std::env;
use std::time::Duration;
use thiserror::Error;

use crate::generate::DEFAULT_MODELS;

/// Default OpenRouter base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default per-attempt timeout in seconds.
pub const DEFAULT_ATTEMPT_TIMEOUT_SECS: u64 = 8;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Chat-client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key for OpenRouter.
    pub api_key: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Model identifiers to try, in priority order.
    pub models: Vec<String>,
    /// How long to wait on a single model before moving on.
    pub attempt_timeout: Duration,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `OPENROUTER_API_KEY`: API key for OpenRouter
    ///
    /// Optional:
    /// - `PANTRY_AI_BASE_URL`: API base URL (default: "https://openrouter.ai/api/v1")
    /// - `PANTRY_AI_MODELS`: Comma-separated model priority list
    /// - `PANTRY_AI_TIMEOUT_SECS`: Per-attempt timeout in seconds (default: 8)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()))?;

        let base_url =
            env::var("PANTRY_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let models = env::var("PANTRY_AI_MODELS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .ok()
            .filter(|models| !models.is_empty())
            .unwrap_or_else(|| DEFAULT_MODELS.iter().map(|m| m.to_string()).collect());

        let attempt_timeout = env::var("PANTRY_AI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_ATTEMPT_TIMEOUT_SECS));

        Ok(Self {
            api_key,
            base_url,
            models,
            attempt_timeout,
        })
    }
}
