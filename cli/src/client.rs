//! HTTP client for the recipe service.

use pantry_core::Recipe;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Could not reach the server. Is it running?")]
    Unreachable(#[source] reqwest::Error),

    #[error("{0}")]
    Server(String),

    #[error("Server returned an unreadable response: {0}")]
    BadResponse(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// POST the comma-joined ingredient string and decode the recipe.
    ///
    /// Non-success statuses surface the server's error message when it sends
    /// one, with a generic fallback.
    pub async fn generate(&self, ingredients: &str) -> Result<Recipe, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/generate-recipe", self.base_url))
            .json(&serde_json::json!({ "ingredients": ingredients }))
            .send()
            .await
            .map_err(ClientError::Unreachable)?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| "Failed to generate recipe".to_string());
            return Err(ClientError::Server(message));
        }

        response
            .json::<Recipe>()
            .await
            .map_err(ClientError::BadResponse)
    }
}
