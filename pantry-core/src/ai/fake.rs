//! Fake chat client for testing.
//!
//! Responses are scripted per model identifier, allowing tests to exercise the
//! fallback sequence without network access or API costs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::types::{ChatRequest, ChatResponse, Usage};
use super::{AiError, ChatClient};

#[derive(Debug, Clone)]
enum FakeOutcome {
    Reply(String),
    Fail(String),
    /// Never resolves; used to exercise the attempt timeout.
    Hang,
}

/// A fake chat client with scripted per-model outcomes.
///
/// Models with no scripted outcome fail. Every call is recorded so tests can
/// assert how far the fallback sequence progressed.
#[derive(Debug, Default)]
pub struct FakeChatClient {
    outcomes: HashMap<String, FakeOutcome>,
    calls: Mutex<Vec<String>>,
}

impl FakeChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful reply for the given model.
    pub fn with_reply(mut self, model: &str, content: &str) -> Self {
        self.outcomes
            .insert(model.to_string(), FakeOutcome::Reply(content.to_string()));
        self
    }

    /// Script an API failure for the given model.
    pub fn with_failure(mut self, model: &str, message: &str) -> Self {
        self.outcomes
            .insert(model.to_string(), FakeOutcome::Fail(message.to_string()));
        self
    }

    /// Script a call that never completes for the given model.
    pub fn with_hang(mut self, model: &str) -> Self {
        self.outcomes.insert(model.to_string(), FakeOutcome::Hang);
        self
    }

    /// Models called so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for FakeChatClient {
    async fn complete(&self, model: &str, _request: ChatRequest) -> Result<ChatResponse, AiError> {
        self.calls.lock().unwrap().push(model.to_string());

        match self.outcomes.get(model) {
            Some(FakeOutcome::Reply(content)) => Ok(ChatResponse {
                content: content.clone(),
                usage: Usage::default(),
            }),
            Some(FakeOutcome::Fail(message)) => Err(AiError::Api(message.clone())),
            Some(FakeOutcome::Hang) => std::future::pending().await,
            None => Err(AiError::Api(format!(
                "FakeChatClient: no scripted outcome for model {}",
                model
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_reply_is_returned() {
        let client = FakeChatClient::new().with_reply("model-a", "hello");
        let response = client
            .complete("model-a", ChatRequest::default())
            .await
            .unwrap();
        assert_eq!(response.content, "hello");
    }

    #[tokio::test]
    async fn unscripted_model_fails() {
        let client = FakeChatClient::new();
        let result = client.complete("model-x", ChatRequest::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn calls_are_recorded_in_order() {
        let client = FakeChatClient::new()
            .with_failure("model-a", "boom")
            .with_reply("model-b", "ok");

        let _ = client.complete("model-a", ChatRequest::default()).await;
        let _ = client.complete("model-b", ChatRequest::default()).await;

        assert_eq!(client.calls(), vec!["model-a", "model-b"]);
    }
}
