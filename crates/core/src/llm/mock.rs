//! Scripted provider for testing.

use crate::llm::provider::{ChatProvider, ChatRequest, LlmError, ProviderKind};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Status(u16, String),
    Transport(String),
}

/// A provider that answers every request the same way and records what it
/// was sent.
#[derive(Debug, Clone)]
pub struct MockProvider {
    kind: ProviderKind,
    default_model: String,
    script: Scripted,
    calls: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockProvider {
    fn new(kind: ProviderKind, script: Scripted) -> Self {
        let default_model = match kind {
            ProviderKind::OpenAi => "mock-gpt",
            ProviderKind::OpenRouter => "mock/router-model",
        };
        Self {
            kind,
            default_model: default_model.to_string(),
            script,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always returns `reply` as the message content.
    pub fn replying(kind: ProviderKind, reply: impl Into<String>) -> Self {
        Self::new(kind, Scripted::Reply(reply.into()))
    }

    /// Always fails with the given HTTP status.
    pub fn failing(kind: ProviderKind, status: u16, message: impl Into<String>) -> Self {
        Self::new(kind, Scripted::Status(status, message.into()))
    }

    /// Always fails before reaching the provider.
    pub fn unreachable(kind: ProviderKind) -> Self {
        Self::new(kind, Scripted::Transport("connection refused".to_string()))
    }

    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Requests received so far, oldest first.
    pub fn calls(&self) -> Vec<ChatRequest> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }

        match &self.script {
            Scripted::Reply(text) if text.trim().is_empty() => Err(LlmError::EmptyReply),
            Scripted::Reply(text) => Ok(text.clone()),
            Scripted::Status(status, message) => Err(LlmError::Status {
                status: *status,
                message: message.clone(),
            }),
            Scripted::Transport(reason) => Err(LlmError::Http(reason.clone())),
        }
    }
}
