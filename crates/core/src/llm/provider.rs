//! Provider abstraction for chat-completion backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported chat-completion providers, in the order they are offered.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    OpenRouter,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::OpenAi, ProviderKind::OpenRouter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::OpenRouter => "openrouter",
        }
    }

    /// Human-readable provider name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI API",
            Self::OpenRouter => "OpenRouter API",
        }
    }

    /// Environment variable holding the API key.
    pub fn key_env(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::OpenRouter => "OPENROUTER_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "openrouter" => Ok(Self::OpenRouter),
            other => Err(format!("unknown provider '{other}'")),
        }
    }
}

/// One system + user exchange sent to a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Sampling temperature used for configuration generation.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Completion budget used for configuration generation.
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

impl ChatRequest {
    pub fn new(model: impl Into<String>, system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system: system.into(),
            user: user.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Errors from a single provider attempt.
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key is configured for the provider.
    #[error("{} key not found. Set {} in the environment or .env file", .0.display_name(), .0.key_env())]
    MissingCredentials(ProviderKind),

    /// Transport failure: connect, timeout, TLS or body read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider answered with a non-success status.
    #[error("{status} - {message}")]
    Status { status: u16, message: String },

    /// The reply carried no message content.
    #[error("the model returned an empty reply")]
    EmptyReply,

    /// The reply did not contain a usable JSON object.
    #[error("the model reply is not valid JSON: {0}")]
    MalformedReply(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Http("request timed out".to_string())
        } else {
            LlmError::Http(err.to_string())
        }
    }
}

/// A chat-completion backend.
///
/// Implementations perform exactly one request per call; fallback between
/// providers is decided by the caller.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Model used when a request does not name one.
    fn default_model(&self) -> &str;

    /// Send the exchange and return the assistant message content.
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_is_listed_first() {
        assert_eq!(ProviderKind::ALL[0], ProviderKind::OpenAi);
        assert_eq!(ProviderKind::ALL[1], ProviderKind::OpenRouter);
    }

    #[test]
    fn test_provider_kind_round_trips_through_strings() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.as_str().parse::<ProviderKind>(), Ok(kind));
        }
        assert_eq!(" OpenRouter ".parse::<ProviderKind>(), Ok(ProviderKind::OpenRouter));
        assert!("anthropic".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_provider_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ProviderKind::OpenRouter).expect("serialize");
        assert_eq!(json, "\"openrouter\"");
    }

    #[test]
    fn test_missing_credentials_names_variable() {
        let message = LlmError::MissingCredentials(ProviderKind::OpenAi).to_string();
        assert!(message.contains("OPENAI_API_KEY"), "got: {message}");
        assert!(message.starts_with("OpenAI API"), "got: {message}");
    }

    #[test]
    fn test_chat_request_defaults() {
        let request = ChatRequest::new("gpt-4", "system", "user");
        assert_eq!(request.max_tokens, 4000);
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
    }
}
