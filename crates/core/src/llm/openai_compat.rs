//! OpenAI-compatible chat-completions client.
//!
//! Both OpenAI and OpenRouter speak the same `POST {base}/chat/completions`
//! protocol; OpenRouter additionally receives `X-Title` and `HTTP-Referer`
//! attribution headers.

use crate::llm::provider::{ChatProvider, ChatRequest, LlmError, ProviderKind};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4";

pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const OPENROUTER_DEFAULT_MODEL: &str = "openai/gpt-4-turbo";

/// Application name reported to OpenRouter.
pub const APP_TITLE: &str = "crewforge";

/// Site reported to OpenRouter.
pub const APP_URL: &str = "https://github.com/crewforge/crewforge";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Mask an API key for display.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Connection settings for one OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct EndpointConfig {
    pub kind: ProviderKind,
    pub api_key: String,
    pub base_url: String,
    pub default_model: String,
    pub timeout: Duration,
    /// Sent as `X-Title` when set.
    pub app_name: Option<String>,
    /// Sent as `HTTP-Referer` when set.
    pub site_url: Option<String>,
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("kind", &self.kind)
            .field("api_key", &mask_api_key(&self.api_key))
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("timeout", &self.timeout)
            .field("app_name", &self.app_name)
            .finish()
    }
}

impl EndpointConfig {
    #[must_use]
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            kind: ProviderKind::OpenAi,
            api_key: api_key.into(),
            base_url: OPENAI_BASE_URL.to_string(),
            default_model: OPENAI_DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            app_name: None,
            site_url: None,
        }
    }

    #[must_use]
    pub fn openrouter(api_key: impl Into<String>) -> Self {
        Self {
            kind: ProviderKind::OpenRouter,
            api_key: api_key.into(),
            base_url: OPENROUTER_BASE_URL.to_string(),
            default_model: OPENROUTER_DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            app_name: Some(APP_TITLE.to_string()),
            site_url: Some(APP_URL.to_string()),
        }
    }

    /// Default endpoint settings for a provider kind.
    #[must_use]
    pub fn for_kind(kind: ProviderKind, api_key: impl Into<String>) -> Self {
        match kind {
            ProviderKind::OpenAi => Self::openai(api_key),
            ProviderKind::OpenRouter => Self::openrouter(api_key),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireReply,
}

#[derive(Debug, Deserialize)]
struct WireReply {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    error: WireErrorDetail,
}

#[derive(Debug, Deserialize)]
struct WireErrorDetail {
    message: String,
}

/// Pull the provider's error message out of a failure body, falling back to
/// the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<WireError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

// ============================================================================
// Provider
// ============================================================================

/// Chat-completions provider for OpenAI and OpenRouter.
pub struct OpenAiCompatProvider {
    client: Client,
    config: EndpointConfig,
}

impl fmt::Debug for OpenAiCompatProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiCompatProvider")
            .field("config", &self.config)
            .finish()
    }
}

impl OpenAiCompatProvider {
    pub fn new(config: EndpointConfig) -> Result<Self, LlmError> {
        if config.api_key.trim().is_empty() {
            return Err(LlmError::MissingCredentials(config.kind));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }
}

#[async_trait]
impl ChatProvider for OpenAiCompatProvider {
    fn kind(&self) -> ProviderKind {
        self.config.kind
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(
        skip(self, request),
        fields(provider = %self.config.kind, model = %request.model)
    )]
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = WireRequest {
            model: &request.model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: &request.system,
                },
                WireMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let mut builder = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json");

        if let Some(app_name) = &self.config.app_name {
            builder = builder.header("X-Title", app_name);
        }
        if let Some(site_url) = &self.config.site_url {
            builder = builder.header("HTTP-Referer", site_url);
        }

        debug!("Sending chat completion request");
        let response = builder.json(&body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let parsed: WireResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::MalformedReply(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(LlmError::EmptyReply);
        }

        debug!(chars = content.len(), "Received chat completion");
        Ok(content)
    }
}
