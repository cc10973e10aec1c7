//! Settings models.
//!
//! `Settings` aggregates everything read from `.crewforge/config.toml`, the
//! optional prompt overrides under `.crewforge/prompts/` and the provider
//! environment variables.

use crate::llm::openai_compat::{mask_api_key, EndpointConfig};
use crate::llm::provider::ProviderKind;
use crate::templates::SystemPrompt;
use cf_protocol::config_models::Framework;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Credentials and endpoint overrides for one provider.
#[derive(Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ProviderSettings {
    /// True when a non-blank API key is present.
    pub fn has_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

/// Application settings.
///
/// # Example
///
/// ```toml
/// default_provider = "openrouter"
/// timeout_secs = 60
///
/// [openrouter]
/// model = "deepseek/deepseek-r1:free"
///
/// [openai]
/// base_url = "http://localhost:8080/v1"
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Explicit provider choice; see [`Settings::preferred_provider`].
    pub default_provider: Option<ProviderKind>,

    pub timeout_secs: u64,

    pub openai: ProviderSettings,

    pub openrouter: ProviderSettings,

    /// System prompts replacing the embedded ones, keyed by framework.
    pub prompts: Vec<SystemPrompt>,
}

/// On-disk shape of `config.toml`.
#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SettingsFile {
    pub default_provider: Option<ProviderKind>,
    pub timeout_secs: Option<u64>,
    pub openai: ProviderSettings,
    pub openrouter: ProviderSettings,
}

impl From<SettingsFile> for Settings {
    fn from(file: SettingsFile) -> Self {
        Self {
            default_provider: file.default_provider,
            timeout_secs: file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            openai: file.openai,
            openrouter: file.openrouter,
            prompts: Vec::new(),
        }
    }
}

impl Default for Settings {
    /// No credentials and the default timeout.
    fn default() -> Self {
        SettingsFile::default().into()
    }
}

impl Settings {
    pub fn provider(&self, kind: ProviderKind) -> &ProviderSettings {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::OpenRouter => &self.openrouter,
        }
    }

    pub fn provider_mut(&mut self, kind: ProviderKind) -> &mut ProviderSettings {
        match kind {
            ProviderKind::OpenAi => &mut self.openai,
            ProviderKind::OpenRouter => &mut self.openrouter,
        }
    }

    pub fn has_credentials(&self, kind: ProviderKind) -> bool {
        self.provider(kind).has_key()
    }

    /// The explicit default, else OpenRouter when its key is set, else OpenAI
    /// when its key is set, else OpenRouter.
    pub fn preferred_provider(&self) -> ProviderKind {
        if let Some(kind) = self.default_provider {
            return kind;
        }
        if self.has_credentials(ProviderKind::OpenRouter) {
            ProviderKind::OpenRouter
        } else if self.has_credentials(ProviderKind::OpenAi) {
            ProviderKind::OpenAi
        } else {
            ProviderKind::OpenRouter
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Endpoint settings for a provider, `None` without an API key.
    pub fn endpoint(&self, kind: ProviderKind) -> Option<EndpointConfig> {
        let provider = self.provider(kind);
        let key = provider.api_key.as_deref().filter(|key| !key.trim().is_empty())?;

        let mut endpoint = EndpointConfig::for_kind(kind, key).with_timeout(self.timeout());
        if let Some(model) = provider.model.as_deref().filter(|m| !m.trim().is_empty()) {
            endpoint = endpoint.with_model(model);
        }
        if let Some(url) = provider.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            endpoint = endpoint.with_base_url(url);
        }
        Some(endpoint)
    }

    /// A prompt override for the framework, if one was loaded.
    pub fn prompt_override(&self, framework: Framework) -> Option<&SystemPrompt> {
        self.prompts.iter().find(|prompt| prompt.framework == framework)
    }
}
