//! LLM-backed extraction with a single provider fallback.
//!
//! A generation is one attempt with the requested provider and, when that
//! attempt fails on OpenRouter and OpenAI credentials exist, one more attempt
//! with OpenAI and [`FALLBACK_MODEL`]. Attempt failures never escape: they
//! become warnings and a total failure yields an empty configuration.

use crate::config::Settings;
use crate::llm::prompt::system_instruction;
use crate::llm::provider::{ChatRequest, LlmError, ProviderKind};
use crate::llm::registry::ProviderRegistry;
use crate::llm::reply::parse_reply;
use crate::outcome::Outcome;
use crate::templates;
use crate::validate::{relink_tasks, validate_crew, validate_graph};
use cf_protocol::config_models::{CrewConfig, Framework, GraphConfig, GraphDraft, UpdateScope};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

/// Model used for the OpenAI fallback attempt.
pub const FALLBACK_MODEL: &str = "gpt-3.5-turbo";

/// Prefix of every warning produced by the fallback attempt.
pub const FALLBACK_TAG: &str = "[fallback openai/gpt-3.5-turbo]";

/// Input of [`LlmExtractor::generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub text: String,
    pub provider: ProviderKind,
    /// Overrides the provider's default model.
    pub model: Option<String>,
    /// Configuration being refined, if any.
    pub existing: Option<CrewConfig>,
    pub scope: UpdateScope,
}

impl GenerateRequest {
    pub fn new(text: impl Into<String>, provider: ProviderKind) -> Self {
        Self {
            text: text.into(),
            provider,
            model: None,
            existing: None,
            scope: UpdateScope::All,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn with_existing(mut self, existing: CrewConfig, scope: UpdateScope) -> Self {
        self.existing = Some(existing);
        self.scope = scope;
        self
    }
}

/// Turns free text into a validated configuration through a chat model.
pub struct LlmExtractor {
    registry: ProviderRegistry,
    crew_prompt: String,
    graph_prompt: String,
}

fn embedded_prompt(framework: Framework) -> String {
    templates::system_prompt(framework)
        .map(|prompt| prompt.body)
        .unwrap_or_default()
}

fn describe_failure(kind: ProviderKind, err: &LlmError) -> String {
    match err {
        LlmError::MissingCredentials(_) => err.to_string(),
        _ => format!("{} error: {err}", kind.display_name()),
    }
}

impl LlmExtractor {
    /// An extractor using the embedded system prompts.
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            registry,
            crew_prompt: embedded_prompt(Framework::CrewAi),
            graph_prompt: embedded_prompt(Framework::LangGraph),
        }
    }

    /// HTTP providers and prompt overrides from loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, LlmError> {
        let mut extractor = Self::new(ProviderRegistry::from_settings(settings)?);
        for prompt in &settings.prompts {
            extractor = extractor.with_prompt(prompt.framework, prompt.body.clone());
        }
        Ok(extractor)
    }

    /// Replace the system prompt body for a framework.
    #[must_use]
    pub fn with_prompt(mut self, framework: Framework, body: impl Into<String>) -> Self {
        match framework {
            Framework::CrewAi => self.crew_prompt = body.into(),
            Framework::LangGraph => self.graph_prompt = body.into(),
        }
        self
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Generate a flat configuration.
    ///
    /// With an existing configuration, `Agents` scope keeps its tasks and
    /// `Tasks` scope keeps its agents in place of the generated ones.
    pub async fn generate(&self, request: &GenerateRequest) -> Outcome<CrewConfig> {
        let system = system_instruction(&self.crew_prompt, request.existing.as_ref(), request.scope);

        let (config, mut warnings) = self
            .run(
                request.provider,
                request.model.as_deref(),
                &system,
                &request.text,
                validate_crew,
            )
            .await;

        let Some(mut config) = config else {
            return Outcome::new(CrewConfig::default(), warnings);
        };

        if let Some(existing) = &request.existing {
            match request.scope {
                UpdateScope::All => {}
                UpdateScope::Agents => {
                    let relinked = relink_tasks(existing.tasks.clone(), &config.agents);
                    config.tasks = relinked.config;
                    warnings.extend(relinked.warnings);
                }
                UpdateScope::Tasks => {
                    config.agents = existing.agents.clone();
                    let relinked = relink_tasks(config.tasks, &config.agents);
                    config.tasks = relinked.config;
                    warnings.extend(relinked.warnings);
                }
            }
        }

        info!(
            agents = config.agents.len(),
            tasks = config.tasks.len(),
            warnings = warnings.len(),
            "Generated crew configuration"
        );
        Outcome::new(config, warnings)
    }

    /// Generate a graph configuration.
    pub async fn generate_graph(
        &self,
        text: &str,
        provider: ProviderKind,
        model: Option<&str>,
    ) -> Outcome<GraphConfig> {
        let system = system_instruction(&self.graph_prompt, None, UpdateScope::All);
        let (config, warnings) = self
            .run::<GraphDraft, GraphConfig>(provider, model, &system, text, validate_graph)
            .await;
        Outcome::new(config.unwrap_or_default(), warnings)
    }

    /// Primary attempt, then the OpenAI fallback when it applies.
    ///
    /// Returns `None` when no attempt produced a configuration.
    async fn run<D, T>(
        &self,
        primary: ProviderKind,
        model: Option<&str>,
        system: &str,
        user: &str,
        validate: fn(D) -> Outcome<T>,
    ) -> (Option<T>, Vec<String>)
    where
        D: DeserializeOwned,
    {
        let err = match self.attempt(primary, model, system, user, validate).await {
            Ok(outcome) => return (Some(outcome.config), outcome.warnings),
            Err(err) => err,
        };

        warn!(provider = %primary, error = %err, "Provider attempt failed");
        let failure = describe_failure(primary, &err);

        if primary != ProviderKind::OpenRouter {
            return (None, vec![failure]);
        }

        if !self.registry.has(ProviderKind::OpenAi) {
            return (
                None,
                vec![
                    failure,
                    format!(
                        "No fallback was possible: {} is not set.",
                        ProviderKind::OpenAi.key_env()
                    ),
                ],
            );
        }

        let mut warnings = vec![format!("{failure}. Switching to the OpenAI API.")];
        warn!(model = FALLBACK_MODEL, "Falling back to OpenAI");

        match self
            .attempt(ProviderKind::OpenAi, Some(FALLBACK_MODEL), system, user, validate)
            .await
        {
            Ok(outcome) => {
                warnings.extend(
                    outcome
                        .warnings
                        .iter()
                        .map(|warning| format!("{FALLBACK_TAG} {warning}")),
                );
                warnings.push(format!(
                    "{FALLBACK_TAG} Used the OpenAI API ({FALLBACK_MODEL}) as a fallback."
                ));
                (Some(outcome.config), warnings)
            }
            Err(fallback_err) => {
                warn!(error = %fallback_err, "Fallback attempt failed");
                warnings.push(format!(
                    "{FALLBACK_TAG} {}",
                    describe_failure(ProviderKind::OpenAi, &fallback_err)
                ));
                (None, warnings)
            }
        }
    }

    /// One request to one provider, parsed and validated.
    async fn attempt<D, T>(
        &self,
        kind: ProviderKind,
        model: Option<&str>,
        system: &str,
        user: &str,
        validate: fn(D) -> Outcome<T>,
    ) -> Result<Outcome<T>, LlmError>
    where
        D: DeserializeOwned,
    {
        let provider = self
            .registry
            .get(kind)
            .ok_or(LlmError::MissingCredentials(kind))?;

        let model = model
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| provider.default_model())
            .to_string();

        let reply = provider.complete(&ChatRequest::new(model, system, user)).await?;
        let draft: D = parse_reply(&reply)?;
        Ok(validate(draft))
    }
}
