//! Settings loader for the `.crewforge/` directory.
//!
//! Sources, later ones winning:
//! - `config.toml`: provider defaults, models, endpoints and timeout
//! - `prompts/{crewai,langgraph}.md`: system prompt overrides
//! - `OPENAI_*` / `OPENROUTER_*` environment variables

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::models::{Settings, SettingsFile};
use crate::llm::provider::ProviderKind;
use crate::templates::parse_system_prompt;
use cf_protocol::config_models::Framework;
use std::path::Path;
use tracing::debug;

/// Name of the settings directory under the project root.
pub const SETTINGS_DIR: &str = ".crewforge";

/// Loads settings from `<root>/.crewforge/` and the process environment.
///
/// A missing directory or file yields defaults rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - A file exists but cannot be read
/// - `config.toml` has invalid syntax or unknown keys
/// - A prompt override lacks front matter or names the wrong framework
/// - `timeout_secs` is zero
///
/// # Example
///
/// ```rust,no_run
/// use cf_core::config::load_settings;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = load_settings(Path::new(".")).await?;
/// println!("Using {}", settings.preferred_provider());
/// # Ok(())
/// # }
/// ```
pub async fn load_settings(root: &Path) -> ConfigResult<Settings> {
    load_settings_with_env(root, |name| std::env::var(name).ok()).await
}

/// Same as [`load_settings`] with an explicit environment lookup.
pub async fn load_settings_with_env<F>(root: &Path, env: F) -> ConfigResult<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let dir = root.join(SETTINGS_DIR);

    let mut settings = if dir.exists() {
        let mut settings = load_settings_file(&dir)?;
        load_prompt_overrides(&dir, &mut settings)?;
        settings
    } else {
        Settings::default()
    };

    apply_env(&mut settings, env);
    debug!(
        openai = settings.has_credentials(ProviderKind::OpenAi),
        openrouter = settings.has_credentials(ProviderKind::OpenRouter),
        "Settings loaded"
    );
    Ok(settings)
}

fn load_settings_file(dir: &Path) -> ConfigResult<Settings> {
    let path = dir.join("config.toml");

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::FileRead {
        path: path.clone(),
        source,
    })?;

    let file: SettingsFile = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.clone(),
        source,
    })?;

    if file.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfig {
            path,
            reason: "timeout_secs must be greater than zero".to_string(),
        });
    }

    Ok(file.into())
}

fn load_prompt_overrides(dir: &Path, settings: &mut Settings) -> ConfigResult<()> {
    for framework in [Framework::CrewAi, Framework::LangGraph] {
        let path = dir.join("prompts").join(format!("{}.md", framework.as_str()));
        if !path.exists() {
            continue;
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::FileRead {
            path: path.clone(),
            source,
        })?;

        let prompt = parse_system_prompt(&content).map_err(|reason| ConfigError::MarkdownParse {
            path: path.clone(),
            reason,
        })?;

        if prompt.framework != framework {
            return Err(ConfigError::InvalidConfig {
                path,
                reason: format!(
                    "prompt declares framework '{}' but the file is for '{}'",
                    prompt.framework, framework
                ),
            });
        }

        debug!(framework = %framework, "Loaded prompt override");
        settings.prompts.push(prompt);
    }
    Ok(())
}

fn apply_env<F>(settings: &mut Settings, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    for kind in ProviderKind::ALL {
        let prefix = match kind {
            ProviderKind::OpenAi => "OPENAI",
            ProviderKind::OpenRouter => "OPENROUTER",
        };
        let lookup = |suffix: &str| env(&format!("{prefix}_{suffix}")).filter(|v| !v.trim().is_empty());

        let provider = settings.provider_mut(kind);
        if let Some(key) = lookup("API_KEY") {
            provider.api_key = Some(key);
        }
        if let Some(model) = lookup("MODEL") {
            provider.model = Some(model);
        }
        if let Some(url) = lookup("BASE_URL") {
            provider.base_url = Some(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::DEFAULT_TIMEOUT_SECS;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    /// A complete `.crewforge/` directory is read into `Settings`.
    #[tokio::test]
    async fn test_load_settings_acceptance() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();
        let cf_dir = root.join(SETTINGS_DIR);
        fs::create_dir_all(cf_dir.join("prompts")).expect("Failed to create prompts dir");

        let config_toml = r#"
default_provider = "openai"
timeout_secs = 45

[openai]
api_key = "sk-from-file-0000"
model = "gpt-4o"

[openrouter]
model = "deepseek/deepseek-r1:free"
"#;
        fs::write(cf_dir.join("config.toml"), config_toml).expect("Failed to write config.toml");

        let prompt_md = r#"---
framework: crewai
title: Custom crew prompt
---

Design a crew and answer with JSON only.
"#;
        fs::write(cf_dir.join("prompts/crewai.md"), prompt_md).expect("Failed to write prompt");

        let settings = load_settings_with_env(root, no_env)
            .await
            .expect("Failed to load settings");

        assert_eq!(settings.default_provider, Some(ProviderKind::OpenAi));
        assert_eq!(settings.timeout_secs, 45);
        assert_eq!(settings.openai.api_key.as_deref(), Some("sk-from-file-0000"));
        assert_eq!(settings.openai.model.as_deref(), Some("gpt-4o"));
        assert_eq!(
            settings.openrouter.model.as_deref(),
            Some("deepseek/deepseek-r1:free")
        );
        assert!(!settings.has_credentials(ProviderKind::OpenRouter));

        let prompt = settings
            .prompt_override(Framework::CrewAi)
            .expect("crewai override should load");
        assert_eq!(prompt.title, "Custom crew prompt");
        assert!(prompt.body.contains("JSON only"));
        assert!(settings.prompt_override(Framework::LangGraph).is_none());
    }

    /// A root without `.crewforge/` yields defaults, not an error.
    #[tokio::test]
    async fn test_load_settings_empty_directory() {
        let dir = tempdir().expect("Failed to create temp dir");

        let settings = load_settings_with_env(dir.path(), no_env)
            .await
            .expect("Should handle missing .crewforge");

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(settings.preferred_provider(), ProviderKind::OpenRouter);
    }

    /// Environment variables override file values.
    #[tokio::test]
    async fn test_env_overrides_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let cf_dir = dir.path().join(SETTINGS_DIR);
        fs::create_dir_all(&cf_dir).expect("Failed to create .crewforge");
        fs::write(
            cf_dir.join("config.toml"),
            "[openai]\napi_key = \"sk-file\"\nmodel = \"gpt-4\"\n",
        )
        .expect("Failed to write config.toml");

        let env = env_from(&[
            ("OPENAI_API_KEY", "sk-env-override"),
            ("OPENROUTER_API_KEY", "sk-or-env"),
            ("OPENROUTER_BASE_URL", "http://localhost:4000/v1"),
            ("OPENAI_MODEL", "  "),
        ]);
        let settings = load_settings_with_env(dir.path(), env)
            .await
            .expect("Should load settings");

        assert_eq!(settings.openai.api_key.as_deref(), Some("sk-env-override"));
        assert_eq!(
            settings.openai.model.as_deref(),
            Some("gpt-4"),
            "blank env values must not override"
        );
        assert_eq!(
            settings.openrouter.base_url.as_deref(),
            Some("http://localhost:4000/v1")
        );
        assert_eq!(settings.preferred_provider(), ProviderKind::OpenRouter);
    }

    #[tokio::test]
    async fn test_load_settings_invalid_toml() {
        let dir = tempdir().expect("Failed to create temp dir");
        let cf_dir = dir.path().join(SETTINGS_DIR);
        fs::create_dir_all(&cf_dir).expect("Failed to create .crewforge");
        fs::write(cf_dir.join("config.toml"), "timeout_secs = [invalid toml")
            .expect("Failed to write config.toml");

        let result = load_settings_with_env(dir.path(), no_env).await;

        if let Err(ConfigError::TomlParse { path, .. }) = result {
            assert!(path.ends_with("config.toml"));
        } else {
            panic!("Expected TomlParse error, got {result:?}");
        }
    }

    #[tokio::test]
    async fn test_unknown_key_is_rejected() {
        let dir = tempdir().expect("Failed to create temp dir");
        let cf_dir = dir.path().join(SETTINGS_DIR);
        fs::create_dir_all(&cf_dir).expect("Failed to create .crewforge");
        fs::write(cf_dir.join("config.toml"), "default_provder = \"openai\"")
            .expect("Failed to write config.toml");

        let result = load_settings_with_env(dir.path(), no_env).await;
        assert!(matches!(result, Err(ConfigError::TomlParse { .. })));
    }

    #[tokio::test]
    async fn test_zero_timeout_is_invalid() {
        let dir = tempdir().expect("Failed to create temp dir");
        let cf_dir = dir.path().join(SETTINGS_DIR);
        fs::create_dir_all(&cf_dir).expect("Failed to create .crewforge");
        fs::write(cf_dir.join("config.toml"), "timeout_secs = 0")
            .expect("Failed to write config.toml");

        let result = load_settings_with_env(dir.path(), no_env).await;

        if let Err(ConfigError::InvalidConfig { reason, .. }) = result {
            assert!(reason.contains("timeout_secs"));
        } else {
            panic!("Expected InvalidConfig error, got {result:?}");
        }
    }

    /// A prompt override without front matter is a MarkdownParse error.
    #[tokio::test]
    async fn test_prompt_override_without_front_matter() {
        let dir = tempdir().expect("Failed to create temp dir");
        let cf_dir = dir.path().join(SETTINGS_DIR);
        fs::create_dir_all(cf_dir.join("prompts")).expect("Failed to create prompts dir");
        fs::write(cf_dir.join("prompts/langgraph.md"), "Just plain markdown content")
            .expect("Failed to write prompt");

        let result = load_settings_with_env(dir.path(), no_env).await;

        if let Err(ConfigError::MarkdownParse { path, reason }) = result {
            assert!(path.ends_with("langgraph.md"));
            assert!(reason.contains("Missing YAML front matter"));
        } else {
            panic!("Expected MarkdownParse error, got {result:?}");
        }
    }

    #[tokio::test]
    async fn test_prompt_override_for_wrong_framework() {
        let dir = tempdir().expect("Failed to create temp dir");
        let cf_dir = dir.path().join(SETTINGS_DIR);
        fs::create_dir_all(cf_dir.join("prompts")).expect("Failed to create prompts dir");
        let prompt_md = "---\nframework: langgraph\ntitle: Graph\n---\n\nBody\n";
        fs::write(cf_dir.join("prompts/crewai.md"), prompt_md).expect("Failed to write prompt");

        let result = load_settings_with_env(dir.path(), no_env).await;
        assert!(
            matches!(result, Err(ConfigError::InvalidConfig { .. })),
            "got {result:?}"
        );
    }
}
