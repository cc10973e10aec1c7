//! Embedded prompt assets.
//!
//! The `assets/` directory of this crate is embedded at compile time with
//! `rust-embed`:
//!
//! - `prompts/<framework>.md`: system prompts for the LLM-backed extractor,
//!   Markdown with YAML front matter
//! - `prompt_template.txt`: fill-in template for the pattern extractor
//! - `suggestions/*.txt`: complete example prompts for the pattern extractor
//! - `scenarios.toml`: short scenario descriptions for the LLM-backed extractor

use cf_protocol::config_models::Framework;
use gray_matter::engine::YAML;
use gray_matter::Matter;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/assets"]
pub struct PromptAssets;

/// A framework-specific system prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPrompt {
    pub framework: Framework,
    pub title: String,
    /// One-paragraph description of the framework.
    pub description: String,
    /// The instruction text sent to the model.
    pub body: String,
}

#[derive(Deserialize)]
struct PromptFrontMatter {
    framework: Framework,
    title: String,
    #[serde(default)]
    description: String,
}

/// An example scenario for the LLM-backed extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub title: String,
    pub prompt: String,
}

#[derive(Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    scenario: Vec<Scenario>,
}

/// Get an asset's content by path, e.g. `"prompts/crewai.md"`.
pub fn get_asset(path: &str) -> Option<String> {
    PromptAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// Sorted asset paths starting with `prefix`.
pub fn list_assets(prefix: &str) -> Vec<String> {
    let mut paths: Vec<String> = PromptAssets::iter()
        .filter(|path| path.starts_with(prefix))
        .map(|path| path.to_string())
        .collect();
    paths.sort();
    paths
}

/// Parses a system prompt from Markdown with YAML front matter.
///
/// Returns the reason on failure.
pub fn parse_system_prompt(content: &str) -> Result<SystemPrompt, String> {
    let matter = Matter::<YAML>::new();
    let parsed = matter.parse(content);

    let front: PromptFrontMatter = parsed
        .data
        .ok_or_else(|| "Missing YAML front matter".to_string())?
        .deserialize()
        .map_err(|e| format!("Failed to deserialize front matter: {e}"))?;

    let body = parsed.content.trim().to_string();
    if body.is_empty() {
        return Err("Prompt body is empty".to_string());
    }

    Ok(SystemPrompt {
        framework: front.framework,
        title: front.title,
        description: front.description.trim().to_string(),
        body,
    })
}

/// The built-in system prompt for a framework.
pub fn system_prompt(framework: Framework) -> Option<SystemPrompt> {
    let content = get_asset(&format!("prompts/{}.md", framework.as_str()))?;
    parse_system_prompt(&content).ok()
}

/// Fill-in template for the pattern extractor.
pub fn prompt_template() -> String {
    get_asset("prompt_template.txt").unwrap_or_default()
}

/// Example prompts the pattern extractor understands.
pub fn prompt_suggestions() -> Vec<String> {
    list_assets("suggestions/")
        .iter()
        .filter_map(|path| get_asset(path))
        .map(|text| text.trim().to_string())
        .collect()
}

/// Example scenarios for the LLM-backed extractor.
pub fn example_scenarios() -> Vec<Scenario> {
    get_asset("scenarios.toml")
        .and_then(|text| toml::from_str::<ScenarioFile>(&text).ok())
        .map(|file| file.scenario)
        .unwrap_or_default()
}
