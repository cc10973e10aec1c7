//! Tool catalog.
//!
//! A static registry of the integration tools that generated agents may use.
//! Each entry carries a description, a parameter schema and the environment
//! variables the tool needs at runtime. The registry is immutable and built
//! at compile time, so every function here is a pure lookup.
//!
//! ## Example
//!
//! ```rust
//! use cf_core::catalog::{self, EnvScope};
//!
//! assert!(catalog::contains("SerperDevTool"));
//! let vars = catalog::env_requirements(EnvScope::One("GoogleSearchTool"));
//! assert_eq!(vars.len(), 2);
//! ```

mod params;
mod registry;

pub use params::format_tool_config;
pub use params::validate_parameters;

use serde::Serialize;
use std::fmt;

/// Declared type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Str,
    Int,
    Float,
    Bool,
    List,
    Dict,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Str => "str",
            ParamType::Int => "int",
            ParamType::Float => "float",
            ParamType::Bool => "bool",
            ParamType::List => "list",
            ParamType::Dict => "dict",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default value of an optional parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamDefault {
    Str(&'static str),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamDefault::Str(s) => write!(f, "{s:?}"),
            ParamDefault::Int(i) => write!(f, "{i}"),
            ParamDefault::Float(x) => write!(f, "{x:?}"),
            ParamDefault::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Schema entry for a single tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ParamType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ParamDefault>,
    pub description: &'static str,
}

/// An environment variable a tool expects at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EnvRequirement {
    pub env_var: &'static str,
    pub description: &'static str,
}

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub id: &'static str,
    pub description: &'static str,
    pub parameters: &'static [ParamSpec],
    pub env: &'static [EnvRequirement],
}

impl ToolDescriptor {
    /// Looks up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&'static ParamSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Names of the parameters that must be supplied.
    pub fn required_parameters(&self) -> impl Iterator<Item = &'static str> {
        self.parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
    }
}

/// Which tools to collect environment requirements for.
#[derive(Debug, Clone, Copy)]
pub enum EnvScope<'a> {
    /// Every tool in registration order.
    All,
    /// A single tool.
    One(&'a str),
    /// The listed tools, in the order given.
    Many(&'a [String]),
}

/// All descriptors in registration order.
pub fn list() -> &'static [ToolDescriptor] {
    registry::TOOLS
}

/// Registered tool identifiers in registration order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    registry::TOOLS.iter().map(|t| t.id)
}

pub fn get(id: &str) -> Option<&'static ToolDescriptor> {
    registry::TOOLS.iter().find(|t| t.id == id)
}

pub fn contains(id: &str) -> bool {
    get(id).is_some()
}

/// Human-readable description of a tool, if it is registered.
pub fn describe(id: &str) -> Option<&'static str> {
    get(id).map(|t| t.description)
}

/// Collects environment requirements for the given scope.
///
/// Requirements are concatenated per tool without global deduplication, so
/// two tools sharing a variable both contribute an entry. Unknown ids
/// contribute nothing.
pub fn env_requirements(scope: EnvScope<'_>) -> Vec<EnvRequirement> {
    match scope {
        EnvScope::All => registry::TOOLS
            .iter()
            .flat_map(|t| t.env.iter().copied())
            .collect(),
        EnvScope::One(id) => get(id).map(|t| t.env.to_vec()).unwrap_or_default(),
        EnvScope::Many(ids) => ids
            .iter()
            .filter_map(|id| get(id))
            .flat_map(|t| t.env.iter().copied())
            .collect(),
    }
}

/// Resolves a loosely written tool mention to a registered id.
///
/// A candidate matches when it equals an id ignoring case, or when it is a
/// case-insensitive prefix of one. The first registered tool that matches
/// wins.
pub fn match_tool(candidate: &str) -> Option<&'static str> {
    let needle = candidate.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    registry::TOOLS
        .iter()
        .map(|t| t.id)
        .find(|id| {
            let id = id.to_lowercase();
            id == needle || id.starts_with(&needle)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_size() {
        let ids: Vec<_> = ids().collect();
        assert_eq!(ids.len(), 35);
        assert_eq!(
            &ids[..3],
            &["SerperDevTool", "SearXSearchTool", "GoogleSearchTool"]
        );
        assert_eq!(ids.last(), Some(&"YoutubeVideoSearchTool"));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = ids().collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), list().len(), "Tool ids must be unique");
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe("SerperDevTool"),
            Some("Serper.dev API for web search")
        );
        assert_eq!(describe("NoSuchTool"), None);
    }

    #[test]
    fn test_tools_with_spaces_in_ids() {
        assert!(contains("DALL-E Tool"));
        assert!(contains("Vision Tool"));
    }

    #[test]
    fn test_env_requirements_for_list_preserves_tool_order() {
        let ids = vec!["SerperDevTool".to_string(), "GoogleSearchTool".to_string()];
        let vars: Vec<_> = env_requirements(EnvScope::Many(&ids))
            .into_iter()
            .map(|r| r.env_var)
            .collect();
        assert_eq!(vars, vec!["SERPER_API_KEY", "GOOGLE_API_KEY", "GOOGLE_CSE_ID"]);
    }

    #[test]
    fn test_env_requirements_keep_duplicates_per_tool() {
        let ids = vec![
            "FirecrawlSearchTool".to_string(),
            "FirecrawlScrapeWebsiteTool".to_string(),
        ];
        let reqs = env_requirements(EnvScope::Many(&ids));
        assert_eq!(reqs.len(), 2);
        assert!(reqs.iter().all(|r| r.env_var == "FIRECRAWL_API_KEY"));
        assert_ne!(reqs[0].description, reqs[1].description);
    }

    #[test]
    fn test_env_requirements_unknown_and_empty() {
        assert!(env_requirements(EnvScope::One("NoSuchTool")).is_empty());
        assert!(env_requirements(EnvScope::One("FileReadTool")).is_empty());
        let ids = vec!["NoSuchTool".to_string()];
        assert!(env_requirements(EnvScope::Many(&ids)).is_empty());
    }

    #[test]
    fn test_env_requirements_all_is_union() {
        let total: usize = list().iter().map(|t| t.env.len()).sum();
        let all = env_requirements(EnvScope::All);
        assert_eq!(all.len(), total);
        assert_eq!(all[0].env_var, "SERPER_API_KEY");
    }

    #[test]
    fn test_match_tool_exact_and_prefix() {
        assert_eq!(match_tool("serper"), Some("SerperDevTool"));
        assert_eq!(match_tool("SerperDevTool"), Some("SerperDevTool"));
        assert_eq!(match_tool("SERPERDEV"), Some("SerperDevTool"));
        assert_eq!(match_tool("nonexistenttool"), None);
        assert_eq!(match_tool("   "), None);
    }

    #[test]
    fn test_match_tool_first_registered_wins() {
        // Both FileReadTool and FileWriteTool start with "file".
        assert_eq!(match_tool("file"), Some("FileReadTool"));
        assert_eq!(match_tool("directory"), Some("DirectorySearchTool"));
        assert_eq!(match_tool("dall-e"), Some("DALL-E Tool"));
    }

    #[test]
    fn test_descriptor_serializes_schema() {
        let tool = get("SerperDevTool").expect("registered");
        let json = serde_json::to_value(tool).expect("serialize");
        assert_eq!(json["id"], "SerperDevTool");
        assert_eq!(json["parameters"][0]["name"], "api_key");
        assert_eq!(json["parameters"][0]["type"], "str");
        assert_eq!(json["parameters"][1]["default"], "search");
        assert_eq!(json["env"][0]["env_var"], "SERPER_API_KEY");
    }

    #[test]
    fn test_required_parameters() {
        let tool = get("GoogleSearchTool").expect("registered");
        let required: Vec<_> = tool.required_parameters().collect();
        assert_eq!(required, vec!["api_key", "cse_id"]);
    }
}
