//! Configuration validator and normalizer.
//!
//! Turns a loose draft into a configuration that satisfies the reference
//! invariants: identifiers are present, unique and free of whitespace, every
//! task or node points at a live agent, every edge connects live nodes (or
//! ends the graph), and agents only reference catalog tools.
//!
//! Validation never fails. Each repair is reported as a warning, in the order
//! the repairs were made:
//!
//! 1. missing `agents` list
//! 2. missing `tasks` (or `nodes` and `edges`) list
//! 3. agent repairs, in input order
//! 4. task or node repairs, in input order
//! 5. edge repairs (graph variant)

mod crew;
mod graph;

pub use crew::{relink_tasks, validate_crew};
pub use graph::validate_graph;

use crate::catalog;
use cf_protocol::agent_models::AgentDraft;
use std::collections::HashSet;
use tracing::debug;

pub const UNNAMED_AGENT: &str = "unnamed_agent";
pub const UNNAMED_TASK: &str = "unnamed_task";
pub const UNNAMED_NODE: &str = "unnamed_node";

pub const DEFAULT_ROLE: &str = "Default Role";
pub const DEFAULT_GOAL: &str = "Default Goal";
pub const DEFAULT_TASK_DESCRIPTION: &str = "Default task description";
pub const DEFAULT_EXPECTED_OUTPUT: &str = "Task completion report";
pub const DEFAULT_LLM: &str = "gpt-4";

/// Ordered warning sink shared by the repair passes.
#[derive(Debug, Default)]
pub(crate) struct Warnings(Vec<String>);

impl Warnings {
    pub(crate) fn push(&mut self, message: String) {
        debug!(warning = %message, "configuration repaired");
        self.0.push(message);
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Hands out unique identifiers within one list.
#[derive(Debug, Default)]
pub(crate) struct Names {
    taken: HashSet<String>,
}

impl Names {
    /// Repairs `raw` into a unique identifier without whitespace.
    ///
    /// `kind` is the capitalised entity name used in warnings ("Agent",
    /// "Task", "Node").
    pub(crate) fn claim(
        &mut self,
        raw: Option<&str>,
        kind: &str,
        placeholder: &str,
        warnings: &mut Warnings,
    ) -> String {
        let trimmed = raw.map(str::trim).unwrap_or_default();

        let mut name = if trimmed.is_empty() {
            warnings.push(format!(
                "Found an unnamed {}. It was named '{placeholder}'.",
                kind.to_lowercase()
            ));
            placeholder.to_string()
        } else {
            trimmed.to_string()
        };

        if name.chars().any(char::is_whitespace) {
            let fixed = replace_whitespace(&name);
            warnings.push(format!(
                "{kind} name '{name}' contains spaces. Renamed to '{fixed}'."
            ));
            name = fixed;
        }

        if self.taken.contains(&name) {
            let unique = (2..)
                .map(|n| format!("{name}_{n}"))
                .find(|candidate| !self.taken.contains(candidate))
                .unwrap_or_else(|| name.clone());
            warnings.push(format!(
                "Duplicate {} name '{name}'. Renamed to '{unique}'.",
                kind.to_lowercase()
            ));
            name = unique;
        }

        self.taken.insert(name.clone());
        name
    }
}

/// Replaces every whitespace character with an underscore.
pub fn replace_whitespace(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Fields shared by both agent variants after repair.
pub(crate) struct AgentCore {
    pub name: String,
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub tools: Vec<String>,
}

pub(crate) fn repair_agent(
    draft: &AgentDraft,
    names: &mut Names,
    warnings: &mut Warnings,
) -> AgentCore {
    let name = names.claim(draft.name.as_deref(), "Agent", UNNAMED_AGENT, warnings);
    let tools = repair_tools(draft.tools.as_deref(), &name, warnings);
    AgentCore {
        role: text_or(draft.role.as_deref(), DEFAULT_ROLE),
        goal: text_or(draft.goal.as_deref(), DEFAULT_GOAL),
        backstory: draft.backstory.clone().unwrap_or_default(),
        name,
        tools,
    }
}

/// Keeps catalog tools, once each, in their original order.
fn repair_tools(tools: Option<&[String]>, agent: &str, warnings: &mut Warnings) -> Vec<String> {
    let requested: Vec<&str> = tools
        .unwrap_or_default()
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();

    if requested.is_empty() {
        warnings.push(format!("No tools defined for agent '{agent}'."));
        return Vec::new();
    }

    let mut kept: Vec<String> = Vec::new();
    for tool in requested {
        if !catalog::contains(tool) {
            warnings.push(format!(
                "Unknown tool '{tool}' defined for agent '{agent}'. It will be skipped."
            ));
        } else if !kept.iter().any(|k| k == tool) {
            kept.push(tool.to_string());
        }
    }
    kept
}

/// Resolves the agent a task or node is assigned to.
///
/// Returns `None` when the entity cannot be assigned and must be dropped.
pub(crate) fn resolve_agent(
    reference: Option<&str>,
    owner_kind: &str,
    owner: &str,
    agents: &[String],
    warnings: &mut Warnings,
) -> Option<String> {
    let reference = reference.map(str::trim).filter(|r| !r.is_empty());
    let first = agents.first();

    match (reference, first) {
        (Some(r), _) if agents.iter().any(|a| a == r) => Some(r.to_string()),
        (None, Some(first)) => {
            warnings.push(format!(
                "No agent specified for {owner_kind} '{owner}'. Assigned the first agent '{first}'."
            ));
            Some(first.clone())
        }
        (None, None) => {
            warnings.push(format!(
                "No agent specified for {owner_kind} '{owner}' and the configuration has no agents. The {owner_kind} was dropped."
            ));
            None
        }
        (Some(r), Some(first)) => {
            warnings.push(format!(
                "Agent '{r}' defined for {owner_kind} '{owner}' was not found. Reassigned to '{first}'."
            ));
            Some(first.clone())
        }
        (Some(r), None) => {
            warnings.push(format!(
                "Agent '{r}' defined for {owner_kind} '{owner}' was not found and the configuration has no agents. The {owner_kind} was dropped."
            ));
            None
        }
    }
}

pub(crate) fn text_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
