//! Natural-language extractor.
//!
//! A deliberately simple heuristic: the text is cut into blocks at `Agent:`
//! and `Task:` markers, and each block is searched for labelled fields such
//! as `name:`, `role:` or `description:`. Anything the heuristic cannot find
//! takes a documented default.
//!
//! ```text
//! Agent: name: researcher role: Research Specialist goal: Find sources tools: serper
//! Task: name: gather description: Collect recent papers agent: researcher
//! ```

mod blocks;
mod completeness;

pub use completeness::{analyze_completeness, Completeness};

use crate::catalog;
use crate::outcome::Outcome;
use crate::validate::{
    replace_whitespace, Names, Warnings, DEFAULT_EXPECTED_OUTPUT, DEFAULT_GOAL, DEFAULT_ROLE,
    DEFAULT_TASK_DESCRIPTION,
};
use blocks::{field, split_blocks, Block, BlockKind, Field};
use cf_protocol::agent_models::CrewAgent;
use cf_protocol::config_models::CrewConfig;
use cf_protocol::task_models::CrewTask;
use tracing::info;

/// Extracts a flat configuration from free text.
///
/// Agents are built first, then tasks, so a task may reference an agent
/// declared later in the text.
pub fn extract_crew(text: &str) -> Outcome<CrewConfig> {
    let mut warnings = Warnings::default();
    let blocks = split_blocks(text);

    let agent_blocks: Vec<&Block> = blocks.iter().filter(|b| b.kind == BlockKind::Agent).collect();
    let task_blocks: Vec<&Block> = blocks.iter().filter(|b| b.kind == BlockKind::Task).collect();

    if agent_blocks.is_empty() {
        warnings.push("No agents could be identified in your prompt.".to_string());
    }

    let mut agent_names = Names::default();
    let agents: Vec<CrewAgent> = agent_blocks
        .iter()
        .enumerate()
        .map(|(i, block)| extract_agent(&block.body, i + 1, &mut agent_names, &mut warnings))
        .collect();

    if task_blocks.is_empty() && !agents.is_empty() {
        warnings.push("No tasks could be identified. At least one task is recommended.".to_string());
    }

    let mut task_names = Names::default();
    let tasks: Vec<CrewTask> = task_blocks
        .iter()
        .enumerate()
        .filter_map(|(i, block)| {
            extract_task(&block.body, i + 1, &agents, &mut task_names, &mut warnings)
        })
        .collect();

    info!(
        agents = agents.len(),
        tasks = tasks.len(),
        "extracted configuration from text"
    );

    Outcome::new(CrewConfig { agents, tasks }, warnings.into_vec())
}

fn extract_agent(body: &str, position: usize, names: &mut Names, warnings: &mut Warnings) -> CrewAgent {
    let raw_name = field(body, Field::Name)
        .map(|n| replace_whitespace(&n))
        .unwrap_or_else(|| format!("agent_{position}"));
    let name = names.claim(Some(&raw_name), "Agent", &raw_name, warnings);

    let tools = field(body, Field::Tools)
        .map(|text| match_tools(&text, &name, warnings))
        .unwrap_or_default();

    CrewAgent {
        role: field(body, Field::Role).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        goal: field(body, Field::Goal).unwrap_or_else(|| DEFAULT_GOAL.to_string()),
        backstory: field(body, Field::Backstory).unwrap_or_default(),
        verbose: true,
        allow_delegation: false,
        name,
        tools,
    }
}

fn extract_task(
    body: &str,
    position: usize,
    agents: &[CrewAgent],
    names: &mut Names,
    warnings: &mut Warnings,
) -> Option<CrewTask> {
    let raw_name = field(body, Field::Name)
        .map(|n| replace_whitespace(&n))
        .unwrap_or_else(|| format!("task_{position}"));
    let name = names.claim(Some(&raw_name), "Task", &raw_name, warnings);

    let Some(agent) = assign_agent(field(body, Field::Agent).as_deref(), agents) else {
        warnings.push(format!(
            "Could not assign task '{name}' to an agent. No agents available."
        ));
        return None;
    };

    Some(CrewTask {
        description: field(body, Field::Description)
            .unwrap_or_else(|| DEFAULT_TASK_DESCRIPTION.to_string()),
        expected_output: field(body, Field::ExpectedOutput)
            .unwrap_or_else(|| DEFAULT_EXPECTED_OUTPUT.to_string()),
        name,
        agent,
    })
}

/// Splits a tool list and resolves each mention against the catalog.
fn match_tools(text: &str, agent: &str, warnings: &mut Warnings) -> Vec<String> {
    let mut tools: Vec<String> = Vec::new();
    for token in text.split([',', ';']).map(str::trim).filter(|t| !t.is_empty()) {
        match catalog::match_tool(token) {
            Some(id) => {
                if !tools.iter().any(|t| t == id) {
                    tools.push(id.to_string());
                }
            }
            None => warnings.push(format!(
                "Unknown tool '{token}' for agent '{agent}'. Ignoring."
            )),
        }
    }
    tools
}

/// Name match first, then role match, then the first agent.
fn assign_agent(reference: Option<&str>, agents: &[CrewAgent]) -> Option<String> {
    let first = agents.first()?;
    let Some(reference) = reference else {
        return Some(first.name.clone());
    };

    let as_name = replace_whitespace(reference);
    agents
        .iter()
        .find(|a| a.name.eq_ignore_ascii_case(&as_name))
        .or_else(|| agents.iter().find(|a| a.role.eq_ignore_ascii_case(reference)))
        .or(Some(first))
        .map(|a| a.name.clone())
}
