use super::{
    repair_agent, resolve_agent, text_or, Names, Warnings, DEFAULT_EXPECTED_OUTPUT,
    DEFAULT_TASK_DESCRIPTION, UNNAMED_TASK,
};
use crate::outcome::Outcome;
use cf_protocol::agent_models::{AgentDraft, CrewAgent};
use cf_protocol::config_models::{CrewConfig, CrewDraft};
use cf_protocol::task_models::{CrewTask, TaskDraft};

/// Validates and repairs a flat (agents and tasks) configuration.
///
/// # Example
///
/// ```rust
/// use cf_core::validate::validate_crew;
/// use cf_protocol::config_models::CrewDraft;
///
/// let draft: CrewDraft = serde_json::from_str(
///     r#"{"agents": [{"name": "Lead Writer", "tools": ["FileReadTool"]}],
///         "tasks": [{"name": "draft"}]}"#,
/// ).unwrap();
///
/// let outcome = validate_crew(draft);
/// assert_eq!(outcome.config.agents[0].name, "Lead_Writer");
/// assert_eq!(outcome.config.tasks[0].agent, "Lead_Writer");
/// assert_eq!(outcome.warnings.len(), 2);
/// ```
pub fn validate_crew(draft: CrewDraft) -> Outcome<CrewConfig> {
    let mut warnings = Warnings::default();

    let agent_drafts = non_empty(draft.agents);
    if agent_drafts.is_empty() {
        warnings.push("No agents found in the configuration.".to_string());
    }
    let task_drafts = non_empty(draft.tasks);
    if task_drafts.is_empty() {
        warnings.push("No tasks found in the configuration.".to_string());
    }

    let agents = repair_agents(&agent_drafts, &mut warnings);
    let agent_names: Vec<String> = agents.iter().map(|a| a.name.clone()).collect();
    let tasks = repair_tasks(&task_drafts, &agent_names, &mut warnings);

    Outcome::new(CrewConfig { agents, tasks }, warnings.into_vec())
}

fn repair_agents(drafts: &[AgentDraft], warnings: &mut Warnings) -> Vec<CrewAgent> {
    let mut names = Names::default();
    drafts
        .iter()
        .map(|draft| {
            let core = repair_agent(draft, &mut names, warnings);
            CrewAgent {
                name: core.name,
                role: core.role,
                goal: core.goal,
                backstory: core.backstory,
                verbose: draft.verbose.unwrap_or(true),
                allow_delegation: draft.allow_delegation.unwrap_or(false),
                tools: core.tools,
            }
        })
        .collect()
}

fn repair_tasks(drafts: &[TaskDraft], agents: &[String], warnings: &mut Warnings) -> Vec<CrewTask> {
    let mut names = Names::default();
    drafts
        .iter()
        .filter_map(|draft| {
            let name = names.claim(draft.name.as_deref(), "Task", UNNAMED_TASK, warnings);
            let agent = resolve_agent(draft.agent.as_deref(), "task", &name, agents, warnings)?;
            Some(CrewTask {
                description: text_or(draft.description.as_deref(), DEFAULT_TASK_DESCRIPTION),
                expected_output: text_or(draft.expected_output.as_deref(), DEFAULT_EXPECTED_OUTPUT),
                name,
                agent,
            })
        })
        .collect()
}

/// Re-points kept tasks at a replaced agent list.
///
/// Tasks whose agent still exists are returned untouched; the rest are
/// reassigned or dropped exactly as during validation.
pub fn relink_tasks(tasks: Vec<CrewTask>, agents: &[CrewAgent]) -> Outcome<Vec<CrewTask>> {
    let mut warnings = Warnings::default();
    let agent_names: Vec<String> = agents.iter().map(|a| a.name.clone()).collect();
    let tasks = tasks
        .into_iter()
        .filter_map(|task| {
            let agent = resolve_agent(
                Some(task.agent.as_str()),
                "task",
                &task.name,
                &agent_names,
                &mut warnings,
            )?;
            Some(CrewTask { agent, ..task })
        })
        .collect();
    Outcome::new(tasks, warnings.into_vec())
}

pub(super) fn non_empty<T>(list: Option<Vec<T>>) -> Vec<T> {
    list.unwrap_or_default()
}
