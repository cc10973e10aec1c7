//! System instruction assembly.

use crate::catalog;
use cf_protocol::config_models::{CrewConfig, UpdateScope};

/// `- <id>: <description>` for every catalog tool, in registry order.
pub fn tool_lines() -> String {
    catalog::list()
        .iter()
        .map(|tool| format!("- {}: {}", tool.id, tool.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn scope_instruction(scope: UpdateScope) -> &'static str {
    match scope {
        UpdateScope::Agents => "Update only the agents; keep the tasks unchanged.",
        UpdateScope::Tasks => "Update only the tasks; keep the agents unchanged.",
        UpdateScope::All => "Update both the agents and the tasks.",
    }
}

/// Build the system instruction from a framework prompt body.
///
/// With a non-empty `existing` configuration, a summary of it and the scope
/// instruction are appended after the tool list.
pub fn system_instruction(
    prompt_body: &str,
    existing: Option<&CrewConfig>,
    scope: UpdateScope,
) -> String {
    let mut message = format!("{}\n{}", prompt_body.trim_end(), tool_lines());

    let Some(existing) = existing.filter(|config| !config.is_empty()) else {
        return message;
    };

    message.push_str("\n\nCurrent configuration:\n");
    if !existing.agents.is_empty() {
        message.push_str("Agents:\n");
        for agent in &existing.agents {
            message.push_str(&format!("- {}: {}\n", agent.role, agent.goal));
        }
    }
    if !existing.tasks.is_empty() {
        message.push_str("\nTasks:\n");
        for task in &existing.tasks {
            message.push_str(&format!("- {}: {}\n", task.name, task.description));
        }
    }
    message.push('\n');
    message.push_str(scope_instruction(scope));
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_protocol::agent_models::CrewAgent;
    use cf_protocol::task_models::CrewTask;

    fn existing() -> CrewConfig {
        CrewConfig {
            agents: vec![CrewAgent::new("analyst", "Analyst", "Analyse incidents")],
            tasks: vec![CrewTask::new("triage", "Triage the alert", "Report", "analyst")],
        }
    }

    #[test]
    fn test_tool_lines_cover_catalog() {
        let lines = tool_lines();
        assert_eq!(lines.lines().count(), catalog::list().len());
        assert!(lines.starts_with("- "));
        assert!(lines.contains("- SerperDevTool: "));
    }

    #[test]
    fn test_instruction_without_existing_config() {
        let message = system_instruction("Design a crew.\n\nAvailable tools:\n", None, UpdateScope::All);
        assert!(message.starts_with("Design a crew.\n\nAvailable tools:\n- "));
        assert!(!message.contains("Current configuration"));
    }

    #[test]
    fn test_instruction_summarises_existing_config() {
        let config = existing();
        let message = system_instruction("Prompt", Some(&config), UpdateScope::Agents);

        assert!(message.contains("Current configuration:\nAgents:\n- Analyst: Analyse incidents\n"));
        assert!(message.contains("\nTasks:\n- triage: Triage the alert\n"));
        assert!(message.ends_with("Update only the agents; keep the tasks unchanged."));
    }

    #[test]
    fn test_summary_lists_every_entry_on_its_own_line() {
        let mut config = existing();
        config.agents.push(CrewAgent::new("writer", "Writer", "Write the report"));
        let message = system_instruction("P", Some(&config), UpdateScope::All);

        let summary = message
            .split_once("Current configuration:\n")
            .map(|(_, rest)| rest)
            .expect("summary present");
        assert_eq!(
            summary,
            "Agents:\n- Analyst: Analyse incidents\n- Writer: Write the report\n\
             \nTasks:\n- triage: Triage the alert\n\
             \nUpdate both the agents and the tasks."
        );
    }

    #[test]
    fn test_scope_instructions() {
        let config = existing();
        let tasks = system_instruction("P", Some(&config), UpdateScope::Tasks);
        assert!(tasks.ends_with("Update only the tasks; keep the agents unchanged."));
        let all = system_instruction("P", Some(&config), UpdateScope::All);
        assert!(all.ends_with("Update both the agents and the tasks."));
    }

    #[test]
    fn test_empty_existing_config_is_ignored() {
        let empty = CrewConfig::default();
        let message = system_instruction("P", Some(&empty), UpdateScope::Tasks);
        assert!(!message.contains("Current configuration"));
    }
}
