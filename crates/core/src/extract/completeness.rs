use super::blocks::cached;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static AGENTS: OnceLock<Option<Regex>> = OnceLock::new();
static TASKS: OnceLock<Option<Regex>> = OnceLock::new();
static TOOLS: OnceLock<Option<Regex>> = OnceLock::new();
static ROLE: OnceLock<Option<Regex>> = OnceLock::new();
static GOAL: OnceLock<Option<Regex>> = OnceLock::new();
static DESCRIPTION: OnceLock<Option<Regex>> = OnceLock::new();

/// What a free-text prompt mentions, and what it seems to be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Completeness {
    pub has_agents: bool,
    pub has_tasks: bool,
    pub has_tools: bool,
    /// Human-readable names of missing details, e.g. "Agent roles".
    pub missing_fields: Vec<String>,
}

impl Completeness {
    pub fn is_complete(&self) -> bool {
        self.has_agents && self.has_tasks && self.missing_fields.is_empty()
    }
}

/// Checks a prompt for the keywords the pattern extractor relies on.
pub fn analyze_completeness(text: &str) -> Completeness {
    let mentions = |cell: &'static OnceLock<Option<Regex>>, pattern: &str| {
        cached(cell, pattern).is_some_and(|re| re.is_match(text))
    };

    let mut result = Completeness {
        has_agents: mentions(&AGENTS, r"(?i)\bagents?[\s:]+"),
        has_tasks: mentions(&TASKS, r"(?i)\btasks?[\s:]+"),
        has_tools: mentions(&TOOLS, r"(?i)\btools?[\s:]+"),
        missing_fields: Vec::new(),
    };

    if result.has_agents && !mentions(&ROLE, r"(?i)\brole[\s:]+") {
        result.missing_fields.push("Agent roles".to_string());
    }
    if result.has_agents && !mentions(&GOAL, r"(?i)\bgoal[\s:]+") {
        result.missing_fields.push("Agent goals".to_string());
    }
    if result.has_tasks && !mentions(&DESCRIPTION, r"(?i)\bdescription[\s:]+") {
        result.missing_fields.push("Task descriptions".to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_prompt() {
        let result = analyze_completeness(
            "Agent: role: Analyst goal: Analyze tools: serper\nTask: description: Report",
        );
        assert!(result.has_agents && result.has_tasks && result.has_tools);
        assert!(result.missing_fields.is_empty());
        assert!(result.is_complete());
    }

    #[test]
    fn test_missing_fields_reported() {
        let result = analyze_completeness("Two agents and a task please");
        assert!(result.has_agents);
        assert!(result.has_tasks);
        assert!(!result.has_tools);
        assert_eq!(
            result.missing_fields,
            vec!["Agent roles", "Agent goals", "Task descriptions"]
        );
    }

    #[test]
    fn test_nothing_mentioned() {
        let result = analyze_completeness("hello");
        assert_eq!(result, Completeness::default());
        assert!(!result.is_complete());
    }
}
