//! Test fixtures: sample drafts, prompts and settings directories.

use cf_protocol::config_models::{CrewDraft, GraphDraft};
use tempfile::TempDir;

/// Drafts that exercise every repair the validator knows, plus distinct
/// names that sanitize to the same Python identifier.
#[allow(dead_code)]
pub fn messy_crew_drafts() -> Vec<CrewDraft> {
    [
        r#"{}"#,
        r#"{"agents": [], "tasks": []}"#,
        r#"{"agents": [{"name": "Lead Writer"}, {"name": "Lead  Writer"}, {}],
            "tasks": [{"name": "first draft", "agent": "Lead Writer"}, {"agent": "nobody"}]}"#,
        r#"{"agents": [{"name": "a1", "tools": ["SerperDevTool", "NotATool", "SerperDevTool"]}],
            "tasks": [{"name": "t1"}, {"name": "t1"}, {"name": "t 2", "agent": "a1"}]}"#,
        r#"{"tasks": [{"name": "orphan", "agent": "ghost"}]}"#,
        r#"{"agents": [{"name": "\tspaced\nout ", "role": "  ", "goal": null}],
            "tasks": [{"name": "x", "agent": "\tspaced\nout "}]}"#,
        r#"{"agents": [{"name": "a-1", "tools": ["FileReadTool"]}, {"name": "a_1", "tools": ["FileReadTool"]},
                       {"name": "é1"}, {"name": "è1"}],
            "tasks": [{"name": "t-1", "agent": "a_1"}, {"name": "t_1", "agent": "è1"}]}"#,
    ]
    .iter()
    .map(|json| serde_json::from_str(json).expect("fixture draft is valid JSON"))
    .collect()
}

/// A graph draft with a dangling edge, a terminal edge, an unnamed node, an
/// edge naming a node before its whitespace repair, and agents whose names
/// sanitize to the same Python identifier.
#[allow(dead_code)]
pub fn messy_graph_draft() -> GraphDraft {
    serde_json::from_str(
        r#"{
            "agents": [{"name": "planner", "tools": ["SerperDevTool"]},
                       {"name": "coder", "llm": "gpt-4o", "tools": ["FileReadTool"]},
                       {"name": "re-viewer", "tools": ["FileReadTool"]},
                       {"name": "re_viewer", "tools": ["FileReadTool"]}],
            "nodes": [{"name": "plan", "description": "Plan", "agent": "planner"},
                      {"name": "write code", "agent": "coder"},
                      {"description": "No name"}],
            "edges": [{"source": "plan", "target": "write code", "condition": " "},
                      {"source": "write_code", "target": "END"},
                      {"source": "plan", "target": "nowhere"},
                      {"target": "plan"}]
        }"#,
    )
    .expect("fixture draft is valid JSON")
}

/// A prompt in the delimited-block format.
#[allow(dead_code)]
pub const RESEARCH_PROMPT: &str = "\
Agent: name: researcher role: Research Specialist goal: Find recent sources tools: serper, ScrapeWebsite
Agent: name: writer role: Technical Writer goal: Turn notes into a report tools: FileReadTool
Task: name: gather description: Collect recent papers expected_output: A list of links agent: researcher
Task: name: report description: Write the summary expected_output: A Markdown report agent: Technical Writer
";

/// A JSON reply a chat model might send for the research prompt.
#[allow(dead_code)]
pub const MODEL_REPLY: &str = r#"Sure! Here is the configuration:

```json
{
  "agents": [
    {"name": "researcher", "role": "Research Specialist", "goal": "Find sources",
     "backstory": "Ten years of desk research", "tools": ["SerperDevTool", "ScrapeWebsiteTool"]},
    {"name": "writer", "role": "Technical Writer", "goal": "Write the report", "tools": ["FileReadTool"]}
  ],
  "tasks": [
    {"name": "gather", "description": "Collect recent papers", "expected_output": "Links", "agent": "researcher"},
    {"name": "report", "description": "Write the summary", "expected_output": "Report", "agent": "writer"}
  ]
}
```"#;

/// Create a temporary project with a `.crewforge/config.toml`.
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project(config_toml: &str) -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let cf_dir = temp_dir.path().join(".crewforge");
    std::fs::create_dir_all(cf_dir.join("prompts"))?;
    std::fs::write(cf_dir.join("config.toml"), config_toml)?;
    Ok(temp_dir)
}
