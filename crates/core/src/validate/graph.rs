use super::crew::non_empty;
use super::{
    repair_agent, replace_whitespace, resolve_agent, text_or, Names, Warnings, DEFAULT_LLM,
    DEFAULT_TASK_DESCRIPTION, UNNAMED_NODE,
};
use crate::outcome::Outcome;
use cf_protocol::agent_models::GraphAgent;
use cf_protocol::config_models::{GraphConfig, GraphDraft};
use cf_protocol::graph_models::{EdgeDraft, GraphEdge, GraphNode, NodeDraft, END_SENTINEL};

/// Validates and repairs a graph (agents, nodes and edges) configuration.
///
/// Agents and nodes follow the same rules as agents and tasks of the flat
/// variant. Agents additionally default their model to `gpt-4`. Edges whose
/// endpoints do not resolve are dropped, since there is no sensible node to
/// reassign them to.
pub fn validate_graph(draft: GraphDraft) -> Outcome<GraphConfig> {
    let mut warnings = Warnings::default();

    let agent_drafts = non_empty(draft.agents);
    if agent_drafts.is_empty() {
        warnings.push("No agents found in the configuration.".to_string());
    }
    let node_drafts = non_empty(draft.nodes);
    if node_drafts.is_empty() {
        warnings.push("No nodes found in the configuration.".to_string());
    }
    let edge_drafts = non_empty(draft.edges);
    if edge_drafts.is_empty() {
        warnings.push("No edges found in the configuration.".to_string());
    }

    let mut names = Names::default();
    let agents: Vec<GraphAgent> = agent_drafts
        .iter()
        .map(|draft| {
            let core = repair_agent(draft, &mut names, &mut warnings);
            GraphAgent {
                name: core.name,
                role: core.role,
                goal: core.goal,
                backstory: core.backstory,
                tools: core.tools,
                llm: text_or(draft.llm.as_deref(), DEFAULT_LLM),
            }
        })
        .collect();

    let agent_names: Vec<String> = agents.iter().map(|a| a.name.clone()).collect();
    let nodes = repair_nodes(&node_drafts, &agent_names, &mut warnings);
    let edges = repair_edges(&edge_drafts, &nodes, &mut warnings);

    Outcome::new(GraphConfig { agents, nodes, edges }, warnings.into_vec())
}

fn repair_nodes(drafts: &[NodeDraft], agents: &[String], warnings: &mut Warnings) -> Vec<GraphNode> {
    let mut names = Names::default();
    drafts
        .iter()
        .filter_map(|draft| {
            let name = names.claim(draft.name.as_deref(), "Node", UNNAMED_NODE, warnings);
            let agent = resolve_agent(draft.agent.as_deref(), "node", &name, agents, warnings)?;
            Some(GraphNode {
                description: text_or(draft.description.as_deref(), DEFAULT_TASK_DESCRIPTION),
                name,
                agent,
            })
        })
        .collect()
}

fn repair_edges(drafts: &[EdgeDraft], nodes: &[GraphNode], warnings: &mut Warnings) -> Vec<GraphEdge> {
    let is_node = |name: &str| nodes.iter().any(|n| n.name == name);

    drafts
        .iter()
        .enumerate()
        .filter_map(|(index, draft)| {
            let position = index + 1;
            let source = draft.source.as_deref().map(str::trim).unwrap_or_default();
            let target = draft.target.as_deref().map(str::trim).unwrap_or_default();

            if source.is_empty() || target.is_empty() {
                warnings.push(format!(
                    "Edge #{position} is missing its source or target. The edge was dropped."
                ));
                return None;
            }
            let source = follow_rename(source, "source", position, &is_node, warnings);
            let target = follow_rename(target, "target", position, &is_node, warnings);

            if !is_node(source.as_str()) {
                warnings.push(format!(
                    "Edge #{position} starts at unknown node '{source}'. The edge was dropped."
                ));
                return None;
            }
            if target != END_SENTINEL && !is_node(target.as_str()) {
                warnings.push(format!(
                    "Edge #{position} points to unknown node '{target}'. The edge was dropped."
                ));
                return None;
            }

            let condition = draft
                .condition
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string);
            Some(GraphEdge { source, target, condition })
        })
        .collect()
}

/// Points an edge endpoint at a node whose name lost its whitespace during
/// repair. Other endpoints, `END` included, are returned unchanged.
fn follow_rename(
    endpoint: &str,
    end: &str,
    position: usize,
    is_node: &impl Fn(&str) -> bool,
    warnings: &mut Warnings,
) -> String {
    if endpoint == END_SENTINEL || is_node(endpoint) {
        return endpoint.to_string();
    }
    let renamed = replace_whitespace(endpoint);
    if renamed != endpoint && is_node(renamed.as_str()) {
        warnings.push(format!(
            "Edge #{position} {end} '{endpoint}' refers to renamed node '{renamed}'."
        ));
        return renamed;
    }
    endpoint.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(json: &str) -> GraphDraft {
        serde_json::from_str(json).expect("valid draft json")
    }

    #[test]
    fn test_graph_defaults_and_edges() {
        let outcome = validate_graph(draft(
            r#"{
                "agents": [{"name": "planner", "tools": ["FileReadTool"]}],
                "nodes": [
                    {"name": "plan", "description": "Make a plan", "agent": "planner"},
                    {"name": "review"}
                ],
                "edges": [
                    {"source": "plan", "target": "review", "condition": " "},
                    {"source": "review", "target": "END", "condition": "approved"}
                ]
            }"#,
        ));
        let config = &outcome.config;
        assert_eq!(config.agents[0].llm, "gpt-4");
        assert_eq!(config.nodes[1].agent, "planner");
        assert_eq!(config.nodes[1].description, "Default task description");
        assert_eq!(config.edges.len(), 2);
        assert_eq!(config.edges[0].condition, None);
        assert!(config.edges[1].is_terminal());
        assert_eq!(
            outcome.warnings,
            vec!["No agent specified for node 'review'. Assigned the first agent 'planner'."]
        );
    }

    #[test]
    fn test_dangling_edges_are_dropped() {
        let outcome = validate_graph(draft(
            r#"{
                "agents": [{"name": "a1", "llm": "gpt-4o", "tools": ["FileReadTool"]}],
                "nodes": [{"name": "n1", "agent": "a1"}],
                "edges": [
                    {"source": "n1", "target": "nowhere"},
                    {"source": "ghost", "target": "END"},
                    {"target": "n1"},
                    {"source": "n1", "target": "END"}
                ]
            }"#,
        ));
        assert_eq!(outcome.config.agents[0].llm, "gpt-4o");
        assert_eq!(outcome.config.edges, vec![GraphEdge::new("n1", "END")]);
        assert_eq!(outcome.warnings.len(), 3);
        assert!(outcome.warnings[0].contains("'nowhere'"));
        assert!(outcome.warnings[1].contains("'ghost'"));
        assert!(outcome.warnings[2].starts_with("Edge #3"));
    }

    #[test]
    fn test_edges_follow_renamed_nodes() {
        let outcome = validate_graph(draft(
            r#"{
                "agents": [{"name": "a1", "tools": ["FileReadTool"]}],
                "nodes": [
                    {"name": "Plan Step", "agent": "a1"},
                    {"name": "Write Step", "agent": "a1"}
                ],
                "edges": [
                    {"source": "Plan Step", "target": "Write Step"},
                    {"source": "Write Step", "target": "END"}
                ]
            }"#,
        ));
        assert_eq!(
            outcome.config.edges,
            vec![
                GraphEdge::new("Plan_Step", "Write_Step"),
                GraphEdge::new("Write_Step", "END"),
            ]
        );
        assert_eq!(
            outcome.warnings,
            vec![
                "Node name 'Plan Step' contains spaces. Renamed to 'Plan_Step'.",
                "Node name 'Write Step' contains spaces. Renamed to 'Write_Step'.",
                "Edge #1 source 'Plan Step' refers to renamed node 'Plan_Step'.",
                "Edge #1 target 'Write Step' refers to renamed node 'Write_Step'.",
                "Edge #2 source 'Write Step' refers to renamed node 'Write_Step'.",
            ]
        );
    }

    #[test]
    fn test_missing_lists_warn_in_order() {
        let outcome = validate_graph(GraphDraft::default());
        assert_eq!(
            outcome.warnings,
            vec![
                "No agents found in the configuration.",
                "No nodes found in the configuration.",
                "No edges found in the configuration."
            ]
        );
    }

    #[test]
    fn test_edges_to_dropped_nodes_are_dropped() {
        let outcome = validate_graph(draft(
            r#"{
                "nodes": [{"name": "orphan"}],
                "edges": [{"source": "orphan", "target": "END"}]
            }"#,
        ));
        assert!(outcome.config.nodes.is_empty());
        assert!(outcome.config.edges.is_empty());
        assert_eq!(outcome.warnings.len(), 3);
    }
}
