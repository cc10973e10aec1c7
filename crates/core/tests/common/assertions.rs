//! Invariant assertions for validated configurations.

use cf_protocol::config_models::{CrewConfig, GraphConfig};
use std::collections::HashSet;

fn assert_identifier(kind: &str, name: &str) {
    assert!(!name.is_empty(), "{kind} identifier is empty");
    assert!(
        !name.chars().any(char::is_whitespace),
        "{kind} identifier '{name}' contains whitespace"
    );
}

fn assert_unique<'a>(kind: &str, names: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for name in names {
        assert!(seen.insert(name), "duplicate {kind} identifier '{name}'");
    }
}

/// Every identifier is non-empty, unique and whitespace-free, and every task
/// points at an agent of the same configuration.
#[allow(dead_code)]
pub fn assert_crew_invariants(config: &CrewConfig) {
    for agent in &config.agents {
        assert_identifier("agent", &agent.name);
        for tool in &agent.tools {
            assert!(
                cf_core::catalog::contains(tool),
                "agent '{}' references unknown tool '{tool}'",
                agent.name
            );
        }
    }
    for task in &config.tasks {
        assert_identifier("task", &task.name);
        assert!(
            config.agent(&task.agent).is_some(),
            "task '{}' points at missing agent '{}'",
            task.name,
            task.agent
        );
    }
    assert_unique("agent", config.agents.iter().map(|a| a.name.as_str()));
    assert_unique("task", config.tasks.iter().map(|t| t.name.as_str()));
}

/// Graph counterpart of [`assert_crew_invariants`], plus: every edge starts
/// at a node and ends at a node or `END`.
#[allow(dead_code)]
pub fn assert_graph_invariants(config: &GraphConfig) {
    let agents: HashSet<&str> = config.agents.iter().map(|a| a.name.as_str()).collect();
    let nodes: HashSet<&str> = config.nodes.iter().map(|n| n.name.as_str()).collect();

    for agent in &config.agents {
        assert_identifier("agent", &agent.name);
    }
    for node in &config.nodes {
        assert_identifier("node", &node.name);
        assert!(
            agents.contains(node.agent.as_str()),
            "node '{}' points at missing agent '{}'",
            node.name,
            node.agent
        );
    }
    for edge in &config.edges {
        assert!(
            nodes.contains(edge.source.as_str()),
            "edge starts at unknown node '{}'",
            edge.source
        );
        assert!(
            edge.is_terminal() || nodes.contains(edge.target.as_str()),
            "edge points at unknown node '{}'",
            edge.target
        );
    }
    assert_unique("agent", config.agents.iter().map(|a| a.name.as_str()));
    assert_unique("node", config.nodes.iter().map(|n| n.name.as_str()));
}
