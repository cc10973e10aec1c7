//! Node and edge models for the graph (LangGraph) variant.

use crate::lenient;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Edge target meaning "stop graph execution here".
pub const END_SENTINEL: &str = "END";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeDraft {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub agent: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeDraft {
    #[serde(default, deserialize_with = "lenient::text")]
    pub source: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub target: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub condition: Option<String>,
}

/// A graph node run by one agent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct GraphNode {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Name of the agent whose function handles this node.
    pub agent: String,
}

impl GraphNode {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        agent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            agent: agent.into(),
        }
    }
}

/// A directed transition between nodes.
///
/// `target` is either a node name or [`END_SENTINEL`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct GraphEdge {
    pub source: String,

    pub target: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub condition: Option<String>,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Whether this edge terminates the graph.
    pub fn is_terminal(&self) -> bool {
        self.target == END_SENTINEL
    }
}
