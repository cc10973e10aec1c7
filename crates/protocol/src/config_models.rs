//! Whole-configuration records.
//!
//! A configuration is either flat (`{agents, tasks}`, rendered for CrewAI) or
//! a graph (`{agents, nodes, edges}`, rendered for LangGraph). Both exist as
//! a loose draft and as a validated value object.

use crate::agent_models::{AgentDraft, CrewAgent, GraphAgent};
use crate::graph_models::{EdgeDraft, GraphEdge, GraphNode, NodeDraft};
use crate::task_models::{CrewTask, TaskDraft};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Loose flat configuration. A missing key is `None`, not an empty list.
///
/// # Example
///
/// ```json
/// {
///   "agents": [{"name": "writer", "role": "Writer", "goal": "Write"}],
///   "tasks": [{"name": "draft", "description": "Write a draft", "agent": "writer"}]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CrewDraft {
    #[serde(default)]
    pub agents: Option<Vec<AgentDraft>>,

    #[serde(default)]
    pub tasks: Option<Vec<TaskDraft>>,
}

/// Loose graph configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GraphDraft {
    #[serde(default)]
    pub agents: Option<Vec<AgentDraft>>,

    #[serde(default)]
    pub nodes: Option<Vec<NodeDraft>>,

    #[serde(default)]
    pub edges: Option<Vec<EdgeDraft>>,
}

/// Validated flat configuration.
///
/// Every task's `agent` names an agent of `agents`, and no identifier
/// contains whitespace.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct CrewConfig {
    #[serde(default)]
    pub agents: Vec<CrewAgent>,

    #[serde(default)]
    pub tasks: Vec<CrewTask>,
}

impl CrewConfig {
    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty() && self.tasks.is_empty()
    }

    /// Look up an agent by its identifier.
    pub fn agent(&self, name: &str) -> Option<&CrewAgent> {
        self.agents.iter().find(|agent| agent.name == name)
    }

    /// Distinct tool identifiers used by any agent, in first-use order.
    pub fn used_tools(&self) -> Vec<String> {
        let mut tools: Vec<String> = Vec::new();
        for tool in self.agents.iter().flat_map(|agent| agent.tools.iter()) {
            if !tools.contains(tool) {
                tools.push(tool.clone());
            }
        }
        tools
    }
}

/// Validated graph configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct GraphConfig {
    #[serde(default)]
    pub agents: Vec<GraphAgent>,

    #[serde(default)]
    pub nodes: Vec<GraphNode>,

    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl GraphConfig {
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty() && self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Distinct tool identifiers used by any agent, in first-use order.
    pub fn used_tools(&self) -> Vec<String> {
        let mut tools: Vec<String> = Vec::new();
        for tool in self.agents.iter().flat_map(|agent| agent.tools.iter()) {
            if !tools.contains(tool) {
                tools.push(tool.clone());
            }
        }
        tools
    }
}

impl From<CrewConfig> for CrewDraft {
    fn from(config: CrewConfig) -> Self {
        Self {
            agents: Some(config.agents.into_iter().map(AgentDraft::from).collect()),
            tasks: Some(config.tasks.into_iter().map(TaskDraft::from).collect()),
        }
    }
}

/// Which part of an existing configuration a regeneration may change.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum UpdateScope {
    /// Regenerate agents and tasks.
    #[default]
    All,

    /// Regenerate agents only; existing tasks are kept verbatim.
    Agents,

    /// Regenerate tasks only; existing agents are kept verbatim.
    Tasks,
}

impl UpdateScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Agents => "agents",
            Self::Tasks => "tasks",
        }
    }
}

impl fmt::Display for UpdateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "agents" => Ok(Self::Agents),
            "tasks" => Ok(Self::Tasks),
            other => Err(format!("unknown update scope '{other}'")),
        }
    }
}

/// Target orchestration framework of the generated source.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Flat agents + tasks, rendered as a CrewAI crew.
    CrewAi,

    /// Agents + nodes + edges, rendered as a LangGraph state graph.
    LangGraph,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrewAi => "crewai",
            Self::LangGraph => "langgraph",
        }
    }

    /// Human-readable framework name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CrewAi => "CrewAI",
            Self::LangGraph => "LangGraph",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crewai" | "crew" => Ok(Self::CrewAi),
            "langgraph" | "graph" => Ok(Self::LangGraph),
            other => Err(format!("unknown framework '{other}'")),
        }
    }
}
