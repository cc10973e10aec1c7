//! Agent models for both configuration variants.
//!
//! An agent arrives as an [`AgentDraft`] (every field optional, scalar types
//! tolerated) and leaves validation as a [`CrewAgent`] or a [`GraphAgent`].

use crate::lenient;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Loose agent record as submitted by a form or produced by a language model.
///
/// # Example
///
/// ```json
/// {
///   "name": "researcher",
///   "role": "Research Specialist",
///   "goal": "Find recent papers",
///   "tools": ["SerperDevTool"],
///   "allow_delegation": "false"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AgentDraft {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub role: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub goal: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub backstory: Option<String>,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub verbose: Option<bool>,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub allow_delegation: Option<bool>,

    /// Tool identifiers; a single comma separated string is accepted too.
    #[serde(default, deserialize_with = "lenient::list")]
    pub tools: Option<Vec<String>>,

    /// Language model identifier (graph variant only).
    #[serde(default, deserialize_with = "lenient::text")]
    pub llm: Option<String>,
}

/// Validated agent of the flat (CrewAI) variant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct CrewAgent {
    /// Unique identifier without whitespace; becomes part of generated variable names.
    pub name: String,

    pub role: String,

    pub goal: String,

    #[serde(default)]
    pub backstory: String,

    #[serde(default = "default_verbose")]
    pub verbose: bool,

    #[serde(default)]
    pub allow_delegation: bool,

    /// Tool catalog identifiers. Order is kept but carries no meaning.
    #[serde(default)]
    pub tools: Vec<String>,
}

fn default_verbose() -> bool {
    true
}

impl CrewAgent {
    /// Create an agent with an empty backstory, no tools, verbose output and
    /// delegation disabled.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            goal: goal.into(),
            backstory: String::new(),
            verbose: true,
            allow_delegation: false,
            tools: Vec::new(),
        }
    }

    /// Set the backstory.
    pub fn with_backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = backstory.into();
        self
    }

    /// Replace the tool list.
    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }
}

/// Validated agent of the graph (LangGraph) variant.
///
/// Graph agents carry a language model identifier instead of the
/// verbosity/delegation flags.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct GraphAgent {
    pub name: String,

    pub role: String,

    pub goal: String,

    #[serde(default)]
    pub backstory: String,

    #[serde(default)]
    pub tools: Vec<String>,

    pub llm: String,
}

impl GraphAgent {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        goal: impl Into<String>,
        llm: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            goal: goal.into(),
            backstory: String::new(),
            tools: Vec::new(),
            llm: llm.into(),
        }
    }

    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }
}

impl From<CrewAgent> for AgentDraft {
    fn from(agent: CrewAgent) -> Self {
        Self {
            name: Some(agent.name),
            role: Some(agent.role),
            goal: Some(agent.goal),
            backstory: Some(agent.backstory),
            verbose: Some(agent.verbose),
            allow_delegation: Some(agent.allow_delegation),
            tools: Some(agent.tools),
            llm: None,
        }
    }
}
