//! Task models for the flat (CrewAI) variant.

use crate::lenient;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Loose task record; `agent` may be missing or name an agent that does not exist.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub expected_output: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub agent: Option<String>,
}

/// Validated task assigned to exactly one live agent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct CrewTask {
    pub name: String,

    pub description: String,

    pub expected_output: String,

    /// Name of the agent that performs this task.
    pub agent: String,
}

impl CrewTask {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        expected_output: impl Into<String>,
        agent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            expected_output: expected_output.into(),
            agent: agent.into(),
        }
    }
}

impl From<CrewTask> for TaskDraft {
    fn from(task: CrewTask) -> Self {
        Self {
            name: Some(task.name),
            description: Some(task.description),
            expected_output: Some(task.expected_output),
            agent: Some(task.agent),
        }
    }
}
