//! Configuration merge.
//!
//! Name-keyed upsert: an incoming item replaces the existing item with the
//! same identifier in place, anything else is appended. Nothing is ever
//! removed, so merging the same source twice changes nothing the second time.

use cf_protocol::config_models::{CrewConfig, GraphConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a freshly generated configuration is combined with the current one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Discard the current configuration.
    #[default]
    Replace,
    /// Upsert the new items into the current configuration.
    Merge,
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateMode::Replace => f.write_str("replace"),
            UpdateMode::Merge => f.write_str("merge"),
        }
    }
}

impl FromStr for UpdateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(UpdateMode::Replace),
            "merge" => Ok(UpdateMode::Merge),
            other => Err(format!("unknown update mode '{other}'")),
        }
    }
}

/// Merges agents, then tasks, of `source` into `target`.
pub fn merge_crew(target: &mut CrewConfig, source: CrewConfig) {
    upsert(&mut target.agents, source.agents, |a| a.name.clone());
    upsert(&mut target.tasks, source.tasks, |t| t.name.clone());
}

/// Merges agents and nodes by name, and edges by `(source, target)`.
pub fn merge_graph(target: &mut GraphConfig, source: GraphConfig) {
    upsert(&mut target.agents, source.agents, |a| a.name.clone());
    upsert(&mut target.nodes, source.nodes, |n| n.name.clone());
    upsert(&mut target.edges, source.edges, |e| (e.source.clone(), e.target.clone()));
}

/// Combines a newly generated configuration with the current one.
///
/// An empty current configuration is simply replaced.
pub fn apply_update(current: CrewConfig, incoming: CrewConfig, mode: UpdateMode) -> CrewConfig {
    if current.is_empty() || mode == UpdateMode::Replace {
        return incoming;
    }
    let mut merged = current;
    merge_crew(&mut merged, incoming);
    merged
}

/// Graph counterpart of [`apply_update`].
pub fn apply_graph_update(current: GraphConfig, incoming: GraphConfig, mode: UpdateMode) -> GraphConfig {
    if current.is_empty() || mode == UpdateMode::Replace {
        return incoming;
    }
    let mut merged = current;
    merge_graph(&mut merged, incoming);
    merged
}

fn upsert<T, K, F>(target: &mut Vec<T>, incoming: Vec<T>, key: F)
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    for item in incoming {
        let k = key(&item);
        match target.iter().position(|existing| key(existing) == k) {
            Some(index) => target[index] = item,
            None => target.push(item),
        }
    }
}
