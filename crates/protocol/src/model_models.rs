//! Remote model catalog entries.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One selectable language model from the remote catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ModelInfo {
    /// Display name.
    pub name: String,

    /// Identifier sent to the provider, e.g. `deepseek/deepseek-r1:free`.
    pub model_id: String,

    /// Upper-cased author/vendor.
    pub author: String,

    /// Serving provider, when the catalog reports one.
    #[serde(default)]
    #[ts(optional)]
    pub provider: Option<String>,

    #[serde(default)]
    pub is_free: bool,
}

/// Identifier suffix marking free-tier models.
pub const FREE_SUFFIX: &str = ":free";

impl ModelInfo {
    /// Free-tier signal: the explicit tag or the `:free` convention on the id.
    pub fn is_free_tier(&self) -> bool {
        self.is_free || self.model_id.contains(FREE_SUFFIX)
    }
}
