//! Result of a repairing operation.

use serde::Serialize;

/// A configuration together with the ordered warnings produced while
/// building or repairing it.
///
/// Operations that return an `Outcome` never fail: problems with the input
/// are repaired where possible and reported here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome<T> {
    pub config: T,
    pub warnings: Vec<String>,
}

impl<T> Outcome<T> {
    pub fn new(config: T, warnings: Vec<String>) -> Self {
        Self { config, warnings }
    }

    /// An outcome with no warnings.
    pub fn clean(config: T) -> Self {
        Self::new(config, Vec::new())
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            config: f(self.config),
            warnings: self.warnings,
        }
    }
}

impl<T: Default> Default for Outcome<T> {
    fn default() -> Self {
        Self::clean(T::default())
    }
}
