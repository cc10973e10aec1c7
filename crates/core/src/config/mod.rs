//! Settings loading.
//!
//! Provider credentials, endpoints, default models, timeouts and prompt
//! overrides come from the `.crewforge/` directory and the environment.

pub mod error;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_settings, load_settings_with_env};
pub use models::{ProviderSettings, Settings};
