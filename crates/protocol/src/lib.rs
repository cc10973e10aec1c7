//! # cf-protocol
//!
//! Configuration data model shared by every crewforge crate.
//!
//! This crate defines:
//! - Loose *draft* records accepted from forms, files and language models
//! - Validated crew (agents + tasks) and graph (agents + nodes + edges) configurations
//! - Model catalog entries returned by the remote model list
//!
//! ## Modules
//!
//! - [`agent_models`]: Agent drafts and validated agents for both variants
//! - [`task_models`]: Task drafts and validated tasks
//! - [`graph_models`]: Graph nodes, edges and the terminal sentinel
//! - [`config_models`]: Whole-configuration records and update scopes
//! - [`model_models`]: Remote model catalog entries
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, serde_json and ts-rs
//! - TypeScript generation: Validated types derive `TS` for front-end clients
//! - Missing keys are typed absence (`Option`) on drafts, never lookup failures

pub mod agent_models;
pub mod config_models;
pub mod graph_models;
mod lenient;
pub mod model_models;
pub mod task_models;

// Re-export all public types for convenience
pub use agent_models::*;
pub use config_models::*;
pub use graph_models::*;
pub use model_models::*;
pub use task_models::*;
