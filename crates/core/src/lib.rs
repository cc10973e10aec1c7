//! # cf-core
//!
//! Configuration generation for agent-orchestration frameworks.
//!
//! This crate provides:
//! - A static catalog of the tools agents may use
//! - Validation and repair of loose configurations, with ordered warnings
//! - Extraction of configurations from free text, by pattern or through a
//!   chat model
//! - Rendering of configurations as CrewAI or LangGraph Python source
//! - Name-keyed merging of configurations
//!
//! ## Modules
//!
//! - [`catalog`]: Tool descriptors and parameter checks
//! - [`validate`]: Validator/normalizer for both configuration variants
//! - [`extract`]: Delimited-block pattern extractor
//! - [`llm`]: Provider abstraction and the LLM-backed extractor
//! - [`codegen`]: CrewAI and LangGraph generators, download artifacts
//! - [`merge`]: Configuration merge
//! - [`config`]: Settings from `.crewforge/` and the environment
//! - [`templates`]: Embedded prompts and examples

pub mod catalog;
pub mod codegen;
pub mod config;
pub mod extract;
pub mod llm;
pub mod merge;
pub mod outcome;
pub mod templates;
pub mod validate;

pub use outcome::Outcome;
