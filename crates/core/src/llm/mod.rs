//! LLM-backed extractor.
//!
//! Builds a system instruction from the framework prompt and the tool
//! catalog, asks a chat-completion provider for a configuration, locates the
//! JSON object in the reply and validates it.
//!
//! ## Modules
//!
//! - [`provider`]: `ChatProvider` trait, `ProviderKind`, `LlmError`
//! - [`openai_compat`]: reqwest client for OpenAI and OpenRouter
//! - [`registry`]: configured providers by kind
//! - [`generator`]: `LlmExtractor` and the fallback flow
//! - [`models`]: remote model catalog
//! - [`mock`]: scripted provider for tests

pub mod generator;
pub mod mock;
pub mod models;
pub mod openai_compat;
pub mod prompt;
pub mod provider;
pub mod registry;
pub mod reply;

pub use generator::{GenerateRequest, LlmExtractor, FALLBACK_MODEL, FALLBACK_TAG};
pub use models::fetch_models;
pub use provider::{ChatProvider, ChatRequest, LlmError, ProviderKind};
pub use registry::ProviderRegistry;
