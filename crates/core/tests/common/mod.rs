//! Common test utilities shared by the integration tests.
//!
//! - Test fixtures (messy drafts, prose prompts, settings directories)
//! - Invariant assertions for validated configurations
//! - Extractors wired to scripted providers

pub mod assertions;
pub mod fixtures;
pub mod mock_providers;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_providers::*;
