//! Extractors wired to scripted providers.

use cf_core::llm::mock::MockProvider;
use cf_core::llm::{LlmExtractor, ProviderKind, ProviderRegistry};
use std::sync::Arc;

/// An extractor over the given scripted providers.
#[allow(dead_code)]
pub fn extractor_with(providers: &[MockProvider]) -> LlmExtractor {
    let mut registry = ProviderRegistry::new();
    for provider in providers {
        registry.register(Arc::new(provider.clone()));
    }
    LlmExtractor::new(registry)
}

/// OpenRouter fails with a 503, OpenAI answers with `reply`.
#[allow(dead_code)]
pub fn flaky_router_with_openai(reply: &str) -> (MockProvider, MockProvider) {
    (
        MockProvider::failing(ProviderKind::OpenRouter, 503, "no endpoints available"),
        MockProvider::replying(ProviderKind::OpenAi, reply),
    )
}
