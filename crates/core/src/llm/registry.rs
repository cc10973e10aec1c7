//! Registry of configured chat providers.

use crate::config::Settings;
use crate::llm::openai_compat::OpenAiCompatProvider;
use crate::llm::provider::{ChatProvider, LlmError, ProviderKind};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Holds at most one provider per [`ProviderKind`].
///
/// A kind without credentials simply has no entry; lookups for it yield
/// `None` and the extractor reports missing credentials.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Arc<dyn ChatProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build HTTP providers for every kind with an API key in `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, LlmError> {
        let mut registry = Self::new();
        for kind in ProviderKind::ALL {
            if let Some(endpoint) = settings.endpoint(kind) {
                debug!(provider = %kind, model = %endpoint.default_model, "Registering provider");
                registry.register(Arc::new(OpenAiCompatProvider::new(endpoint)?));
            }
        }
        Ok(registry)
    }

    /// Register a provider, replacing any previous one of the same kind.
    pub fn register(&mut self, provider: Arc<dyn ChatProvider>) {
        self.providers.insert(provider.kind(), provider);
    }

    #[must_use]
    pub fn with(mut self, provider: Arc<dyn ChatProvider>) -> Self {
        self.register(provider);
        self
    }

    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn ChatProvider>> {
        self.providers.get(&kind).cloned()
    }

    pub fn has(&self, kind: ProviderKind) -> bool {
        self.providers.contains_key(&kind)
    }

    /// Registered kinds in display order.
    pub fn kinds(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|kind| self.has(*kind))
            .collect()
    }
}
