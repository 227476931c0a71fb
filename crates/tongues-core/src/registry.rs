use std::collections::HashMap;
use std::sync::Arc;

use tongues_translator::{ConfigError, Factory, ProviderConfig, Translator};

/// Provider identifier -> constructor, filled at startup
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    factories: HashMap<String, Factory>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, provider: impl Into<String>, factory: Factory) -> Self {
        self.insert(provider, factory);
        self
    }

    pub fn with_all(mut self, factories: &[(&str, Factory)]) -> Self {
        for (provider, factory) in factories {
            self.insert(*provider, *factory);
        }
        self
    }

    pub fn insert(&mut self, provider: impl Into<String>, factory: Factory) {
        self.factories.insert(provider.into(), factory);
    }

    /// Registered provider ids, sorted
    pub fn providers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Construct a new instance. Fails immediately on unknown ids or bad credentials.
    pub fn build(
        &self,
        provider: &str,
        config: ProviderConfig,
    ) -> Result<Arc<dyn Translator>, ConfigError> {
        let factory = self
            .factories
            .get(provider)
            .ok_or_else(|| ConfigError::UnknownProvider(provider.to_string()))?;

        factory(config)
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}
