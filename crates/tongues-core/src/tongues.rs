use std::ops::Deref;
use std::sync::{Arc, PoisonError, RwLock};

use tongues_translator::{
    ConfigError, LanguageCode, ProviderConfig, Query, TranslateError, Translation, Translator,
};

use crate::error::DispatchError;
use crate::pool::InstancePool;
use crate::registry::ProviderRegistry;

/// Capability requested from a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Translate,
    Detect,
    Audio,
}

#[derive(Debug)]
pub enum Output {
    Translation(TranslationResult),
    Language(LanguageCode),
    Audio(String),
}

/// A translation together with the instance that produced it
pub struct TranslationResult {
    pub api: Arc<dyn Translator>,
    pub translation: Translation,
}

impl Deref for TranslationResult {
    type Target = Translation;

    fn deref(&self) -> &Translation {
        &self.translation
    }
}

impl std::fmt::Debug for TranslationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationResult")
            .field("api", &self.api.metadata().name)
            .field("translation", &self.translation)
            .finish()
    }
}

/// Entry point for client code: owns the instance pools and the default provider
pub struct Tongues {
    registry: ProviderRegistry,
    pool: InstancePool,
    default_provider: RwLock<String>,
}

impl Tongues {
    pub const DEFAULT_PROVIDER: &'static str = "YouDao";

    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            registry,
            pool: InstancePool::new(),
            default_provider: RwLock::new(Self::DEFAULT_PROVIDER.to_string()),
        }
    }

    pub fn with_default_provider(self, provider: impl Into<String>) -> Self {
        self.set_default_provider(provider);
        self
    }

    pub fn default_provider(&self) -> String {
        self.default_provider
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_default_provider(&self, provider: impl Into<String>) {
        *self
            .default_provider
            .write()
            .unwrap_or_else(PoisonError::into_inner) = provider.into();
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn pool(&self) -> &InstancePool {
        &self.pool
    }

    /// Build an instance of `provider` and append it to that provider's pool
    pub fn create(
        &self,
        provider: &str,
        config: ProviderConfig,
    ) -> Result<Arc<dyn Translator>, ConfigError> {
        let instance = self.registry.build(provider, config)?;
        self.register(provider, Arc::clone(&instance));
        Ok(instance)
    }

    /// Add an already constructed instance under `provider`
    pub fn register(&self, provider: &str, instance: Arc<dyn Translator>) {
        tracing::info!(
            provider,
            name = %instance.metadata().name,
            position = self.pool.len(provider),
            "registered translator instance"
        );
        self.pool.register(provider, instance);
    }

    pub async fn call(&self, op: Operation, query: &Query) -> Result<Output, DispatchError> {
        match op {
            Operation::Translate => self.translate(query).await.map(Output::Translation),
            Operation::Detect => self.detect(query).await.map(Output::Language),
            Operation::Audio => self.audio(query).await.map(Output::Audio),
        }
    }

    pub async fn translate(&self, query: &Query) -> Result<TranslationResult, DispatchError> {
        let (provider, instance) = self.select(Operation::Translate, query)?;
        let translation = settle(Operation::Translate, &provider, instance.translate(query).await)?;
        Ok(TranslationResult {
            api: instance,
            translation,
        })
    }

    /// Language of the query, as the provider sees it
    pub async fn detect(&self, query: &Query) -> Result<LanguageCode, DispatchError> {
        let (provider, instance) = self.select(Operation::Detect, query)?;
        settle(Operation::Detect, &provider, instance.detect(query).await)
    }

    /// Audio URL for the query text
    pub async fn audio(&self, query: &Query) -> Result<String, DispatchError> {
        let (provider, instance) = self.select(Operation::Audio, query)?;
        settle(Operation::Audio, &provider, instance.audio(query).await)
    }

    /// Rotate the pool named by the query (or the default) and hand out its front instance
    fn select(
        &self,
        op: Operation,
        query: &Query,
    ) -> Result<(String, Arc<dyn Translator>), DispatchError> {
        let provider = query.api.clone().unwrap_or_else(|| self.default_provider());

        let instance = self
            .pool
            .next(&provider)
            .ok_or_else(|| DispatchError::NotRegistered(provider.clone()))?;

        tracing::debug!(?op, provider = %provider, name = %instance.metadata().name, "dispatching");
        Ok((provider, instance))
    }
}

fn settle<T>(
    op: Operation,
    provider: &str,
    outcome: Result<T, TranslateError>,
) -> Result<T, DispatchError> {
    outcome.map_err(|err| match err {
        TranslateError::Unsupported => {
            tracing::debug!(?op, provider, "not supported");
            DispatchError::Unsupported
        }
        TranslateError::Transport(source) => {
            tracing::warn!(?op, provider, kind = %source.kind(), "transport failure: {source}");
            DispatchError::from(source)
        }
    })
}

impl std::fmt::Debug for Tongues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tongues")
            .field("registry", &self.registry)
            .field("pool", &self.pool)
            .field("default_provider", &self.default_provider())
            .finish()
    }
}
