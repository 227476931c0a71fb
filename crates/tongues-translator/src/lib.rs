pub mod error;
pub mod language;
pub mod normalize;
pub mod types;

pub use error::{ConfigError, TranslateError, TransportError, TransportErrorKind};
pub use language::LanguageTable;
pub use normalize::{ErrorMessages, Extracted, normalize};
pub use types::{LanguageCode, ProviderConfig, ProviderMetadata, Query, Translation};

/// Builds one provider instance from its settings
pub type Factory =
    fn(ProviderConfig) -> Result<std::sync::Arc<dyn Translator>, ConfigError>;

/// Translation provider interface
///
/// One implementation per backend. A value of the implementing type is one
/// credential set; several of them can be registered under the same provider
/// name and are rotated by the dispatcher.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;

    /// Standard <-> provider language code table
    fn languages(&self) -> &'static LanguageTable;

    /// Convert a standard code to this provider's code, or back when `invert` is set
    fn resolve(&self, lang: &str, invert: bool) -> Option<&'static str> {
        self.languages().resolve(lang, invert)
    }

    /// Translate the query text and normalize the backend payload
    async fn translate(&self, query: &Query) -> Result<Translation, TranslateError>;

    /// Check that the query's source language is supported and echo it back.
    ///
    /// Backends without real detection keep this default: the text is never
    /// inspected, an unknown or missing `from` is [`TranslateError::Unsupported`].
    async fn detect(&self, query: &Query) -> Result<LanguageCode, TranslateError> {
        match query.from.as_deref() {
            Some(from) if self.resolve(from, false).is_some() => Ok(from.to_string()),
            _ => Err(TranslateError::Unsupported),
        }
    }

    /// URL of a spoken rendition of the query text
    async fn audio(&self, query: &Query) -> Result<String, TranslateError>;
}
