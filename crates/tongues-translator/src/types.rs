use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub type LanguageCode = String;

/// A single translate/detect/audio request, expressed in standard language codes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Text to translate or read aloud
    pub text: String,
    /// Source language, unset means auto
    pub from: Option<LanguageCode>,
    /// Target language, unset means auto
    pub to: Option<LanguageCode>,
    /// Provider name, the dispatcher default is used when unset
    pub api: Option<String>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_from(mut self, from: impl Into<LanguageCode>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_to(mut self, to: impl Into<LanguageCode>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn with_api(mut self, api: impl Into<String>) -> Self {
        self.api = Some(api.into());
        self
    }
}

/// Provider-independent translation result
///
/// `text`, `response` and `link_to_result` are always set. At least one of
/// `result`, `detailed` and `error` is set, and `error` never appears next to
/// the other two.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Translation {
    pub text: String,
    /// Untouched backend payload, `null` when the backend sent nothing usable
    pub response: serde_json::Value,
    pub link_to_result: String,
    pub result: Option<Vec<String>>,
    /// Dictionary explanations
    pub detailed: Option<Vec<String>>,
    /// Only present together with `detailed`
    pub phonetic: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    /// Display name
    pub name: String,
    /// Homepage of the online translator
    pub link: String,
}

/// Settings for one provider instance (one credential set)
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub key_from: Option<String>,
    /// Request timeout in milliseconds, 0 means unbounded
    pub timeout_ms: u64,
    /// Endpoint override
    pub api_url: Option<String>,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>, key_from: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            key_from: Some(key_from.into()),
            ..Self::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    /// Returns `(api_key, key_from)`, failing when either one is missing or blank
    pub fn key_pair(&self, provider: &str) -> Result<(String, String), ConfigError> {
        let api_key = required(&self.api_key, provider, "api_key")?;
        let key_from = required(&self.key_from, provider, "key_from")?;
        Ok((api_key, key_from))
    }
}

fn required(
    value: &Option<String>,
    provider: &str,
    field: &'static str,
) -> Result<String, ConfigError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ConfigError::MissingCredential {
            provider: provider.to_string(),
            field,
        }),
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("key_from", &self.key_from)
            .field("timeout_ms", &self.timeout_ms)
            .field("api_url", &self.api_url)
            .finish()
    }
}
