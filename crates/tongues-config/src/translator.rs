use serde::{Deserialize, Serialize};
use tongues_translator::ProviderConfig;

/// One provider instance to register at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    /// Registry identifier, e.g. `YouDao`
    pub provider: String,
    pub api_key: Option<String>,
    pub key_from: Option<String>,
    /// Overrides the global timeout when set, 0 = unbounded
    pub timeout_ms: Option<u64>,
    /// Overrides the provider's default endpoint
    pub api_url: Option<String>,
}

impl InstanceConfig {
    pub fn new(provider: impl Into<String>, api_key: &str, key_from: &str) -> Self {
        let non_empty = |v: &str| (!v.is_empty()).then(|| v.to_string());
        Self {
            provider: provider.into(),
            api_key: non_empty(api_key),
            key_from: non_empty(key_from),
            ..Self::default()
        }
    }

    /// Settings to register with, inheriting `default_timeout_ms` when no timeout is set
    pub fn provider_config(&self, default_timeout_ms: u64) -> ProviderConfig {
        ProviderConfig {
            api_key: self.api_key.clone(),
            key_from: self.key_from.clone(),
            timeout_ms: self.timeout_ms.unwrap_or(default_timeout_ms),
            api_url: self.api_url.clone(),
        }
    }
}
