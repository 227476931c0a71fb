use std::env;

use serde::{Deserialize, Serialize};

use self::translator::InstanceConfig;

pub mod translator;

/// Env prefixes of the providers that can be configured from the environment
const PROVIDER_ENV: &[(&str, &str)] = &[("YouDao", "YOUDAO"), ("Reddwarf", "REDDWARF")];

fn default_provider() -> String {
    "YouDao".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Provider used when a query does not name one
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Request timeout in ms for instances that do not set their own, 0 = unbounded
    #[serde(default)]
    pub timeout_ms: u64,
    /// One entry per credential set, registered in this order
    #[serde(default)]
    pub instances: Vec<InstanceConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            timeout_ms: 0,
            instances: Vec::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source shaped like the process environment.
    ///
    /// `<PROVIDER>_API_KEY` and `<PROVIDER>_KEY_FROM` hold comma separated
    /// lists; the n-th key is paired with the n-th key_from.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_provider = lookup("TONGUES_DEFAULT_PROVIDER")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_provider);

        let timeout_ms = lookup("TONGUES_TIMEOUT_MS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0);

        let mut instances = Vec::new();
        for (provider, prefix) in PROVIDER_ENV {
            let keys = lookup(&format!("{prefix}_API_KEY")).unwrap_or_default();
            let key_froms = lookup(&format!("{prefix}_KEY_FROM")).unwrap_or_default();

            let pairs = split_list(&keys).zip(split_list(&key_froms).chain(std::iter::repeat("")));
            for (api_key, key_from) in pairs {
                instances.push(InstanceConfig::new(*provider, api_key, key_from));
            }
        }

        Config {
            default_provider,
            timeout_ms,
            instances,
        }
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|v| !v.is_empty())
}
