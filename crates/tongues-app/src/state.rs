use anyhow::Context;
use tongues_config::Config;
use tongues_core::{ProviderRegistry, Tongues};

pub struct AppState {
    pub tongues: Tongues,
}

impl AppState {
    /// Register every configured instance. Any bad entry aborts startup.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let registry = ProviderRegistry::new().with_all(tongues_provider_youdao::PROVIDERS);
        let tongues = Tongues::new(registry).with_default_provider(config.default_provider.as_str());

        for (index, instance) in config.instances.iter().enumerate() {
            tongues
                .create(&instance.provider, instance.provider_config(config.timeout_ms))
                .with_context(|| {
                    format!("Invalid translator instance #{index} ({})", instance.provider)
                })?;
        }

        if config.instances.is_empty() {
            tracing::warn!("No translator instances configured");
        }

        Ok(Self { tongues })
    }
}
