use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use tongues_config::Config;

/// Load a JSON config file, or build the config from the environment when no file is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("Loading config from environment...");
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let file =
        File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}
