use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tongues_core::{DispatchError, Tongues, TranslationResult};
use tongues_translator::Query;
use tracing_subscriber::EnvFilter;

pub mod profile;
pub mod state;


use self::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "tongues", version, about = "One interface over several translation backends")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file. Without it the config is read from the environment.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Provider to use instead of the configured default.
    #[arg(long)]
    api: Option<String>,

    /// Source language (standard code).
    #[arg(long)]
    from: Option<String>,

    /// Target language (standard code).
    #[arg(long)]
    to: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text.
    Translate {
        text: String,

        /// Print the normalized result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Check the source language against the provider.
    Detect { text: String },
    /// Print an audio URL for the text.
    Audio { text: String },
    /// List the known providers and how many instances each has.
    Providers,
}

impl Cli {
    fn query(&self, text: &str) -> Query {
        Query {
            text: text.to_string(),
            from: self.from.clone(),
            to: self.to.clone(),
            api: self.api.clone(),
        }
    }
}

/// `--debug` turns on every workspace crate
const DEBUG_FILTER: &str =
    "tongues=debug,tongues_core=debug,tongues_translator=debug,tongues_provider_youdao=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = profile::load_config(cli.config.as_deref())?;
    let state = AppState::new(config)?;

    match &cli.command {
        Commands::Translate { text, json } => {
            let result = state.tongues.translate(&cli.query(text)).await;
            print_translation(&or_explain(result)?, *json)?;
        }
        Commands::Detect { text } => {
            let lang = state.tongues.detect(&cli.query(text)).await;
            println!("{}", or_explain(lang)?);
        }
        Commands::Audio { text } => {
            let url = state.tongues.audio(&cli.query(text)).await;
            println!("{}", or_explain(url)?);
        }
        Commands::Providers => {
            for line in provider_lines(&state.tongues) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// `<name>\t<instances>`, the default provider marked with `*`
fn provider_lines(tongues: &Tongues) -> Vec<String> {
    let default = tongues.default_provider();
    tongues
        .registry()
        .providers()
        .into_iter()
        .map(|name| {
            let marker = if name == default { " *" } else { "" };
            format!("{name}\t{}{marker}", tongues.pool().len(name))
        })
        .collect()
}

fn or_explain<T>(outcome: Result<T, DispatchError>) -> anyhow::Result<T> {
    outcome.map_err(|err| match err {
        DispatchError::Unsupported => {
            anyhow::anyhow!("The selected provider does not support this query")
        }
        other => anyhow::Error::new(other),
    })
}

fn print_translation(result: &TranslationResult, json: bool) -> anyhow::Result<()> {
    let metadata = result.api.metadata();

    if json {
        let value = serde_json::json!({
            "api": { "name": metadata.name, "link": metadata.link },
            "translation": &result.translation,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("[{}]", metadata.name);
    if let Some(error) = &result.error {
        println!("{error}");
    }
    if let Some(phonetic) = &result.phonetic {
        println!("/{phonetic}/");
    }
    for line in result.detailed.iter().flatten() {
        println!("  {line}");
    }
    for line in result.result.iter().flatten() {
        println!("{line}");
    }
    println!("{}", result.link_to_result);

    Ok(())
}
