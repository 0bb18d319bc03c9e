//! NeuroAdapt CLI entry point.
//!
//! This binary is the composition root for the workspace. Responsibilities:
//!
//! 1. **Parse arguments** — the text to adapt, the reader's interests and the
//!    requested compression level.
//! 2. **Load configuration** — read `neuroadapt.toml` (or `--config`) and the
//!    API key file it points at, failing before any network traffic when a
//!    value is missing.
//! 3. **Wire observability** — configure `tracing-subscriber` with an
//!    `EnvFilter` and either a human-readable or a JSON layer. Spans and
//!    events emitted by every crate in the workspace flow through it.
//! 4. **Construct infrastructure** — build the [`llm::AzureOpenAiClient`],
//!    inject it into [`adaptation::TextAdapter`] and run one adaptation.

mod config;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info_span, Instrument};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use adaptation::{AdaptationRunId, ApiKey, ApiVersion, ModelName, TextAdapter};
use llm::{AzureOpenAiClient, ClientConfig};

use crate::config::FileConfig;

/// Rephrase a text around a reader's interests at a chosen compression level.
#[derive(Debug, Parser)]
#[command(name = "neuroadapt", version, about, long_about = None)]
struct Cli {
    /// Text to adapt.
    text: String,

    /// Interest to weave into the adaptation (repeatable, first five used).
    #[arg(short, long = "interest")]
    interests: Vec<String>,

    /// Compression level: brief, short, medium or long.
    #[arg(short, long, default_value = "medium")]
    level: String,

    /// Path of the configuration file.
    #[arg(long, default_value = "neuroadapt.toml")]
    config: PathBuf,

    /// Enable debug-level logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit log lines as JSON instead of human-readable text.
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::new("neuroadapt=debug,adaptation=debug,llm=debug")
    } else {
        EnvFilter::new("neuroadapt=info,adaptation=info,llm=info")
    };

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry
            .with(fmt::layer().with_target(false).without_time())
            .init();
    }
}

async fn run(cli: Cli) -> Result<()> {
    let file_config = FileConfig::load(&cli.config).await?;
    let api_key = load_api_key(Path::new(&file_config.key_file)).await?;

    let api_version = ApiVersion::new(&file_config.api_version)
        .context("api_version must not be empty")?;
    let model = ModelName::new(&file_config.model).context("model must not be empty")?;

    let client = AzureOpenAiClient::new(ClientConfig {
        endpoint: file_config.endpoint,
        api_key,
        api_version,
        request_timeout: Duration::from_secs(file_config.request_timeout_secs),
    })?;
    let adapter = TextAdapter::new(client, model);

    let run_id = AdaptationRunId::new_random();
    let span = info_span!("adaptation_run", run_id = %run_id);
    let adapted = adapter
        .adapt(&cli.text, &cli.interests, &cli.level)
        .instrument(span)
        .await?;

    println!("Adapted text:");
    println!("{adapted}");
    Ok(())
}

async fn load_api_key(path: &Path) -> Result<ApiKey> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read API key file {}", path.display()))?;
    ApiKey::new(raw.trim())
        .with_context(|| format!("API key file {} is empty", path.display()))
}
