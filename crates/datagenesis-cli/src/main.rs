mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use datagenesis_core::Error as CoreError;
use datagenesis_generate::GenerationError;
use datagenesis_orchestrator::OrchestratorError;
use datagenesis_remote::RemoteError;
use datagenesis_request::ValidationReport;
use thiserror::Error;

use config::{ConfigError, load_settings};
use logging::{LoggingError, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("backend error: {0}")]
    Remote(#[from] RemoteError),
    #[error("{0}")]
    Orchestrator(#[from] OrchestratorError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("invalid request: {}", .0.summary())]
    Validation(ValidationReport),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "datagenesis", version, about = "DataGenesis synthetic data CLI")]
struct Cli {
    /// Path to a TOML config file (default: ./datagenesis.toml if present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe the remote backend.
    Health,
    /// Infer a schema from a CSV or JSON upload.
    Infer(InferArgs),
    /// Propose a schema from a natural-language description.
    Schema(SchemaArgs),
    /// Generate a dataset and export it.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct InferArgs {
    /// Upload to read (.json is read as JSON, anything else as CSV).
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    #[arg(long)]
    description: String,
    #[arg(long, default_value = "generic")]
    domain: String,
    #[arg(long, default_value = "tabular")]
    data_type: String,
    /// Skip the backend and use the canned schema.
    #[arg(long, default_value_t = false)]
    offline: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Generation request JSON; flags below override its fields.
    #[arg(long, value_name = "FILE")]
    request: Option<PathBuf>,
    /// Upload whose rows seed the schema.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// Schema JSON (`{"field": {"type": "number"}}`).
    #[arg(long, value_name = "FILE")]
    schema: Option<PathBuf>,
    #[arg(long)]
    domain: Option<String>,
    #[arg(long)]
    data_type: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Number of rows (default from config, 1000 out of the box).
    #[arg(long)]
    rows: Option<u64>,
    /// Export format: csv or json. Unknown values export JSON.
    #[arg(long, default_value = "json")]
    format: String,
    /// Directory for the export (default from config).
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Skip the backend and generate locally.
    #[arg(long, default_value_t = false)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    init_logging(&settings.logging)?;

    match cli.command {
        Command::Health => commands::run_health(&settings).await,
        Command::Infer(args) => commands::run_infer(&settings, args).await,
        Command::Schema(args) => commands::run_schema(&settings, args).await,
        Command::Generate(args) => commands::run_generate(&settings, args).await,
    }
}
