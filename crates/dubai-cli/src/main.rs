//! # dubai CLI entry point
//!
//! Parses command-line arguments, installs logging, and dispatches to the
//! subcommand handlers in the library.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dubai_cli::collections::{run_collections, CollectionsArgs};
use dubai_cli::load_config;
use dubai_cli::schema::{run_schema, SchemaArgs};
use dubai_cli::validate::{run_validate, ValidateArgs};
use dubai_schema::SchemaRegistry;

/// Dubai content schemas: build-time validation for the site's content collections.
#[derive(Parser, Debug)]
#[command(name = "dubai", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to a YAML loader configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate every content file and check cross-collection references.
    Validate(ValidateArgs),

    /// List the registered collection names.
    Collections(CollectionsArgs),

    /// Print the JSON Schema of a collection.
    Schema(SchemaArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!("dubai CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    match cli.command {
        Commands::Validate(args) => {
            let config = load_config(cli.config.as_deref())?;
            let registry = SchemaRegistry::new().context("failed to build schema registry")?;
            run_validate(&args, config, &registry)
        }
        Commands::Collections(args) => run_collections(&args),
        Commands::Schema(args) => {
            let registry = SchemaRegistry::new().context("failed to build schema registry")?;
            run_schema(&args, &registry)
        }
    }
}
