//! zwocreate - build Zwift workout files from workout scripts.
//!
//! Usage:
//! ```bash
//! # Write workout.zwo in the current directory
//! zwocreate friday.toml
//!
//! # Write into a directory that may not exist yet
//! zwocreate friday.toml workouts/friday -f
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zwocreate::app::{create_workout, describe_error, CreateRequest};
use zwocreate::storage::config::load_config;

#[derive(Parser)]
#[command(
    name = "zwocreate",
    version,
    about = "Create Zwift workout (.zwo) files from workout scripts"
)]
struct Args {
    /// Workout script (.toml)
    input: PathBuf,

    /// Output file or directory (default: workout.zwo)
    output: Option<PathBuf>,

    /// Create the output directory if it does not exist
    #[arg(long, short = 'f')]
    force: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting zwocreate v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("Failed to load configuration")?;

    let request = CreateRequest {
        input: args.input,
        output: args.output,
        force: args.force,
    };

    match create_workout(&request, &config) {
        Ok(path) => {
            println!("Created {}", path.display());
            Ok(())
        }
        Err(err) => bail!(describe_error(&request.input, &err)),
    }
}
