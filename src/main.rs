//! FitTune - Fitness Progress Tracking
//!
//! Main entry point: a line-oriented console over the progress store.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fittune::console::{ConsoleApp, Reply};
use fittune::progress::{spawn_goal_alerts, ProgressStore};
use fittune::storage::config::{load_config, load_config_from};

/// Track workouts, meals and goals from the terminal.
#[derive(Debug, Parser)]
#[command(name = "fittune", version, about)]
struct Args {
    /// Configuration file (defaults to config.toml in the data directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    }
    .context("Failed to load configuration")?;

    // Logs go to stderr so they do not interleave with command replies.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting FitTune v{}", env!("CARGO_PKG_VERSION"));

    let store = ProgressStore::with_profile(config.profile.clone());
    let _alerts = spawn_goal_alerts(&store);
    let mut app = ConsoleApp::new(store, &config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    stdout
        .write_all(b"FitTune ready. Type 'help' for commands.\n> ")
        .await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        if !line.trim().is_empty() {
            let output = match app.handle_line(&line) {
                Ok(Reply::Text(text)) => text,
                Ok(Reply::Quit) => break,
                Err(e) => format!("Error: {e}"),
            };
            stdout.write_all(output.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    tracing::info!("Shutting down");
    Ok(())
}
