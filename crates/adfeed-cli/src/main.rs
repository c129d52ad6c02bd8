mod runner;
mod scheduler;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "adfeed-cli")]
#[command(about = "Builds the Ayshei product feed from recently updated ads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch, filter, and publish the feed once
    Run {
        /// Write the feed here instead of `ADFEED_FEED_PATH`
        #[arg(long)]
        output: Option<PathBuf>,

        /// Run the pipeline and render the feed without writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Run on `ADFEED_SCHEDULE` until interrupted
    Schedule,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Arc::new(adfeed_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = %config.env, "adfeed starting");

    match cli.command {
        Commands::Run { output, dry_run } => {
            let options = runner::RunOptions {
                output: output.unwrap_or_else(|| config.feed_path.clone()),
                dry_run,
            };
            let summary = runner::run_once(&config, &options).await?;
            tracing::info!(
                emitted = summary.diagnostics.emitted,
                written = ?summary.written,
                "feed run complete"
            );
        }
        Commands::Schedule => {
            let mut scheduler = scheduler::build_scheduler(Arc::clone(&config)).await?;
            scheduler::shutdown_signal().await;
            scheduler.shutdown().await?;
        }
    }

    Ok(())
}
