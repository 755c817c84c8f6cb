use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
#[cfg(test)]
mod test_utils;

use cli::Cli;

/// Main entry point for the babyshop catalog tool.
#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads DATABASE_URL
    config::load_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    info!("babyshop starting up");
    cli.run().await?;

    Ok(())
}
