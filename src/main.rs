//! Tender - freelance marketplace demo binary.
//!
//! Loads the dataset snapshot (seed or `TENDER_DATA_PATH`), restores the
//! saved session, and runs one subcommand against the query services.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tender::cli::Cli;
use tender::{Config, Result};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tender=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let cli = Cli::parse();

    tender::cli::run(cli, &config)
}
