//! Schema migration runner for the Wordbank `PostgreSQL` store.
//!
//! Runs independently of the server: loads the same configuration
//! (`config.toml` plus `WORDBANK_*` variables), connects to
//! `database.url`, applies every pending migration, and exits.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordbank_api::AppConfig;
use wordbank_store::{PostgresConfig, PostgresStore};

/// Apply pending database migrations.
#[derive(Debug, Parser)]
#[command(name = "wordbank-migrate", version, about = "Apply Wordbank schema migrations")]
struct Cli {
    /// Path to the TOML config file. A missing file is not an error.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Connection URL. Overrides `database.url` from the config.
    #[arg(long)]
    database_url: Option<String>,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if no database URL is configured, the connection
/// fails, or a migration fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let url = match cli.database_url {
        Some(url) => url,
        None => AppConfig::load(&cli.config)?
            .database
            .url
            .ok_or("database.url is not configured")?,
    };

    info!("wordbank-migrate starting");

    let store = PostgresStore::connect(&PostgresConfig::new(&url).with_max_connections(1)).await?;
    let result = store.run_migrations().await;
    store.close().await;
    result?;

    info!("wordbank-migrate finished");
    Ok(())
}
