//! Wordbank HTTP server binary.
//!
//! Wires configuration, logging, the selected word store, and the HTTP
//! API together, then serves until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Parse command line flags
//! 2. Initialize structured JSON logging (tracing)
//! 3. Load configuration from the config file and `WORDBANK_*` variables
//! 4. Construct the store selected by `database.type`
//! 5. Build the router and serve

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordbank_api::{AppConfig, AppState, DatabaseKind, build_router, start_server};
use wordbank_store::{MemoryStore, PostgresConfig, PostgresStore, WordStore};

use crate::error::AppError;

/// Word lookup service.
#[derive(Debug, Parser)]
#[command(name = "wordbank-server", version, about = "Word lookup HTTP service")]
struct Cli {
    /// Path to the TOML config file. A missing file is not an error.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Log at debug level regardless of `RUST_LOG`.
    #[arg(long, default_value_t = false)]
    debug: bool,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, store construction, or the server
/// fails.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // 1. Initialize structured logging.
    init_logging(cli.debug)?;

    info!(
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        "wordbank-server starting"
    );

    // 2. Load configuration.
    let config = AppConfig::load(&cli.config)?;
    info!(
        config_file = %cli.config.display(),
        server.host = %config.server.host,
        server.port = config.server.port,
        server.assets = config.server.assets.as_ref().map(|p| p.display().to_string()),
        database.kind = %config.database.kind,
        "Configuration loaded"
    );

    // 3. Construct the store and serve.
    match config.database.kind {
        DatabaseKind::Memory => serve(Arc::new(MemoryStore::new()), &config).await,
        DatabaseKind::Postgres => {
            let url = config
                .database
                .url
                .as_deref()
                .ok_or(wordbank_api::config::ConfigError::MissingDatabaseUrl(
                    DatabaseKind::Postgres,
                ))?;
            let store = PostgresStore::connect(&PostgresConfig::new(url)).await?;
            let result = serve(Arc::new(store.clone()), &config).await;
            store.close().await;
            result
        }
    }
}

/// Build the router over `store` and serve until shutdown.
async fn serve<S: WordStore>(store: Arc<S>, config: &AppConfig) -> Result<(), AppError> {
    let state = Arc::new(AppState::new(store));
    let router = build_router(state, config.server.assets.as_deref());

    start_server(&config.server, router).await?;

    info!("wordbank-server shutdown complete");
    Ok(())
}

/// Install the global JSON log subscriber.
fn init_logging(debug: bool) -> Result<(), AppError> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| AppError::Logging {
            message: format!("{e}"),
        })
}
