//! Kona API Server
//!
//! Run with: cargo run -- --database path/to/climate.sqlite
//!
//! # Configuration
//!
//! Settings load from the first of `--config`, `$XDG_CONFIG_HOME/kona/config.toml`,
//! `/etc/kona/config.toml`, `./kona.toml`, then defaults. Environment overrides:
//! - `KONA_DATABASE_PATH`: SQLite database path
//! - `KONA_HOST`: Host to bind to (default: 0.0.0.0)
//! - `KONA_PORT`: Port to listen on (default: 8081)
//! - `KONA_LOG_LEVEL`: Log level when RUST_LOG is unset (default: info)
//! - `KONA_LOG_FORMAT`: pretty or json (default: pretty)

use clap::Parser;
use kona::api::{serve, AppState};
use kona::config::{Config, LoggingConfig};
use kona::query::QueryEngine;
use kona::store::Store;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Read-only HTTP API over historical climate observations
#[derive(Debug, Parser)]
#[command(name = "kona", version)]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the climate SQLite database (overrides config)
    #[arg(long)]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(database) = args.database {
        config.database.path = database;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Kona API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Database: {:?}", config.database.path);

    // Schema validation happens here; a store without the expected tables
    // or columns refuses to start.
    let store = Store::open(&config.database.path)?;
    let engine = Arc::new(QueryEngine::new(store));

    let state = AppState::new(engine, config.api.clone());
    serve(state, &config.api).await?;

    tracing::info!("Kona API server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("kona={},tower_http=info", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
