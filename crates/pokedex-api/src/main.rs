//! Pokedex API server binary.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from the environment
//! 3. Connect the `PostgreSQL` pool
//! 4. Build shared application state
//! 5. Serve HTTP until the process is terminated

use std::sync::Arc;

use pokedex_api::config::ApiConfig;
use pokedex_api::server::{ServerConfig, start_server};
use pokedex_api::state::AppState;
use pokedex_db::PostgresPool;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point for the Pokedex API server.
///
/// # Errors
///
/// Returns an error if configuration loading, the database connection,
/// or the HTTP server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("pokedex-api starting");

    // 2. Load configuration.
    let config = ApiConfig::from_env()?;
    info!(host = %config.host, port = config.port, "Configuration loaded");

    // 3. Connect the database pool.
    let db = PostgresPool::connect_url(&config.database_url).await?;

    // 4. Build shared application state.
    let state = Arc::new(AppState::new(db));

    // 5. Serve.
    let server_config = ServerConfig {
        host: config.host,
        port: config.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}
