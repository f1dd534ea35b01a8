use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use dentra::api::server::start_api_server;
use dentra::config::{self, AppConfig};
use dentra::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = AppConfig::from_env();
    if let Some(parent) = config.db_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::error!("Cannot create data directory {}: {e}", parent.display());
            std::process::exit(1);
        }
    }

    let state = Arc::new(AppState::new(config));

    // Fail fast if the database cannot be opened or migrated
    if let Err(e) = state.open_db() {
        tracing::error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    let mut server = match start_api_server(state).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Cannot start API server: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for shutdown signal: {e}");
    }
    server.shutdown();
}
