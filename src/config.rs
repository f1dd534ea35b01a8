use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Dentra";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn default_log_filter() -> String {
    "info,dentra=debug".to_string()
}

/// Runtime configuration, resolved once at startup and passed by
/// reference from then on. Nothing reads ambient global state after
/// `from_env()` returns.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
}

impl AppConfig {
    /// Resolve configuration from the environment.
    ///
    /// `DENTRA_ADDR` overrides the listen address (default `127.0.0.1:7400`),
    /// `DENTRA_DB` overrides the database file (default `~/Dentra/clinic.db`).
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("DENTRA_ADDR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 7400)));

        let db_path = std::env::var("DENTRA_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| app_data_dir().join("clinic.db"));

        Self { bind_addr, db_path }
    }

    /// Configuration rooted at an explicit database path, bound to an
    /// ephemeral port. Used by tests working against a throwaway file.
    pub fn with_db_path(db_path: PathBuf) -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            db_path,
        }
    }
}

/// Get the application data directory
/// ~/Dentra/ on all platforms (user-visible by design)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Dentra")
}
