//! Shared application state handed to every request handler.
//!
//! Holds the resolved configuration and opens one SQLite connection per
//! request. SQLite serializes writes at the storage layer; there is no
//! application-level locking.

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::db::{self, DatabaseError};

pub struct AppState {
    config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Open a connection to the clinic database. Migrations are
    /// idempotent, so this is safe to call on every request.
    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        db::open_database(&self.config.db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_db_creates_and_migrates() {
        let tmp = tempfile::tempdir().unwrap();
        let state = AppState::new(AppConfig::with_db_path(tmp.path().join("clinic.db")));

        let conn = state.open_db().unwrap();
        let tables = db::count_tables(&conn).unwrap();
        assert!(tables >= 9, "Expected at least 9 tables, got {tables}");
    }

    #[test]
    fn open_db_twice_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let state = AppState::new(AppConfig::with_db_path(tmp.path().join("clinic.db")));

        state.open_db().unwrap();
        state.open_db().unwrap();
    }
}
