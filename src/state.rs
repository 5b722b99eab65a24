// src/state.rs
use crate::config::Config;
use crate::db::connection::Database;

/// Everything a request handler needs, built once at startup and shared
/// across the worker threads. There is no other process-wide state.
pub struct AppState {
    pub db: Database,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let db = Database::new(config.db_path.clone());
        Self { db, config }
    }
}
