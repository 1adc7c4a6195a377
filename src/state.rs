use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;

/// Shared application state handed to every handler. Each query checks a
/// connection out of the pool for the duration of the statement; it returns
/// to the pool when dropped, on success and error paths alike.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }
}
