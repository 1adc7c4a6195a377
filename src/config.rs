use anyhow::Context;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_path: String,
    /// Delete the database file before initializing the schema.
    pub database_reset: bool,
    /// Candidate roots for the bundled frontend, searched in order.
    pub static_dirs: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v.parse::<u16>().context("APP_PORT must be a port number")?,
            Err(_) => 5000,
        };
        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| "taxol.db".into());
        let database_reset = std::env::var("DATABASE_RESET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let static_dirs = std::env::var("STATIC_DIRS")
            .unwrap_or_else(|_| "public,dist,build".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            database_path,
            database_reset,
            static_dirs,
        })
    }
}
