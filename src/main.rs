use std::sync::Arc;

use anyhow::Context;

use taxol::app;
use taxol::config::AppConfig;
use taxol::db;
use taxol::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "taxol=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = Arc::new(AppConfig::from_env()?);

    let pool = db::init(&config.database_path, config.database_reset)
        .await
        .context("initialize database")?;

    let state = AppState::new(pool, config.clone());
    let app = app::build_app(state);
    app::serve(app, &config).await
}
