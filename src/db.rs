use std::path::Path;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::auth::password::hash_password;

/// Schema DDL. Every statement is idempotent, safe to run on each start.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS drivers (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name     TEXT NOT NULL,
    email         TEXT NOT NULL,
    phone         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    vehicle_type  TEXT NOT NULL,
    plate_number  TEXT NOT NULL,
    address       TEXT NOT NULL,
    status        TEXT NOT NULL DEFAULT 'aktif'
);

CREATE TABLE IF NOT EXISTS trips (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    customer_name  TEXT NOT NULL,
    pickup         TEXT NOT NULL,
    destination    TEXT NOT NULL,
    service        TEXT,
    distance       REAL,
    duration       TEXT,
    price          REAL,
    payment_method TEXT,
    created_at     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS admin (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    username      TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);
"#;

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Opens (or creates) the database file, applies the schema and seeds the
/// default admin account. With `reset` set, an existing database file is
/// deleted first. Failure here is fatal to startup.
pub async fn init(path: &str, reset: bool) -> anyhow::Result<SqlitePool> {
    if reset && Path::new(path).exists() {
        std::fs::remove_file(path).with_context(|| format!("remove database file {path}"))?;
        info!(path, "existing database removed");
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .context("connect to database")?;

    run_schema(&pool).await?;
    seed_default_admin(&pool).await?;

    Ok(pool)
}

async fn run_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("apply schema")?;
    }
    Ok(())
}

/// Inserts the default admin row only when no row with that username exists.
async fn seed_default_admin(pool: &SqlitePool) -> anyhow::Result<()> {
    let password_hash = hash_password(DEFAULT_ADMIN_PASSWORD)?;
    let result = sqlx::query("INSERT OR IGNORE INTO admin (username, password_hash) VALUES (?, ?)")
        .bind(DEFAULT_ADMIN_USERNAME)
        .bind(password_hash)
        .execute(pool)
        .await
        .context("seed default admin")?;

    if result.rows_affected() > 0 {
        info!(username = DEFAULT_ADMIN_USERNAME, "default admin seeded");
    }
    Ok(())
}

/// True when `err` is a UNIQUE constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(e) if e.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn init_at(dir: &tempfile::TempDir, reset: bool) -> SqlitePool {
        let path = dir.path().join("taxol.db");
        init(path.to_str().unwrap(), reset).await.expect("init db")
    }

    #[tokio::test]
    async fn init_is_idempotent_and_seeds_one_admin() {
        let dir = tempfile::tempdir().unwrap();

        let pool = init_at(&dir, false).await;
        sqlx::query("INSERT INTO drivers (full_name, email, phone, password_hash, vehicle_type, plate_number, address) VALUES ('a', 'a@b.c', '081', 'h', 'motor', 'B 1 A', 'jl')")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        // Second init must keep existing rows and not duplicate the admin.
        let pool = init_at(&dir, false).await;
        let (admins,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admin")
            .fetch_one(&pool)
            .await
            .unwrap();
        let (drivers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM drivers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(admins, 1);
        assert_eq!(drivers, 1);
    }

    #[tokio::test]
    async fn reset_recreates_the_database_file() {
        let dir = tempfile::tempdir().unwrap();

        let pool = init_at(&dir, false).await;
        sqlx::query("INSERT INTO drivers (full_name, email, phone, password_hash, vehicle_type, plate_number, address) VALUES ('a', 'a@b.c', '081', 'h', 'motor', 'B 1 A', 'jl')")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        let pool = init_at(&dir, true).await;
        let (drivers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM drivers")
            .fetch_one(&pool)
            .await
            .unwrap();
        let (admins,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admin")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(drivers, 0);
        assert_eq!(admins, 1);
    }

    #[tokio::test]
    async fn duplicate_phone_is_a_unique_violation() {
        let dir = tempfile::tempdir().unwrap();
        let pool = init_at(&dir, false).await;

        let insert = "INSERT INTO drivers (full_name, email, phone, password_hash, vehicle_type, plate_number, address) VALUES ('a', 'a@b.c', '081', 'h', 'motor', 'B 1 A', 'jl')";
        sqlx::query(insert).execute(&pool).await.unwrap();
        let err = sqlx::query(insert).execute(&pool).await.unwrap_err();
        assert!(is_unique_violation(&err));
    }
}
