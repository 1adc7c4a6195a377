use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::dto::RegisterRequest;

/// Driver record as stored.
///
/// Serializes every column including the password hash; responses that must
/// not expose the hash go through `dto::PublicDriver` instead.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Driver {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub vehicle_type: String,
    pub plate_number: String,
    pub address: String,
    pub status: String,
}

impl Driver {
    /// Inserts a new driver. Surfaces the raw sqlx error so the caller can
    /// classify a UNIQUE violation on `phone` as a conflict.
    pub async fn insert(
        db: &SqlitePool,
        req: &RegisterRequest,
        password_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO drivers (full_name, email, phone, password_hash, vehicle_type, plate_number, address)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&req.full_name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(password_hash)
        .bind(&req.vehicle_type)
        .bind(&req.plate_number)
        .bind(&req.address)
        .execute(db)
        .await?;
        Ok(())
    }

    pub async fn find_by_phone(db: &SqlitePool, phone: &str) -> Result<Option<Driver>, sqlx::Error> {
        sqlx::query_as::<_, Driver>(
            r#"
            SELECT id, full_name, email, phone, password_hash, vehicle_type, plate_number, address, status
            FROM drivers
            WHERE phone = ?
            "#,
        )
        .bind(phone)
        .fetch_optional(db)
        .await
    }

    /// All drivers, most recently registered first.
    pub async fn list(db: &SqlitePool) -> Result<Vec<Driver>, sqlx::Error> {
        sqlx::query_as::<_, Driver>(
            r#"
            SELECT id, full_name, email, phone, password_hash, vehicle_type, plate_number, address, status
            FROM drivers
            ORDER BY id DESC
            "#,
        )
        .fetch_all(db)
        .await
    }
}
