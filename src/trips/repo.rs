use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

use super::dto::CreateTripRequest;

/// Trip record as stored. Immutable once created.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Trip {
    pub id: i64,
    pub customer_name: String,
    pub pickup: String,
    pub destination: String,
    pub service: Option<String>,
    pub distance: Option<f64>,
    pub duration: Option<String>,
    pub price: Option<f64>,
    pub payment_method: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Trip {
    /// Inserts a trip with a server-assigned creation timestamp.
    pub async fn insert(db: &SqlitePool, req: &CreateTripRequest) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO trips (customer_name, pickup, destination, service, distance, duration, price, payment_method, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&req.customer_name)
        .bind(&req.pickup)
        .bind(&req.destination)
        .bind(req.service.as_deref())
        .bind(req.distance)
        .bind(req.duration.as_deref())
        .bind(req.price)
        .bind(req.payment_method.as_deref())
        .bind(OffsetDateTime::now_utc())
        .execute(db)
        .await?;
        Ok(())
    }

    /// All trips, most recent first.
    pub async fn list(db: &SqlitePool) -> Result<Vec<Trip>, sqlx::Error> {
        sqlx::query_as::<_, Trip>(
            r#"
            SELECT id, customer_name, pickup, destination, service, distance, duration, price, payment_method, created_at
            FROM trips
            ORDER BY id DESC
            "#,
        )
        .fetch_all(db)
        .await
    }
}
