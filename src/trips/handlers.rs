use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::state::AppState;

use super::dto::CreateTripRequest;
use super::repo::Trip;

/// GET /api/trips
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Trip>>, ApiError> {
    let trips = Trip::list(&state.db).await?;
    Ok(Json(trips))
}

/// POST /api/trips
#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateTripRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let req = payload.map(|Json(r)| r).unwrap_or_default();

    if !req.has_required_fields() {
        warn!("trip submitted without customer, pickup or destination");
        return Err(ApiError::Validation(
            "Customer name, pickup and destination are required".into(),
        ));
    }

    Trip::insert(&state.db, &req).await?;
    info!(customer = %req.customer_name, "trip recorded");
    Ok(Json(json!({ "status": "ok" })))
}
