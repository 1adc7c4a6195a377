use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::auth::password::verify_password;
use crate::drivers::repo::Driver;
use crate::error::ApiError;
use crate::state::AppState;
use crate::trips::repo::Trip;

use super::dto::AdminLoginRequest;
use super::repo::Admin;

/// POST /admin/login
///
/// Stateless: success grants nothing beyond the response message. The
/// administrative listings below carry no session binding.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<AdminLoginRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let req = payload.map(|Json(r)| r).unwrap_or_default();

    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required".into(),
        ));
    }

    let admin = Admin::find_by_username(&state.db, &req.username)
        .await?
        .ok_or_else(|| {
            warn!(username = %req.username, "admin login with unknown username");
            ApiError::Unauthorized("Invalid username or password".into())
        })?;

    if !verify_password(&req.password, &admin.password_hash)? {
        warn!(username = %req.username, "admin login with wrong password");
        return Err(ApiError::Unauthorized(
            "Invalid username or password".into(),
        ));
    }

    info!(admin_id = admin.id, username = %admin.username, "admin logged in");
    Ok(Json(json!({ "message": "Admin login successful" })))
}

/// GET /admin/drivers — full rows as stored, password hash included.
#[instrument(skip(state))]
pub async fn list_drivers(State(state): State<AppState>) -> Result<Json<Vec<Driver>>, ApiError> {
    let drivers = Driver::list(&state.db).await?;
    Ok(Json(drivers))
}

/// GET /admin/trips
#[instrument(skip(state))]
pub async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<Trip>>, ApiError> {
    let trips = Trip::list(&state.db).await?;
    Ok(Json(trips))
}
