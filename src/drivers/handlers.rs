use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::db;
use crate::error::ApiError;
use crate::state::AppState;

use super::dto::{LoginRequest, LoginResponse, PublicDriver, RegisterRequest};
use super::repo::Driver;

/// POST /register
///
/// The stored credential is derived from the phone number: drivers log in
/// with their phone number as the initial password.
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    // A malformed or absent body counts as "all fields missing".
    let req = payload.map(|Json(r)| r).unwrap_or_default();

    if !req.has_required_fields() {
        warn!("driver registration with missing fields");
        return Err(ApiError::Validation("All fields are required".into()));
    }

    let password_hash = hash_password(&req.phone)?;

    match Driver::insert(&state.db, &req, &password_hash).await {
        Ok(()) => {
            info!(phone = %req.phone, "driver registered");
            Ok(Json(json!({
                "message": "Registration successful. Use your phone number as your password."
            })))
        }
        Err(e) if db::is_unique_violation(&e) => {
            warn!(phone = %req.phone, "phone number already registered");
            Err(ApiError::Conflict("Phone number already registered".into()))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /api/drivers
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PublicDriver>>, ApiError> {
    let drivers = Driver::list(&state.db).await?;
    Ok(Json(drivers.into_iter().map(PublicDriver::from).collect()))
}

/// POST /login_driver
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let req = payload.map(|Json(r)| r).unwrap_or_default();

    if req.phone.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation(
            "Phone number and password are required".into(),
        ));
    }

    let driver = Driver::find_by_phone(&state.db, &req.phone)
        .await?
        .ok_or_else(|| {
            warn!(phone = %req.phone, "login with unknown phone number");
            ApiError::Unauthorized("Invalid phone number or password".into())
        })?;

    if !verify_password(&req.password, &driver.password_hash)? {
        warn!(phone = %req.phone, driver_id = driver.id, "login with wrong password");
        return Err(ApiError::Unauthorized(
            "Invalid phone number or password".into(),
        ));
    }

    info!(driver_id = driver.id, "driver logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        driver,
    }))
}
