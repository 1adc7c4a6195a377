//! Admin login and read-only administrative views.

mod dto;
mod handlers;
pub(crate) mod repo;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(handlers::login))
        .route("/admin/drivers", get(handlers::list_drivers))
        .route("/admin/trips", get(handlers::list_trips))
}
