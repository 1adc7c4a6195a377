//! Driver registration, public listing and login.

pub(crate) mod dto;
mod handlers;
pub(crate) mod repo;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/api/drivers", get(handlers::list))
        .route("/login_driver", post(handlers::login))
}
