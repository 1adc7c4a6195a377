//! Trip history: listing and creation of immutable trip records.

pub(crate) mod dto;
mod handlers;
pub(crate) mod repo;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/trips", get(handlers::list).post(handlers::create))
}
