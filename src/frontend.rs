//! Bundled frontend serving with an API-status fallback.

use std::path::{Component, Path, PathBuf};

use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::{debug, instrument};

use crate::state::AppState;

/// Fallback for every path no API route matched.
///
/// Walks the configured static roots in order; the first root containing the
/// requested path wins. Regular files are served as-is, anything else gets
/// that root's `index.html`. Without a match the API status message is
/// returned.
#[instrument(skip(state, req))]
pub async fn spa_fallback(State(state): State<AppState>, req: Request) -> Response {
    let path = req.uri().path().trim_start_matches('/').to_string();

    if let Some(target) = resolve(&state.config.static_dirs, &path).await {
        debug!(file = %target.display(), "serving static file");
        return ServeFile::new(target).oneshot(req).await.into_response();
    }

    Json(json!({ "message": "API active" })).into_response()
}

/// First existing candidate under the static roots, with `index.html`
/// substituted for non-file matches. Paths with parent-directory components
/// never resolve.
async fn resolve(roots: &[String], request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path);
    if relative
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return None;
    }

    for root in roots {
        let full = Path::new(root).join(relative);
        let Ok(metadata) = tokio::fs::metadata(&full).await else {
            continue;
        };
        if metadata.is_file() {
            return Some(full);
        }
        return Some(Path::new(root).join("index.html"));
    }
    None
}
