//! Route definitions for the public `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{application, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET /                     -> list (falls back to the catalog)
/// GET /{id}/applications    -> list_for_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/{id}/applications", get(application::list_for_project))
}
