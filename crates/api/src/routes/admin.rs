//! Route definitions for the `/admin` resource.
//!
//! No authorization is applied; these routes are open like the rest of
//! the API.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /projects       -> admin_list
/// DELETE /projects/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::admin_list))
        .route("/projects/{id}", delete(project::delete))
}
