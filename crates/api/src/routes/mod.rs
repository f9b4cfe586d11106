pub mod admin;
pub mod application;
pub mod auth;
pub mod company;
pub mod debug;
pub mod health;
pub mod project;
pub mod seed;
pub mod webhooks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                           login (public)
/// /register                        register (public)
///
/// /companies                       create
///
/// /projects                        list, with catalog fallback
/// /projects/{id}/applications      applications with applicant expanded
///
/// /applications                    submit
///
/// /admin/projects                  list (no fallback)
/// /admin/projects/{id}             delete
///
/// /seed                            reset the catalog tables
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(seed::router())
        .nest("/companies", company::router())
        .nest("/projects", project::router())
        .nest("/applications", application::router())
        .nest("/admin", admin::router())
}
