use axum::routing::post;
use axum::Router;

use crate::handlers::application;
use crate::state::AppState;

/// Routes mounted at `/applications`.
///
/// ```text
/// POST /  -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(application::submit))
}
