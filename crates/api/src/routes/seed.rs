use axum::routing::post;
use axum::Router;

use crate::handlers::seed;
use crate::state::AppState;

/// Routes merged into `/api`.
///
/// ```text
/// POST /seed  -> run
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/seed", post(seed::run))
}
