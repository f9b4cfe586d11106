use axum::routing::get;
use axum::Router;

use crate::handlers::debug;
use crate::state::AppState;

/// Failure-path probe, mounted only when `ENABLE_DEBUG_ROUTES` is set.
///
/// ```text
/// GET /debug-error  -> trigger_panic
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/debug-error", get(debug::trigger_panic))
}
