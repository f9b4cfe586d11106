use axum::routing::post;
use axum::Router;

use crate::handlers::company;
use crate::state::AppState;

/// Routes mounted at `/companies`.
///
/// ```text
/// POST /  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(company::create))
}
