use axum::routing::post;
use axum::Router;

use crate::handlers::webhooks;
use crate::state::AppState;

/// Identity-provider callbacks (root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/webhooks", post(webhooks::receive))
}
