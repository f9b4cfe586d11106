//! Deliberate failure endpoint for checking the panic boundary and the
//! error reporter end to end. Only mounted when debug routes are enabled.

use axum::http::StatusCode;

/// GET /debug-error
pub async fn trigger_panic() -> StatusCode {
    panic!("Deliberate failure from /debug-error");
}
