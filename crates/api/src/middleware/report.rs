//! Failure boundary shared by every route.

use std::any::Any;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::{error_response, ReportedError};
use crate::reporting::ErrorEvent;
use crate::state::AppState;

/// Header carrying the per-request id set by the request-id layer.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Forward every server-error response to the configured reporter.
///
/// The event is tagged with the method and path of the request and its
/// request id. The response itself passes through untouched.
pub async fn report_server_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let context = format!("{} {}", request.method(), request.uri().path());
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let response = next.run(request).await;

    if response.status().is_server_error() {
        let (code, detail) = match response.extensions().get::<ReportedError>() {
            Some(reported) => (reported.code, reported.detail.clone()),
            None => (
                "INTERNAL_ERROR",
                format!("Unclassified {} response", response.status()),
            ),
        };
        state
            .reporter
            .report(ErrorEvent::new(context, code, detail).with_request_id(request_id));
    }

    response
}

/// Panic handler for `CatchPanicLayer`: answer with the structured 500
/// envelope and keep the panic message for the reporter only.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "Handler panicked");

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "Server error".to_string(),
        Some(format!("panic: {detail}")),
    )
}

/// JSON 404 for paths no route matches.
pub async fn route_not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        "Route not found".to_string(),
        None,
    )
}
