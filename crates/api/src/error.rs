use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use gigboard_core::error::CoreError;
use gigboard_db::seed::SeedError;

/// Generic text placed in the `error` field of every 500 response.
///
/// The real cause goes to the log and the error reporter, never to the caller.
pub const INTERNAL_ERROR_TEXT: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gigboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The catalog reseed failed and was rolled back.
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The path names something that cannot exist, e.g. a non-numeric id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Detail of a server-side failure, attached to the response extensions so
/// the reporting middleware can forward it without re-deriving it.
#[derive(Debug, Clone)]
pub struct ReportedError {
    pub code: &'static str,
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, "CONFLICT", msg.clone()),
                CoreError::InvalidCredentials => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_CREDENTIALS",
                    core.to_string(),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    server_error()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Seed(err) => {
                tracing::error!(error = %err, "Seeding failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SEED_FAILED",
                    "Failed to seed database".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                server_error()
            }
        };

        error_response(status, code, message, Some(self.to_string()))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NotFound(rejection.body_text())
    }
}

/// Build the JSON error envelope.
///
/// `{ "message", "code" }`, plus `"error"` on 5xx. For 5xx responses the
/// internal `detail` travels in the response extensions as [`ReportedError`].
pub fn error_response(
    status: StatusCode,
    code: &'static str,
    message: String,
    detail: Option<String>,
) -> Response {
    let body = if status.is_server_error() {
        json!({
            "message": message,
            "error": INTERNAL_ERROR_TEXT,
            "code": code,
        })
    } else {
        json!({
            "message": message,
            "code": code,
        })
    };

    let mut response = (status, axum::Json(body)).into_response();
    if status.is_server_error() {
        response.extensions_mut().insert(ReportedError {
            code,
            detail: detail.unwrap_or(message),
        });
    }
    response
}

fn server_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "Server error".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations on `uq_` constraints or the company key map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                let message = match constraint {
                    "uq_users_email" => Some("Email already exists".to_string()),
                    "uq_companies_email" => Some("Company email already exists".to_string()),
                    "companies_pkey" => Some("Company name already exists".to_string()),
                    c if c.starts_with("uq_") => {
                        Some(format!("Duplicate value violates unique constraint: {c}"))
                    }
                    _ => None,
                };
                if let Some(message) = message {
                    return (StatusCode::BAD_REQUEST, "CONFLICT", message);
                }
            }
            tracing::error!(error = %db_err, "Database error");
            server_error()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            server_error()
        }
    }
}
