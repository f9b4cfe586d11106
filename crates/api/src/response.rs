//! Shared response body types for API handlers.

use serde::Serialize;

/// A bare `{ "message": ... }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
