use std::sync::Arc;

use crate::config::ServerConfig;
use crate::reporting::SharedReporter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened once at startup.
    pub pool: gigboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Destination for every caught server-side error.
    pub reporter: SharedReporter,
}
