//! Error reporting sink.
//!
//! Every server-side failure is handed to an [`ErrorReporter`] held in the
//! application state. Reporting is observational: it never changes the
//! response a caller receives.
//!
//! - [`TracingReporter`] -- writes a structured `tracing` event.
//! - [`HttpReporter`] -- additionally POSTs the event as JSON to an external
//!   collector (single attempt, no retry).

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;

use gigboard_core::types::Timestamp;

/// HTTP request timeout for a single report delivery.
const REPORT_TIMEOUT: Duration = Duration::from_secs(10);

/// One reported failure, tagged with where it happened.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    /// Where the failure was caught, e.g. `"GET /api/projects"` or `"seed"`.
    pub context: String,
    /// Machine-readable error code from the response envelope.
    pub code: String,
    /// Internal failure description. Never sent to API callers.
    pub detail: String,
    pub request_id: Option<String>,
    pub timestamp: Timestamp,
}

impl ErrorEvent {
    pub fn new(
        context: impl Into<String>,
        code: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            code: code.into(),
            detail: detail.into(),
            request_id: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }
}

/// A process-wide destination for caught errors.
///
/// Implementations must not block: they are called on the request path.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, event: ErrorEvent);
}

/// Shared handle stored in [`crate::state::AppState`].
pub type SharedReporter = Arc<dyn ErrorReporter>;

/// Reports errors as structured log events only.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, event: ErrorEvent) {
        tracing::error!(
            context = %event.context,
            code = %event.code,
            request_id = event.request_id.as_deref().unwrap_or("-"),
            detail = %event.detail,
            "Reported error",
        );
    }
}

/// Logs each error and forwards it to an external collector over HTTP.
///
/// Delivery runs on a spawned task so the request that failed is never held
/// up; a failed delivery is logged and dropped.
pub struct HttpReporter {
    client: reqwest::Client,
    url: String,
}

impl HttpReporter {
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(REPORT_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl ErrorReporter for HttpReporter {
    fn report(&self, event: ErrorEvent) {
        TracingReporter.report(event.clone());

        let client = self.client.clone();
        let url = self.url.clone();
        // Outside a runtime (e.g. during shutdown) the log line is all we get.
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        handle.spawn(async move {
            let result = client
                .post(&url)
                .json(&event)
                .send()
                .await
                .and_then(reqwest::Response::error_for_status);
            if let Err(e) = result {
                tracing::warn!(url = %url, error = %e, "Error report delivery failed");
            }
        });
    }
}

/// Pick the reporter for the configured collector URL.
pub fn build_reporter(error_report_url: Option<&str>) -> Result<SharedReporter, reqwest::Error> {
    match error_report_url {
        Some(url) => {
            tracing::info!(url, "Forwarding reported errors over HTTP");
            Ok(Arc::new(HttpReporter::new(url)?))
        }
        None => Ok(Arc::new(TracingReporter)),
    }
}
