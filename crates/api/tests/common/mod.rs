//! Shared harness for API integration tests.
//!
//! Builds the production router around a throwaway database pool and a
//! reporter that records every event, plus small request helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gigboard_api::config::ServerConfig;
use gigboard_api::reporting::{ErrorEvent, ErrorReporter};
use gigboard_api::router::build_app_router;
use gigboard_api::state::AppState;

/// Webhook secret used by [`test_config`]; base64 of `test-signing-key-0123456789`.
pub const WEBHOOK_SECRET: &str = "whsec_dGVzdC1zaWduaW5nLWtleS0wMTIzNDU2Nzg5";

/// Collects reported events in memory.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ErrorEvent>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<ErrorEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, event: ErrorEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Build a test `ServerConfig` with safe defaults and debug routes enabled.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: "postgres://unused".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: Some(30),
        error_report_url: None,
        clerk_webhook_secret: Some(WEBHOOK_SECRET.to_string()),
        enable_debug_routes: true,
    }
}

/// Build the full application router with the given config.
pub fn build_app_with(pool: PgPool, config: ServerConfig) -> (Router, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::default());
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        reporter: reporter.clone(),
    };
    (build_app_router(state, &config), reporter)
}

/// Build the full application router, keeping a handle on the reporter.
pub fn build_test_app_with_reporter(pool: PgPool) -> (Router, Arc<RecordingReporter>) {
    build_app_with(pool, test_config())
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_reporter(pool).0
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
