//! Request extractors whose rejections use the JSON error envelope.
//!
//! axum's own `Json` and `Path` answer malformed input with a plain-text
//! body. These wrappers route the rejection through [`AppError`] instead:
//! a body that is not the expected JSON is a 400, a path segment that does
//! not parse is a 404.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Use in place of `axum::Json` as an extractor.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Typed path parameters. Use in place of `axum::extract::Path`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
