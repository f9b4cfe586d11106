//! Cross-cutting request middleware.
//!
//! - [`report::report_server_errors`] -- Forwards every 5xx response to the error reporter.
//! - [`report::handle_panic`] -- Turns a handler panic into the standard JSON envelope.

pub mod report;
