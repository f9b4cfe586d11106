//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - `Serialize` views with the field names the HTTP API exposes
//!   (`_id` plus camelCase)

pub mod application;
pub mod company;
pub mod project;
pub mod project_joined;
pub mod user;
