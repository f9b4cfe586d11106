//! Storage-free domain building blocks shared by the `db` and `api` crates.

pub mod catalog;
pub mod error;
pub mod slug;
pub mod types;
