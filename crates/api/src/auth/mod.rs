//! Credential and signature primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`webhook_signature`] -- Svix-style signature checks for identity-provider webhooks.

pub mod password;
pub mod webhook_signature;
