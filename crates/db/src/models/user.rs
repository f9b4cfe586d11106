//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use gigboard_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserPublic`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    /// Identity-provider user id, set for users created through the webhook.
    pub external_id: Option<String>,
    pub email: String,
    /// `None` for identity-provider users, who cannot log in with a password.
    pub password_hash: Option<String>,
    pub name: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The public face of a user returned by login and registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPublic {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub image: String,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            image: user.image,
        }
    }
}

/// DTO for inserting a locally registered user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub image: String,
}

/// DTO for creating or refreshing a user owned by the identity provider.
#[derive(Debug, Clone)]
pub struct UpsertExternalUser {
    pub external_id: String,
    pub email: String,
    pub name: String,
    pub image: String,
}
