//! Identity-provider webhook receiver.
//!
//! The provider pushes user lifecycle events (`user.created`,
//! `user.updated`, `user.deleted`) which are mirrored into the `users`
//! table, keyed by the provider's user id. A new provider id whose email
//! matches an existing password account is linked to that account. Every
//! delivery is signature checked before its body is parsed.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;

use gigboard_db::models::user::{UpsertExternalUser, User};
use gigboard_db::repositories::UserRepo;

use crate::auth::webhook_signature::{self, SignatureError, SignedHeaders};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Payload types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ProviderUser,
}

#[derive(Debug, Deserialize)]
pub struct ProviderUser {
    pub id: String,
    #[serde(default)]
    pub email_addresses: Vec<ProviderEmail>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderEmail {
    pub email_address: String,
}

impl ProviderUser {
    /// Map the provider's user record onto a local user upsert.
    pub fn into_upsert(self) -> AppResult<UpsertExternalUser> {
        let email = self
            .email_addresses
            .into_iter()
            .map(|e| e.email_address)
            .find(|e| !e.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("Webhook user has no email address".into()))?;

        let name = [self.first_name, self.last_name]
            .into_iter()
            .flatten()
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(UpsertExternalUser {
            external_id: self.id,
            email,
            name,
            image: self.image_url.unwrap_or_default(),
        })
    }
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// POST /webhooks
pub async fn receive(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<Value>> {
    let secret = state
        .config
        .clerk_webhook_secret
        .as_deref()
        .ok_or_else(|| AppError::InternalError("CLERK_WEBHOOK_SECRET is not configured".into()))?;

    let signed = SignedHeaders {
        id: header(&headers, "svix-id")?,
        timestamp: header(&headers, "svix-timestamp")?,
        signature: header(&headers, "svix-signature")?,
    };
    if let Err(e) = webhook_signature::verify(secret, signed, &body, Utc::now().timestamp()) {
        return Err(match e {
            SignatureError::InvalidSecret => AppError::InternalError(e.to_string()),
            other => AppError::BadRequest(other.to_string()),
        });
    }

    let event: WebhookEvent = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid webhook payload: {e}")))?;

    match event.kind.as_str() {
        "user.created" | "user.updated" => {
            let input = event.data.into_upsert()?;
            let user = sync_user(&state.pool, &input).await?;
            tracing::info!(
                user_id = user.id,
                external_id = %input.external_id,
                kind = %event.kind,
                "Synced identity-provider user",
            );
        }
        "user.deleted" => {
            let removed = UserRepo::delete_by_external_id(&state.pool, &event.data.id).await?;
            tracing::info!(external_id = %event.data.id, removed, "Deleted identity-provider user");
        }
        other => {
            tracing::debug!(kind = other, "Ignoring webhook event");
        }
    }

    Ok(Json(json!({})))
}

/// Mirror a provider user into `users`.
///
/// A provider id seen for the first time whose email already belongs to an
/// unlinked password account is attached to that account instead of
/// inserting a second row with the same email.
async fn sync_user(pool: &PgPool, input: &UpsertExternalUser) -> AppResult<User> {
    if UserRepo::find_by_external_id(pool, &input.external_id).await?.is_none() {
        if let Some(user) = UserRepo::link_external(pool, input).await? {
            tracing::info!(user_id = user.id, "Linked identity-provider id to existing account");
            return Ok(user);
        }
    }
    Ok(UserRepo::upsert_external(pool, input).await?)
}

fn header<'a>(headers: &'a HeaderMap, name: &'static str) -> AppResult<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest(SignatureError::MissingHeader(name).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_user(value: Value) -> ProviderUser {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn upsert_joins_name_parts_and_takes_first_email() {
        let user = provider_user(json!({
            "id": "user_1",
            "email_addresses": [
                { "email_address": "first@test.com" },
                { "email_address": "second@test.com" }
            ],
            "first_name": "Ada",
            "last_name": "Lovelace",
            "image_url": "https://img.test/ada.png"
        }));

        let input = user.into_upsert().unwrap();

        assert_eq!(input.external_id, "user_1");
        assert_eq!(input.email, "first@test.com");
        assert_eq!(input.name, "Ada Lovelace");
        assert_eq!(input.image, "https://img.test/ada.png");
    }

    #[test]
    fn missing_name_parts_are_skipped() {
        let user = provider_user(json!({
            "id": "user_2",
            "email_addresses": [{ "email_address": "x@test.com" }],
            "first_name": "Grace",
            "last_name": null
        }));

        let input = user.into_upsert().unwrap();

        assert_eq!(input.name, "Grace");
        assert_eq!(input.image, "");
    }

    #[test]
    fn user_without_email_is_rejected() {
        let user = provider_user(json!({ "id": "user_3", "email_addresses": [] }));
        assert!(matches!(user.into_upsert(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn deleted_event_parses_with_only_an_id() {
        let event: WebhookEvent = serde_json::from_value(json!({
            "type": "user.deleted",
            "data": { "id": "user_4", "deleted": true, "object": "user" }
        }))
        .unwrap();
        assert_eq!(event.kind, "user.deleted");
        assert_eq!(event.data.id, "user_4");
    }
}
