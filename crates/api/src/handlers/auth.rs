//! Handlers for login and registration.
//!
//! No session is issued: a successful login answers with the user's public
//! fields only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use gigboard_core::error::CoreError;
use gigboard_db::models::user::{CreateUser, UserPublic};
use gigboard_db::repositories::UserRepo;

use crate::auth::password::{hash_password, verify_against_dummy, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /api/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// Unknown email, password-less account, and wrong password all produce the
/// same 400 so callers cannot tell which part was wrong.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<UserPublic>> {
    if input.email.trim().is_empty() || input.password.is_empty() {
        return Err(AppError::BadRequest("email and password are required".into()));
    }

    let user = UserRepo::find_by_email(&state.pool, input.email.trim()).await?;
    let Some((user, hash)) = user.and_then(|u| u.password_hash.clone().map(|h| (u, h))) else {
        verify_against_dummy(&input.password);
        return Err(CoreError::InvalidCredentials.into());
    };

    let password_valid = verify_password(&input.password, &hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(CoreError::InvalidCredentials.into());
    }

    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(UserPublic::from(user)))
}

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserPublic>)> {
    let email = input.email.trim();
    if email.is_empty() || input.password.is_empty() || input.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "email, password and name are required".into(),
        ));
    }

    if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(CoreError::Conflict("Email already exists".into()).into());
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: email.to_string(),
            password_hash,
            name: input.name.trim().to_string(),
            image: input.image,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");
    Ok((StatusCode::CREATED, Json(UserPublic::from(user))))
}
