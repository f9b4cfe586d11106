//! Handlers for the `/companies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use gigboard_core::error::CoreError;
use gigboard_core::slug::company_slug;
use gigboard_db::models::company::{Company, CreateCompany};
use gigboard_db::repositories::CompanyRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Request body for `POST /api/companies`.
#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: String,
}

/// POST /api/companies
///
/// The company key is the slug of its name. A second company whose name
/// slugs to an existing key is rejected rather than overwriting the first.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCompanyRequest>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let email = input.email.trim();
    if input.name.trim().is_empty() || email.is_empty() {
        return Err(AppError::BadRequest("name and email are required".into()));
    }

    if CompanyRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(CoreError::Conflict("Company email already exists".into()).into());
    }

    let id = company_slug(&input.name)?;
    if CompanyRepo::find_by_id(&state.pool, &id).await?.is_some() {
        return Err(CoreError::Conflict("Company name already exists".into()).into());
    }

    let company = CompanyRepo::create(
        &state.pool,
        &CreateCompany {
            id,
            name: input.name.trim().to_string(),
            email: email.to_string(),
            image: input.image,
        },
    )
    .await?;

    tracing::info!(company_id = %company.id, "Company registered");
    Ok((StatusCode::CREATED, Json(company)))
}
