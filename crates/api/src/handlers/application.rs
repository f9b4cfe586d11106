//! Handlers for project applications.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use gigboard_core::types::DbId;
use gigboard_db::models::application::{Application, ApplicationWithUser, CreateApplication};
use gigboard_db::repositories::ApplicationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// POST /api/applications
///
/// Duplicate submissions are accepted. Unknown user or project ids fail at
/// the foreign key and surface as a server error.
pub async fn submit(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateApplication>,
) -> AppResult<(StatusCode, Json<Application>)> {
    if input.solution_link.trim().is_empty() {
        return Err(AppError::BadRequest("solutionLink is required".into()));
    }

    let application = ApplicationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        application_id = application.id,
        user_id = application.user_id,
        project_id = application.project_id,
        "Application submitted",
    );
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/projects/{id}/applications
pub async fn list_for_project(
    State(state): State<AppState>,
    AppPath(project_id): AppPath<DbId>,
) -> AppResult<Json<Vec<ApplicationWithUser>>> {
    let applications = ApplicationRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(applications))
}
