//! Handlers for the `/projects` and `/admin/projects` resources.

use axum::extract::State;
use axum::Json;

use gigboard_core::error::CoreError;
use gigboard_core::types::DbId;
use gigboard_db::models::project::ProjectWithCompany;
use gigboard_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::reporting::ErrorEvent;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/projects
///
/// Serves the bundled listing when the table is empty or the query fails.
/// A failure is reported but never reaches the caller, so an empty store and
/// an unreachable store look the same from outside.
pub async fn list(State(state): State<AppState>) -> Json<Vec<ProjectWithCompany>> {
    match ProjectRepo::list_with_company(&state.pool).await {
        Ok(projects) if !projects.is_empty() => Json(projects),
        Ok(_) => {
            tracing::info!("No projects stored, serving bundled listing");
            Json(ProjectWithCompany::fallback_listing())
        }
        Err(e) => {
            tracing::error!(error = %e, "Project listing failed, serving bundled listing");
            state.reporter.report(ErrorEvent::new(
                "GET /api/projects",
                "FALLBACK_SERVED",
                e.to_string(),
            ));
            Json(ProjectWithCompany::fallback_listing())
        }
    }
}

/// GET /api/admin/projects
pub async fn admin_list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithCompany>>> {
    let projects = ProjectRepo::list_with_company(&state.pool).await?;
    Ok(Json(projects))
}

/// DELETE /api/admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(MessageResponse {
        message: "Project deleted successfully",
    }))
}
