//! Repository for the `applications` table.

use sqlx::PgPool;

use gigboard_core::types::DbId;

use crate::models::application::{
    Application, ApplicationWithUser, ApplicationWithUserRow, CreateApplication,
};

const COLUMNS: &str = "id, user_id, project_id, solution_link, created_at, updated_at";

/// Provides submission and listing operations for applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new application, returning the created row.
    ///
    /// Referential integrity is left to the foreign keys: an unknown user or
    /// project surfaces as a database error.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplication,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (user_id, project_id, solution_link)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(input.user_id)
            .bind(input.project_id)
            .bind(&input.solution_link)
            .fetch_one(pool)
            .await
    }

    /// List the applications for a project with the submitting user expanded,
    /// oldest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ApplicationWithUser>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ApplicationWithUserRow>(
            "SELECT a.id, a.user_id, u.name AS user_name, u.email AS user_email, \
                    u.image AS user_image, a.project_id, a.solution_link, \
                    a.created_at, a.updated_at \
             FROM applications a \
             JOIN users u ON u.id = a.user_id \
             WHERE a.project_id = $1 \
             ORDER BY a.created_at, a.id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(ApplicationWithUser::from).collect())
    }
}
