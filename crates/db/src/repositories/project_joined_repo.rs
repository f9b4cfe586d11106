//! Repository for the `projects_joined` table.

use sqlx::PgPool;

use gigboard_core::types::DbId;

use crate::models::project_joined::ProjectJoined;

const COLUMNS: &str = "id, company_id, user_id, title, location, date, status";

/// Read access to joined projects. Rows are only written by the seeder.
pub struct ProjectJoinedRepo;

impl ProjectJoinedRepo {
    /// List the projects a user has joined, in insertion order.
    ///
    /// No route reads this; tests use it to inspect stored rows.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProjectJoined>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects_joined WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, ProjectJoined>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
