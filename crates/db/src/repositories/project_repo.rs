//! Repository for the `projects` table.

use sqlx::PgPool;

use gigboard_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectWithCompany, ProjectWithCompanyRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company_id, title, description, location, category, level, \
                       salary, date, visible, created_at";

/// Projects joined to their company, exposing the company's name and email.
const WITH_COMPANY_SELECT: &str = "SELECT p.id, p.title, p.description, p.location, p.category, \
        p.level, p.salary, p.date, p.visible, \
        c.id AS company_id, c.name AS company_name, c.email AS company_email \
     FROM projects p \
     JOIN companies c ON c.id = p.company_id";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Projects are only created by seeding, which inserts fixed ids in bulk;
    /// this single-row insert serves tests.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (company_id, title, description, location, category, level, salary, date, visible)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.company_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(&input.category)
            .bind(&input.level)
            .bind(input.salary)
            .bind(input.date)
            .bind(input.visible)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    ///
    /// No route reads this; tests use it to inspect stored rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every project with its company expanded, in id order.
    pub async fn list_with_company(pool: &PgPool) -> Result<Vec<ProjectWithCompany>, sqlx::Error> {
        let query = format!("{WITH_COMPANY_SELECT} ORDER BY p.id");
        let rows = sqlx::query_as::<_, ProjectWithCompanyRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ProjectWithCompany::from).collect())
    }

    /// Count all projects.
    ///
    /// No route reads this; tests use it to inspect stored rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Applications submitted against the project are removed with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
