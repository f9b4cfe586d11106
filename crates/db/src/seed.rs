//! Destructive reseed of the marketplace tables from the bundled catalog.
//!
//! The whole reseed runs in a single transaction: either every table ends up
//! holding exactly the catalog, or nothing changes.

use serde::Serialize;
use sqlx::{PgConnection, PgPool};

use gigboard_core::catalog;
use gigboard_core::types::DbId;

/// Why a reseed was abandoned. The transaction has been rolled back.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Joined projects must belong to a user and none exists yet.
    #[error("No user found to associate with joined projects")]
    NoUser,

    #[error("Database error during seeding: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row counts written by a successful reseed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub companies: usize,
    pub projects: usize,
    pub manage_projects: usize,
    pub projects_joined: usize,
    pub view_applications: usize,
}

/// Replace the companies, projects, manage-projects, joined-projects and
/// view-applications tables with the bundled catalog.
///
/// Joined projects are attached to the oldest existing user. Applications
/// cascade away with the projects they reference. Users are never touched.
pub async fn reseed(pool: &PgPool) -> Result<SeedSummary, SeedError> {
    let mut tx = pool.begin().await?;

    clear(&mut tx).await?;
    let companies = insert_companies(&mut tx).await?;
    let projects = insert_projects(&mut tx).await?;
    let manage_projects = insert_manage_projects(&mut tx).await?;

    let owner: Option<DbId> = sqlx::query_scalar("SELECT id FROM users ORDER BY id LIMIT 1")
        .fetch_optional(&mut *tx)
        .await?;
    let Some(owner) = owner else {
        tx.rollback().await?;
        tracing::warn!("Reseed rolled back: no user to own joined projects");
        return Err(SeedError::NoUser);
    };

    let projects_joined = insert_projects_joined(&mut tx, owner).await?;
    let view_applications = insert_view_applications(&mut tx).await?;

    tx.commit().await?;

    let summary = SeedSummary {
        companies,
        projects,
        manage_projects,
        projects_joined,
        view_applications,
    };
    tracing::info!(?summary, owner, "Catalog reseeded");
    Ok(summary)
}

async fn clear(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    for table in [
        "view_applications",
        "projects_joined",
        "manage_projects",
        "projects",
        "companies",
    ] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

async fn insert_companies(conn: &mut PgConnection) -> Result<usize, sqlx::Error> {
    for company in catalog::COMPANIES {
        sqlx::query("INSERT INTO companies (id, name, email, image) VALUES ($1, $2, $3, $4)")
            .bind(company.id)
            .bind(company.name)
            .bind(company.email)
            .bind(company.image)
            .execute(&mut *conn)
            .await?;
    }
    Ok(catalog::COMPANIES.len())
}

/// Projects keep their catalog ids; the id sequence is moved past them so
/// later inserts do not collide.
async fn insert_projects(conn: &mut PgConnection) -> Result<usize, sqlx::Error> {
    for project in catalog::PROJECTS {
        sqlx::query(
            "INSERT INTO projects
                (id, company_id, title, description, location,
                 category, level, salary, date, visible)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(project.id)
        .bind(project.company_id)
        .bind(project.title)
        .bind(project.description)
        .bind(project.location)
        .bind(project.category)
        .bind(project.level)
        .bind(project.salary)
        .bind(project.date)
        .bind(project.visible)
        .execute(&mut *conn)
        .await?;
    }

    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('projects', 'id'), \
                       GREATEST((SELECT MAX(id) FROM projects), 1))",
    )
    .execute(&mut *conn)
    .await?;

    Ok(catalog::PROJECTS.len())
}

async fn insert_manage_projects(conn: &mut PgConnection) -> Result<usize, sqlx::Error> {
    for entry in catalog::MANAGE_PROJECTS {
        sqlx::query(
            "INSERT INTO manage_projects (company_id, title, location, date, applicants, visible)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(entry.company_id)
        .bind(entry.title)
        .bind(entry.location)
        .bind(entry.date)
        .bind(entry.applicants)
        .bind(entry.visible)
        .execute(&mut *conn)
        .await?;
    }
    Ok(catalog::MANAGE_PROJECTS.len())
}

async fn insert_projects_joined(
    conn: &mut PgConnection,
    owner: DbId,
) -> Result<usize, sqlx::Error> {
    for entry in catalog::PROJECTS_JOINED {
        sqlx::query(
            "INSERT INTO projects_joined (company_id, user_id, title, location, date, status)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(entry.company_id)
        .bind(owner)
        .bind(entry.title)
        .bind(entry.location)
        .bind(entry.date)
        .bind(entry.status.as_str())
        .execute(&mut *conn)
        .await?;
    }
    Ok(catalog::PROJECTS_JOINED.len())
}

async fn insert_view_applications(conn: &mut PgConnection) -> Result<usize, sqlx::Error> {
    for entry in catalog::VIEW_APPLICATIONS {
        sqlx::query(
            "INSERT INTO view_applications (company_id, name, project_title, location)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(entry.company_id)
        .bind(entry.name)
        .bind(entry.project_title)
        .bind(entry.location)
        .execute(&mut *conn)
        .await?;
    }
    Ok(catalog::VIEW_APPLICATIONS.len())
}
