//! Project entity model, DTOs, and the company-expanded listing view.

use serde::Serialize;
use sqlx::FromRow;

use gigboard_core::catalog::{self, CatalogProject};
use gigboard_core::types::{CompanyId, DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub company_id: CompanyId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub level: String,
    pub salary: i32,
    /// Posting time in milliseconds since the Unix epoch.
    pub date: i64,
    pub visible: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub company_id: CompanyId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub level: String,
    pub salary: i32,
    pub date: i64,
    pub visible: bool,
}

/// The owning company's identity, embedded in project listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanySummary {
    #[serde(rename = "_id")]
    pub id: CompanyId,
    pub name: String,
    pub email: String,
}

/// A project with its company reference expanded to `{_id, name, email}`.
///
/// The expanded company keeps the `companyId` key it replaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithCompany {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub level: String,
    pub salary: i32,
    pub date: i64,
    pub visible: bool,
    #[serde(rename = "companyId")]
    pub company: CompanySummary,
}

/// Flat row produced by the projects/companies join.
#[derive(Debug, FromRow)]
pub(crate) struct ProjectWithCompanyRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub level: String,
    pub salary: i32,
    pub date: i64,
    pub visible: bool,
    pub company_id: CompanyId,
    pub company_name: String,
    pub company_email: String,
}

impl From<ProjectWithCompanyRow> for ProjectWithCompany {
    fn from(row: ProjectWithCompanyRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            location: row.location,
            category: row.category,
            level: row.level,
            salary: row.salary,
            date: row.date,
            visible: row.visible,
            company: CompanySummary {
                id: row.company_id,
                name: row.company_name,
                email: row.company_email,
            },
        }
    }
}

impl ProjectWithCompany {
    /// Build the listing entry for a bundled project.
    ///
    /// Returns `None` if the project names a company that is not bundled.
    pub fn from_catalog(project: &CatalogProject) -> Option<Self> {
        let company = catalog::company(project.company_id)?;
        Some(Self {
            id: project.id,
            title: project.title.to_string(),
            description: project.description.to_string(),
            location: project.location.to_string(),
            category: project.category.to_string(),
            level: project.level.to_string(),
            salary: project.salary,
            date: project.date,
            visible: project.visible,
            company: CompanySummary {
                id: company.id.to_string(),
                name: company.name.to_string(),
                email: company.email.to_string(),
            },
        })
    }

    /// The bundled listing, shaped exactly like a seeded database listing.
    pub fn fallback_listing() -> Vec<Self> {
        catalog::PROJECTS
            .iter()
            .filter_map(Self::from_catalog)
            .collect()
    }
}
