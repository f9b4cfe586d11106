//! Application entity model and DTOs.
//!
//! An application is a user's solution submitted against a project.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gigboard_core::types::{DbId, Timestamp};

/// An application row from the `applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub user_id: DbId,
    pub project_id: DbId,
    pub solution_link: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting an application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplication {
    pub user_id: DbId,
    pub project_id: DbId,
    pub solution_link: String,
}

/// The submitting user's public profile, embedded in application listings.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantSummary {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub image: String,
}

/// An application with its user reference expanded to `{_id, name, email, image}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationWithUser {
    #[serde(rename = "_id")]
    pub id: DbId,
    #[serde(rename = "userId")]
    pub user: ApplicantSummary,
    pub project_id: DbId,
    pub solution_link: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, FromRow)]
pub(crate) struct ApplicationWithUserRow {
    pub id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub user_email: String,
    pub user_image: String,
    pub project_id: DbId,
    pub solution_link: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ApplicationWithUserRow> for ApplicationWithUser {
    fn from(row: ApplicationWithUserRow) -> Self {
        Self {
            id: row.id,
            user: ApplicantSummary {
                id: row.user_id,
                name: row.user_name,
                email: row.user_email,
                image: row.user_image,
            },
            project_id: row.project_id,
            solution_link: row.solution_link,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
