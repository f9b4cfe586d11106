//! Joined-project entity model.

use serde::Serialize;
use sqlx::FromRow;

use gigboard_core::catalog::JoinStatus;
use gigboard_core::types::{CompanyId, DbId};

/// A row from the `projects_joined` table: a project a user has taken on.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectJoined {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub company_id: CompanyId,
    pub user_id: DbId,
    pub title: String,
    pub location: String,
    pub date: String,
    #[sqlx(try_from = "String")]
    pub status: JoinStatus,
}
