//! Company entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use gigboard_core::types::{CompanyId, Timestamp};

/// A company row from the `companies` table, keyed by its name slug.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: CompanyId,
    pub name: String,
    pub email: String,
    pub image: String,
    pub created_at: Timestamp,
}

/// DTO for creating a company. `id` is derived by the caller from `name`.
#[derive(Debug, Clone)]
pub struct CreateCompany {
    pub id: CompanyId,
    pub name: String,
    pub email: String,
    pub image: String,
}
