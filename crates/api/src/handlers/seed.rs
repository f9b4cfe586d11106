//! Handler for the catalog reseed.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use gigboard_db::seed::{self, SeedSummary};

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
    pub seeded: SeedSummary,
}

/// POST /api/seed
///
/// Replaces the catalog tables in one transaction. Without any user to own
/// the joined projects nothing is changed and the request fails with 500.
pub async fn run(State(state): State<AppState>) -> AppResult<Json<SeedResponse>> {
    let seeded = seed::reseed(&state.pool).await?;
    Ok(Json(SeedResponse {
        message: "Database seeded successfully",
        seeded,
    }))
}
