//! HTTP-level integration tests for application submission and listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;

/// Seed the catalog behind a registered user and return `(user_id, project_id)`.
async fn setup(pool: &PgPool) -> (i64, i64) {
    let user = post_json(
        common::build_test_app(pool.clone()),
        "/api/register",
        json!({ "email": "dev@test.com", "password": "pw", "name": "Dev", "image": "/dev.png" }),
    )
    .await;
    let user_id = body_json(user).await["_id"].as_i64().unwrap();

    let seeded = post_json(common::build_test_app(pool.clone()), "/api/seed", json!({})).await;
    assert_eq!(seeded.status(), StatusCode::OK);

    let project_id = gigboard_core::catalog::PROJECTS[0].id;
    (user_id, project_id)
}

fn application(user_id: i64, project_id: i64) -> Value {
    json!({ "userId": user_id, "projectId": project_id, "solutionLink": "https://git.test/a" })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_returns_created_application(pool: PgPool) {
    let (user_id, project_id) = setup(&pool).await;
    let app = common::build_test_app(pool);

    let body = application(user_id, project_id);
    let response = post_json(app, "/api/applications", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["_id"].is_i64());
    assert_eq!(json["userId"], user_id);
    assert_eq!(json["projectId"], project_id);
    assert_eq!(json["solutionLink"], "https://git.test/a");
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_submissions_are_accepted(pool: PgPool) {
    let (user_id, project_id) = setup(&pool).await;
    let body = application(user_id, project_id);

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/applications", body.clone()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(
        common::build_test_app(pool),
        &format!("/api/projects/{project_id}/applications"),
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_project_is_a_server_error(pool: PgPool) {
    let (user_id, _) = setup(&pool).await;
    let (app, reporter) = common::build_test_app_with_reporter(pool);

    let body = application(user_id, 999_999);
    let response = post_json(app, "/api/applications", body).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Server error");
    assert!(!json.to_string().contains("foreign key"));
    assert_eq!(reporter.events().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_expands_the_applicant(pool: PgPool) {
    let (user_id, project_id) = setup(&pool).await;
    let body = application(user_id, project_id);
    post_json(common::build_test_app(pool.clone()), "/api/applications", body).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/projects/{project_id}/applications"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["userId"]["_id"], user_id);
    assert_eq!(list[0]["userId"]["name"], "Dev");
    assert_eq!(list[0]["userId"]["email"], "dev@test.com");
    assert_eq!(list[0]["userId"]["image"], "/dev.png");
    assert_eq!(list[0]["projectId"], project_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_without_applications_lists_empty(pool: PgPool) {
    let (_, project_id) = setup(&pool).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/projects/{project_id}/applications"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
