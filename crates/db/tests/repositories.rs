//! Integration tests for the repository layer.
//!
//! Exercises the repositories against a real database:
//! - Unique constraints on user and company emails
//! - Company-expanded project listing
//! - Hard delete and its cascade to applications
//! - Identity-provider user upsert, linking, and delete

use sqlx::PgPool;

use gigboard_db::models::application::CreateApplication;
use gigboard_db::models::company::CreateCompany;
use gigboard_db::models::project::CreateProject;
use gigboard_db::models::user::{CreateUser, UpsertExternalUser};
use gigboard_db::repositories::{ApplicationRepo, CompanyRepo, ProjectRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        name: "Test User".to_string(),
        image: "avatar.png".to_string(),
    }
}

fn new_company(id: &str, email: &str) -> CreateCompany {
    CreateCompany {
        id: id.to_string(),
        name: id.to_uppercase(),
        email: email.to_string(),
        image: String::new(),
    }
}

fn new_project(company_id: &str, title: &str) -> CreateProject {
    CreateProject {
        company_id: company_id.to_string(),
        title: title.to_string(),
        description: "desc".to_string(),
        location: "Remote".to_string(),
        category: "Backend".to_string(),
        level: "Senior".to_string(),
        salary: 1000,
        date: 1_700_000_000_000,
        visible: true,
    }
}

fn unique_violation_constraint(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            db_err.constraint().map(str::to_string)
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_user_email_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup@test.com")).await.unwrap();

    let err = UserRepo::create(&pool, &new_user("dup@test.com"))
        .await
        .unwrap_err();

    assert_eq!(
        unique_violation_constraint(&err).as_deref(),
        Some("uq_users_email")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_email_returns_created_user(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("find@test.com")).await.unwrap();

    let found = UserRepo::find_by_email(&pool, "find@test.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash.as_deref(), Some("hash"));
    assert!(UserRepo::find_by_email(&pool, "missing@test.com")
        .await
        .unwrap()
        .is_none());

    let by_id = UserRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "find@test.com");
    assert!(UserRepo::find_by_id(&pool, created.id + 1).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_external_creates_then_updates(pool: PgPool) {
    let mut input = UpsertExternalUser {
        external_id: "user_abc".to_string(),
        email: "ext@test.com".to_string(),
        name: "Ext User".to_string(),
        image: "a.png".to_string(),
    };
    let created = UserRepo::upsert_external(&pool, &input).await.unwrap();
    assert!(created.password_hash.is_none());

    input.name = "Renamed".to_string();
    let updated = UserRepo::upsert_external(&pool, &input).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Renamed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn link_external_attaches_provider_id_to_password_account(pool: PgPool) {
    let local = UserRepo::create(&pool, &new_user("both@test.com")).await.unwrap();
    let input = UpsertExternalUser {
        external_id: "user_linked".to_string(),
        email: "both@test.com".to_string(),
        name: "Provider Name".to_string(),
        image: "p.png".to_string(),
    };

    let linked = UserRepo::link_external(&pool, &input).await.unwrap().unwrap();

    assert_eq!(linked.id, local.id);
    assert_eq!(linked.external_id.as_deref(), Some("user_linked"));
    assert_eq!(linked.name, "Provider Name");
    assert_eq!(linked.password_hash.as_deref(), Some("hash"));

    // Already linked, so a second provider id cannot claim the row.
    let other = UpsertExternalUser {
        external_id: "user_other".to_string(),
        ..input
    };
    assert!(UserRepo::link_external(&pool, &other).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn link_external_without_matching_email_returns_none(pool: PgPool) {
    let input = UpsertExternalUser {
        external_id: "user_new".to_string(),
        email: "nobody@test.com".to_string(),
        name: "New".to_string(),
        image: String::new(),
    };

    assert!(UserRepo::link_external(&pool, &input).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_by_external_id_reports_whether_a_row_went(pool: PgPool) {
    let input = UpsertExternalUser {
        external_id: "user_gone".to_string(),
        email: "gone@test.com".to_string(),
        name: "Gone".to_string(),
        image: String::new(),
    };
    UserRepo::upsert_external(&pool, &input).await.unwrap();

    assert!(UserRepo::delete_by_external_id(&pool, "user_gone").await.unwrap());
    assert!(!UserRepo::delete_by_external_id(&pool, "user_gone").await.unwrap());
}

// ---------------------------------------------------------------------------
// Companies and projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_company_email_violates_unique_constraint(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("one", "same@test.com"))
        .await
        .unwrap();

    let err = CompanyRepo::create(&pool, &new_company("two", "same@test.com"))
        .await
        .unwrap_err();

    assert_eq!(
        unique_violation_constraint(&err).as_deref(),
        Some("uq_companies_email")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_with_company_expands_name_and_email(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("acme", "acme@test.com"))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("acme", "Widget"))
        .await
        .unwrap();

    let listed = ProjectRepo::list_with_company(&pool).await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, project.id);
    assert_eq!(listed[0].company.id, "acme");
    assert_eq!(listed[0].company.name, "ACME");
    assert_eq!(listed[0].company.email, "acme@test.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_project_returns_false(pool: PgPool) {
    assert!(!ProjectRepo::delete(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_project_cascades_to_applications(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("acme", "acme@test.com"))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("acme", "Widget"))
        .await
        .unwrap();
    let user = UserRepo::create(&pool, &new_user("dev@test.com")).await.unwrap();
    ApplicationRepo::create(
        &pool,
        &CreateApplication {
            user_id: user.id,
            project_id: project.id,
            solution_link: "https://example.com/solution".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());

    assert!(ProjectRepo::find_by_id(&pool, project.id).await.unwrap().is_none());
    assert!(ApplicationRepo::list_for_project(&pool, project.id)
        .await
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_for_project_expands_user(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("acme", "acme@test.com"))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("acme", "Widget"))
        .await
        .unwrap();
    let other = ProjectRepo::create(&pool, &new_project("acme", "Gadget"))
        .await
        .unwrap();
    let user = UserRepo::create(&pool, &new_user("dev@test.com")).await.unwrap();

    for (project_id, link) in [(project.id, "https://a.example"), (other.id, "https://b.example")] {
        ApplicationRepo::create(
            &pool,
            &CreateApplication {
                user_id: user.id,
                project_id,
                solution_link: link.to_string(),
            },
        )
        .await
        .unwrap();
    }

    let listed = ApplicationRepo::list_for_project(&pool, project.id)
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].solution_link, "https://a.example");
    assert_eq!(listed[0].user.id, user.id);
    assert_eq!(listed[0].user.email, "dev@test.com");
    assert_eq!(listed[0].user.image, "avatar.png");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn application_for_unknown_project_is_rejected_by_foreign_key(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("dev@test.com")).await.unwrap();

    let err = ApplicationRepo::create(
        &pool,
        &CreateApplication {
            user_id: user.id,
            project_id: 424_242,
            solution_link: "https://x.example".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        sqlx::Error::Database(ref db_err) if db_err.code().as_deref() == Some("23503")
    ));
}
