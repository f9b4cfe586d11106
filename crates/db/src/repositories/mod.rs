//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod application_repo;
pub mod company_repo;
pub mod project_joined_repo;
pub mod project_repo;
pub mod user_repo;

pub use application_repo::ApplicationRepo;
pub use company_repo::CompanyRepo;
pub use project_joined_repo::ProjectJoinedRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
