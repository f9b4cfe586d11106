/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Companies are keyed by a slug derived from their name.
pub type CompanyId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
