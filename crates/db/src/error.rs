//! Errors raised at the data-access boundary.

/// Failure of a repository call.
///
/// Most repositories return plain [`sqlx::Error`]; join-table repositories
/// return this type so a duplicate pair is reported as a distinct,
/// expected outcome instead of a driver error.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{entity} already exists: {detail}")]
    Duplicate { entity: &'static str, detail: String },

    /// The request references rows that exist but cannot be combined.
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// PostgreSQL SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Whether `err` is a unique-constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION))
}
