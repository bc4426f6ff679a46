//! Repository for the `compartido.languages` lookup.

use sqlx::PgPool;

use crate::models::language::Language;

pub struct LanguageRepo;

impl LanguageRepo {
    /// List all languages ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Language>, sqlx::Error> {
        sqlx::query_as::<_, Language>(
            "SELECT id, code, name FROM compartido.languages ORDER BY name",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Language>, sqlx::Error> {
        sqlx::query_as::<_, Language>(
            "SELECT id, code, name FROM compartido.languages WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(pool)
        .await
    }
}
