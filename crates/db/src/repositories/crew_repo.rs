//! Repository for crew members and their spoken languages.

use logistica_core::pagination::{Page, PageParams};
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::crew::{
    AddCrewLanguage, CreateCrewMember, CrewMember, CrewMemberLanguage, UpdateCrewMember,
};

const COLUMNS: &str =
    "id, first_name, last_name, rank, nationality, operation_id, created_at, updated_at";

pub struct CrewRepo;

impl CrewRepo {
    pub async fn create(pool: &PgPool, input: &CreateCrewMember) -> Result<CrewMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO gestion_maritima.crew_members
                (first_name, last_name, rank, nationality, operation_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CrewMember>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.rank)
            .bind(&input.nationality)
            .bind(input.operation_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CrewMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gestion_maritima.crew_members WHERE id = $1");
        sqlx::query_as::<_, CrewMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List crew members by last name.
    pub async fn list(pool: &PgPool, params: PageParams) -> Result<Page<CrewMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gestion_maritima.crew_members
             ORDER BY last_name, first_name
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, CrewMember>(&query)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gestion_maritima.crew_members")
            .fetch_one(pool)
            .await?;
        Ok(Page::new(rows, params, total))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCrewMember,
    ) -> Result<Option<CrewMember>, sqlx::Error> {
        let query = format!(
            "UPDATE gestion_maritima.crew_members SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                rank = COALESCE($4, rank),
                nationality = COALESCE($5, nationality),
                operation_id = COALESCE($6, operation_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CrewMember>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.rank)
            .bind(&input.nationality)
            .bind(input.operation_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gestion_maritima.crew_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Languages
    // -----------------------------------------------------------------------

    /// Record that a crew member speaks a language.
    ///
    /// Returns [`DbError::Duplicate`] if the language is already recorded.
    pub async fn add_language(
        pool: &PgPool,
        crew_member_id: DbId,
        input: &AddCrewLanguage,
    ) -> Result<CrewMemberLanguage, DbError> {
        let inserted: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO gestion_maritima.crew_member_languages
                (crew_member_id, language_id, proficiency_level)
             VALUES ($1, $2, $3)
             ON CONFLICT (crew_member_id, language_id) DO NOTHING
             RETURNING id",
        )
        .bind(crew_member_id)
        .bind(input.language_id)
        .bind(&input.proficiency_level)
        .fetch_optional(pool)
        .await?;

        let Some(id) = inserted else {
            return Err(DbError::Duplicate {
                entity: "CrewMemberLanguage",
                detail: format!(
                    "language {} is already recorded for crew member {crew_member_id}",
                    input.language_id
                ),
            });
        };

        let row = sqlx::query_as::<_, CrewMemberLanguage>(
            "SELECT cl.id, cl.crew_member_id, cl.language_id,
                    l.code AS language_code, l.name AS language_name, cl.proficiency_level
             FROM gestion_maritima.crew_member_languages cl
             JOIN compartido.languages l ON l.id = cl.language_id
             WHERE cl.id = $1",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    pub async fn list_languages(
        pool: &PgPool,
        crew_member_id: DbId,
    ) -> Result<Vec<CrewMemberLanguage>, sqlx::Error> {
        sqlx::query_as::<_, CrewMemberLanguage>(
            "SELECT cl.id, cl.crew_member_id, cl.language_id,
                    l.code AS language_code, l.name AS language_name, cl.proficiency_level
             FROM gestion_maritima.crew_member_languages cl
             JOIN compartido.languages l ON l.id = cl.language_id
             WHERE cl.crew_member_id = $1
             ORDER BY l.name",
        )
        .bind(crew_member_id)
        .fetch_all(pool)
        .await
    }

    pub async fn remove_language(
        pool: &PgPool,
        crew_member_id: DbId,
        language_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM gestion_maritima.crew_member_languages
             WHERE crew_member_id = $1 AND language_id = $2",
        )
        .bind(crew_member_id)
        .bind(language_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
