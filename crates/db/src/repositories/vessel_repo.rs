//! Repository for the `gestion_maritima.vessels` table.

use logistica_core::pagination::{Page, PageParams};
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::models::vessel::{CreateVessel, UpdateVessel, Vessel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, name, imo_number, flag_country, created_at, updated_at";

/// Provides CRUD operations for vessels.
pub struct VesselRepo;

impl VesselRepo {
    /// Insert a new vessel, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVessel) -> Result<Vessel, sqlx::Error> {
        let query = format!(
            "INSERT INTO gestion_maritima.vessels (code, name, imo_number, flag_country)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vessel>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.imo_number)
            .bind(&input.flag_country)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vessel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gestion_maritima.vessels WHERE id = $1");
        sqlx::query_as::<_, Vessel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List vessels ordered by code.
    pub async fn list(pool: &PgPool, params: PageParams) -> Result<Page<Vessel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gestion_maritima.vessels ORDER BY code LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Vessel>(&query)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gestion_maritima.vessels")
            .fetch_one(pool)
            .await?;
        Ok(Page::new(rows, params, total))
    }

    /// Update a vessel. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVessel,
    ) -> Result<Option<Vessel>, sqlx::Error> {
        let query = format!(
            "UPDATE gestion_maritima.vessels SET
                name = COALESCE($2, name),
                imo_number = COALESCE($3, imo_number),
                flag_country = COALESCE($4, flag_country)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vessel>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.imo_number)
            .bind(&input.flag_country)
            .fetch_optional(pool)
            .await
    }

    /// Delete a vessel. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gestion_maritima.vessels WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
