//! Repository for the `gestion_reserva.tariffs` table.

use logistica_core::pagination::{Page, PageParams};
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::models::tariff::{CreateTariff, Tariff, TariffFilter, UpdateTariff};

const COLUMNS: &str =
    "id, code, route_id, container_type, amount_cents, currency, created_at, updated_at";

const DEFAULT_CURRENCY: &str = "USD";

pub struct TariffRepo;

impl TariffRepo {
    /// Insert a tariff. Currency falls back to `USD`.
    pub async fn create(pool: &PgPool, input: &CreateTariff) -> Result<Tariff, sqlx::Error> {
        let query = format!(
            "INSERT INTO gestion_reserva.tariffs
                (code, route_id, container_type, amount_cents, currency)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tariff>(&query)
            .bind(&input.code)
            .bind(input.route_id)
            .bind(&input.container_type)
            .bind(input.amount_cents)
            .bind(input.currency.as_deref().unwrap_or(DEFAULT_CURRENCY))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tariff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gestion_reserva.tariffs WHERE id = $1");
        sqlx::query_as::<_, Tariff>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tariffs ordered by code, optionally restricted to one route.
    pub async fn list(
        pool: &PgPool,
        filter: &TariffFilter,
        params: PageParams,
    ) -> Result<Page<Tariff>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gestion_reserva.tariffs
             WHERE ($1::uuid IS NULL OR route_id = $1)
             ORDER BY code
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, Tariff>(&query)
            .bind(filter.route_id)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM gestion_reserva.tariffs
             WHERE ($1::uuid IS NULL OR route_id = $1)",
        )
        .bind(filter.route_id)
        .fetch_one(pool)
        .await?;
        Ok(Page::new(rows, params, total))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTariff,
    ) -> Result<Option<Tariff>, sqlx::Error> {
        let query = format!(
            "UPDATE gestion_reserva.tariffs SET
                container_type = COALESCE($2, container_type),
                amount_cents = COALESCE($3, amount_cents),
                currency = COALESCE($4, currency)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tariff>(&query)
            .bind(id)
            .bind(&input.container_type)
            .bind(input.amount_cents)
            .bind(&input.currency)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gestion_reserva.tariffs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
