//! Repository for the `gestion_reserva.shipping_routes` table.

use logistica_core::pagination::{Page, PageParams};
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::models::shipping_route::{CreateShippingRoute, ShippingRoute, UpdateShippingRoute};

const COLUMNS: &str = "id, code, origin, destination, transit_days, created_at, updated_at";

pub struct ShippingRouteRepo;

impl ShippingRouteRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateShippingRoute,
    ) -> Result<ShippingRoute, sqlx::Error> {
        let query = format!(
            "INSERT INTO gestion_reserva.shipping_routes (code, origin, destination, transit_days)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShippingRoute>(&query)
            .bind(&input.code)
            .bind(&input.origin)
            .bind(&input.destination)
            .bind(input.transit_days)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShippingRoute>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gestion_reserva.shipping_routes WHERE id = $1");
        sqlx::query_as::<_, ShippingRoute>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: PageParams,
    ) -> Result<Page<ShippingRoute>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gestion_reserva.shipping_routes
             ORDER BY code
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, ShippingRoute>(&query)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gestion_reserva.shipping_routes")
            .fetch_one(pool)
            .await?;
        Ok(Page::new(rows, params, total))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShippingRoute,
    ) -> Result<Option<ShippingRoute>, sqlx::Error> {
        let query = format!(
            "UPDATE gestion_reserva.shipping_routes SET
                origin = COALESCE($2, origin),
                destination = COALESCE($3, destination),
                transit_days = COALESCE($4, transit_days)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShippingRoute>(&query)
            .bind(id)
            .bind(&input.origin)
            .bind(&input.destination)
            .bind(input.transit_days)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gestion_reserva.shipping_routes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
