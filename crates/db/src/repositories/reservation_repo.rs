//! Repository for the `gestion_reserva.reservations` table.

use logistica_core::pagination::{Page, PageParams};
use logistica_core::status::ReservationStatus;
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::models::reservation::{
    CreateReservation, Reservation, ReservationFilter, UpdateReservation,
};

const COLUMNS: &str = "id, code, client_id, route_id, tariff_id, container_count, reserved_for, \
                       status, notes, created_at, updated_at";

const FILTER: &str =
    "($1::text IS NULL OR status = $1) AND ($2::uuid IS NULL OR client_id = $2)";

pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a reservation in `pending` status.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReservation,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO gestion_reserva.reservations
                (code, client_id, route_id, tariff_id, container_count, reserved_for, status, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(&input.code)
            .bind(input.client_id)
            .bind(input.route_id)
            .bind(input.tariff_id)
            .bind(input.container_count)
            .bind(input.reserved_for)
            .bind(ReservationStatus::Pending.as_str())
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gestion_reserva.reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reservations by travel date, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &ReservationFilter,
        params: PageParams,
    ) -> Result<Page<Reservation>, sqlx::Error> {
        let status = filter.status.map(ReservationStatus::as_str);
        let query = format!(
            "SELECT {COLUMNS} FROM gestion_reserva.reservations
             WHERE {FILTER}
             ORDER BY reserved_for DESC, code
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, Reservation>(&query)
            .bind(status)
            .bind(filter.client_id)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM gestion_reserva.reservations WHERE {FILTER}"
        ))
        .bind(status)
        .bind(filter.client_id)
        .fetch_one(pool)
        .await?;
        Ok(Page::new(rows, params, total))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReservation,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!(
            "UPDATE gestion_reserva.reservations SET
                tariff_id = COALESCE($2, tariff_id),
                container_count = COALESCE($3, container_count),
                reserved_for = COALESCE($4, reserved_for),
                status = COALESCE($5, status),
                notes = COALESCE($6, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(input.tariff_id)
            .bind(input.container_count)
            .bind(input.reserved_for)
            .bind(input.status.map(ReservationStatus::as_str))
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gestion_reserva.reservations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
