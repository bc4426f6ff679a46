//! Repository for the `operaciones_portuarias.port_operations` table.

use logistica_core::pagination::{Page, PageParams};
use logistica_core::status::PortOperationStatus;
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::models::port_operation::{CreatePortOperation, PortOperation, UpdatePortOperation};

const COLUMNS: &str = "id, code, operation_id, berth, kind, status, scheduled_at, completed_at, \
                       created_at, updated_at";

pub struct PortOperationRepo;

impl PortOperationRepo {
    /// Insert a port operation in `scheduled` status.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePortOperation,
    ) -> Result<PortOperation, sqlx::Error> {
        let query = format!(
            "INSERT INTO operaciones_portuarias.port_operations
                (code, operation_id, berth, kind, status, scheduled_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortOperation>(&query)
            .bind(&input.code)
            .bind(input.operation_id)
            .bind(&input.berth)
            .bind(input.kind.as_str())
            .bind(PortOperationStatus::Scheduled.as_str())
            .bind(input.scheduled_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PortOperation>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM operaciones_portuarias.port_operations WHERE id = $1");
        sqlx::query_as::<_, PortOperation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List port operations by schedule, soonest first.
    pub async fn list(
        pool: &PgPool,
        params: PageParams,
    ) -> Result<Page<PortOperation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM operaciones_portuarias.port_operations
             ORDER BY scheduled_at, code
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, PortOperation>(&query)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM operaciones_portuarias.port_operations")
                .fetch_one(pool)
                .await?;
        Ok(Page::new(rows, params, total))
    }

    /// Apply non-`None` fields. Moving to `completed` stamps `completed_at`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePortOperation,
    ) -> Result<Option<PortOperation>, sqlx::Error> {
        let query = format!(
            "UPDATE operaciones_portuarias.port_operations SET
                berth = COALESCE($2, berth),
                status = COALESCE($3, status),
                scheduled_at = COALESCE($4, scheduled_at),
                completed_at = CASE
                    WHEN $3 = 'completed' AND completed_at IS NULL THEN NOW()
                    ELSE completed_at
                END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortOperation>(&query)
            .bind(id)
            .bind(&input.berth)
            .bind(input.status.map(PortOperationStatus::as_str))
            .bind(input.scheduled_at)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM operaciones_portuarias.port_operations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
