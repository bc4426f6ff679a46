//! Repository for the `gestion_maritima.operations` table.

use logistica_core::pagination::{Page, PageParams};
use logistica_core::status::OperationStatus;
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::models::operation::{
    CreateOperation, Operation, OperationFilter, OperationSummary, StatusCount, UpdateOperation,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, vessel_id, status, container_count, progress, origin_port, \
                       destination_port, departed_at, estimated_arrival, created_at, updated_at";

/// Optional filters, `NULL` meaning "any".
const FILTER: &str = "($1::text IS NULL OR status = $1) AND ($2::uuid IS NULL OR vessel_id = $2)";

/// Provides CRUD operations for maritime operations.
pub struct OperationRepo;

impl OperationRepo {
    /// Insert a new operation, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `registered`.
    pub async fn create(pool: &PgPool, input: &CreateOperation) -> Result<Operation, sqlx::Error> {
        let status = input.status.unwrap_or(OperationStatus::Registered);
        let query = format!(
            "INSERT INTO gestion_maritima.operations
                (code, vessel_id, status, container_count, progress, origin_port,
                 destination_port, departed_at, estimated_arrival)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, 0), $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Operation>(&query)
            .bind(&input.code)
            .bind(input.vessel_id)
            .bind(status.as_str())
            .bind(input.container_count)
            .bind(input.progress)
            .bind(&input.origin_port)
            .bind(&input.destination_port)
            .bind(input.departed_at)
            .bind(input.estimated_arrival)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Operation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gestion_maritima.operations WHERE id = $1");
        sqlx::query_as::<_, Operation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Operation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gestion_maritima.operations WHERE code = $1");
        sqlx::query_as::<_, Operation>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List operations, most recently created first.
    pub async fn list(
        pool: &PgPool,
        filter: &OperationFilter,
        params: PageParams,
    ) -> Result<Page<Operation>, sqlx::Error> {
        let status = filter.status.map(OperationStatus::as_str);
        let query = format!(
            "SELECT {COLUMNS} FROM gestion_maritima.operations
             WHERE {FILTER}
             ORDER BY created_at DESC, code
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, Operation>(&query)
            .bind(status)
            .bind(filter.vessel_id)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM gestion_maritima.operations WHERE {FILTER}"
        ))
        .bind(status)
        .bind(filter.vessel_id)
        .fetch_one(pool)
        .await?;
        Ok(Page::new(rows, params, total))
    }

    /// Update an operation. Only non-`None` fields in `input` are applied.
    ///
    /// Completed and cancelled operations are left untouched. Returns `None`
    /// if no row with the given `id` exists or the operation is finished.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOperation,
    ) -> Result<Option<Operation>, sqlx::Error> {
        let query = format!(
            "UPDATE gestion_maritima.operations SET
                vessel_id = COALESCE($2, vessel_id),
                container_count = COALESCE($3, container_count),
                progress = COALESCE($4, progress),
                origin_port = COALESCE($5, origin_port),
                destination_port = COALESCE($6, destination_port),
                departed_at = COALESCE($7, departed_at),
                estimated_arrival = COALESCE($8, estimated_arrival)
             WHERE id = $1 AND status NOT IN ('completed', 'cancelled')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Operation>(&query)
            .bind(id)
            .bind(input.vessel_id)
            .bind(input.container_count)
            .bind(input.progress)
            .bind(&input.origin_port)
            .bind(&input.destination_port)
            .bind(input.departed_at)
            .bind(input.estimated_arrival)
            .fetch_optional(pool)
            .await
    }

    /// Persist a status change. Moving to `completed` also sets progress to 100.
    ///
    /// The caller is responsible for validating the transition.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: OperationStatus,
    ) -> Result<Option<Operation>, sqlx::Error> {
        let query = format!(
            "UPDATE gestion_maritima.operations SET
                status = $2,
                progress = CASE WHEN $2 = 'completed' THEN 100 ELSE progress END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let operation = sqlx::query_as::<_, Operation>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await?;
        if operation.is_some() {
            tracing::info!(operation_id = %id, status = %status, "Operation status changed");
        }
        Ok(operation)
    }

    /// Delete an operation. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gestion_maritima.operations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate counts for the operations dashboard.
    pub async fn summary(pool: &PgPool) -> Result<OperationSummary, sqlx::Error> {
        let by_status = sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count
             FROM gestion_maritima.operations
             GROUP BY status
             ORDER BY status",
        )
        .fetch_all(pool)
        .await?;

        let (average_active_progress, containers_in_flight): (f64, i64) = sqlx::query_as(
            "SELECT COALESCE(AVG(progress)::float8, 0),
                    COALESCE(SUM(container_count), 0)::int8
             FROM gestion_maritima.operations
             WHERE status NOT IN ('completed', 'cancelled')",
        )
        .fetch_one(pool)
        .await?;

        let total = by_status.iter().map(|s| s.count).sum();
        Ok(OperationSummary {
            total,
            by_status,
            average_active_progress,
            containers_in_flight,
        })
    }
}
