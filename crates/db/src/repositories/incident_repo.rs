//! Repository for incidents and their type/status lookups.

use logistica_core::pagination::{Page, PageParams};
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::models::incident::{
    CreateIncident, Incident, IncidentFilter, IncidentLookup, UpdateIncident,
};

const COLUMNS: &str = "id, code, operation_id, incident_type_id, incident_status_id, description, \
                       severity, occurred_at, created_at, updated_at";

/// Status assigned to new incidents when the caller does not pick one.
pub const DEFAULT_STATUS_CODE: &str = "open";

pub struct IncidentRepo;

impl IncidentRepo {
    pub async fn list_types(pool: &PgPool) -> Result<Vec<IncidentLookup>, sqlx::Error> {
        sqlx::query_as::<_, IncidentLookup>(
            "SELECT id, code, name FROM operaciones_portuarias.incident_types ORDER BY name",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn list_statuses(pool: &PgPool) -> Result<Vec<IncidentLookup>, sqlx::Error> {
        sqlx::query_as::<_, IncidentLookup>(
            "SELECT id, code, name FROM operaciones_portuarias.incident_statuses ORDER BY name",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_status_by_code(
        pool: &PgPool,
        code: &str,
    ) -> Result<Option<IncidentLookup>, sqlx::Error> {
        sqlx::query_as::<_, IncidentLookup>(
            "SELECT id, code, name FROM operaciones_portuarias.incident_statuses WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(pool)
        .await
    }

    /// Insert an incident. A missing status falls back to `open`.
    pub async fn create(pool: &PgPool, input: &CreateIncident) -> Result<Incident, sqlx::Error> {
        let query = format!(
            "INSERT INTO operaciones_portuarias.incidents
                (code, operation_id, incident_type_id, incident_status_id,
                 description, severity, occurred_at)
             VALUES ($1, $2, $3,
                     COALESCE($4, (SELECT id FROM operaciones_portuarias.incident_statuses
                                   WHERE code = $8)),
                     $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(&input.code)
            .bind(input.operation_id)
            .bind(input.incident_type_id)
            .bind(input.incident_status_id)
            .bind(&input.description)
            .bind(input.severity)
            .bind(input.occurred_at)
            .bind(DEFAULT_STATUS_CODE)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Incident>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM operaciones_portuarias.incidents WHERE id = $1");
        sqlx::query_as::<_, Incident>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List incidents, most recent first, optionally for one operation.
    pub async fn list(
        pool: &PgPool,
        filter: &IncidentFilter,
        params: PageParams,
    ) -> Result<Page<Incident>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM operaciones_portuarias.incidents
             WHERE ($1::uuid IS NULL OR operation_id = $1)
             ORDER BY occurred_at DESC, code
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, Incident>(&query)
            .bind(filter.operation_id)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM operaciones_portuarias.incidents
             WHERE ($1::uuid IS NULL OR operation_id = $1)",
        )
        .bind(filter.operation_id)
        .fetch_one(pool)
        .await?;
        Ok(Page::new(rows, params, total))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIncident,
    ) -> Result<Option<Incident>, sqlx::Error> {
        let query = format!(
            "UPDATE operaciones_portuarias.incidents SET
                incident_type_id = COALESCE($2, incident_type_id),
                incident_status_id = COALESCE($3, incident_status_id),
                description = COALESCE($4, description),
                severity = COALESCE($5, severity),
                occurred_at = COALESCE($6, occurred_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(id)
            .bind(input.incident_type_id)
            .bind(input.incident_status_id)
            .bind(&input.description)
            .bind(input.severity)
            .bind(input.occurred_at)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM operaciones_portuarias.incidents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
