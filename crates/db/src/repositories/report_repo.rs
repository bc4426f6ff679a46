//! Repository for reports and the incidents they cover.

use chrono::Utc;
use logistica_core::codes::{generate_code, REPORT_PREFIX};
use logistica_core::pagination::{Page, PageParams};
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::report::{CreateReport, GenerateReport, Report, ReportWithIncidents};

const COLUMNS: &str = "id, code, operation_id, report_date, detail, created_at, updated_at";

pub struct ReportRepo;

impl ReportRepo {
    /// Insert a report that is not tied to any incident.
    pub async fn create(pool: &PgPool, input: &CreateReport) -> Result<Report, sqlx::Error> {
        let now = Utc::now();
        let code = input
            .code
            .clone()
            .unwrap_or_else(|| generate_code(REPORT_PREFIX, now));
        let query = format!(
            "INSERT INTO operaciones_portuarias.reports (code, operation_id, report_date, detail)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(code)
            .bind(input.operation_id)
            .bind(input.report_date.unwrap_or_else(|| now.date_naive()))
            .bind(&input.detail)
            .fetch_one(pool)
            .await
    }

    /// Create a report for an operation and link the selected incidents.
    ///
    /// Every selected incident must belong to `input.operation_id`. An empty
    /// selection is accepted and yields a report with no links. The insert
    /// and links are written in one transaction.
    pub async fn generate(
        pool: &PgPool,
        input: &GenerateReport,
    ) -> Result<ReportWithIncidents, DbError> {
        let mut incident_ids = input.incident_ids.clone();
        incident_ids.sort_unstable();
        incident_ids.dedup();

        let mut tx = pool.begin().await?;

        if !incident_ids.is_empty() {
            let matching: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM operaciones_portuarias.incidents
                 WHERE id = ANY($1) AND operation_id = $2",
            )
            .bind(&incident_ids)
            .bind(input.operation_id)
            .fetch_one(&mut *tx)
            .await?;
            if matching != incident_ids.len() as i64 {
                return Err(DbError::Invalid(format!(
                    "Selected incidents do not all belong to operation {}",
                    input.operation_id
                )));
            }
        }

        let now = Utc::now();
        let code = input
            .code
            .clone()
            .unwrap_or_else(|| generate_code(REPORT_PREFIX, now));
        let query = format!(
            "INSERT INTO operaciones_portuarias.reports (code, operation_id, report_date, detail)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let report = sqlx::query_as::<_, Report>(&query)
            .bind(code)
            .bind(input.operation_id)
            .bind(input.report_date.unwrap_or_else(|| now.date_naive()))
            .bind(&input.detail)
            .fetch_one(&mut *tx)
            .await?;

        if !incident_ids.is_empty() {
            sqlx::query(
                "INSERT INTO operaciones_portuarias.report_incidents (report_id, incident_id)
                 SELECT $1, UNNEST($2::uuid[])",
            )
            .bind(report.id)
            .bind(&incident_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            report_id = %report.id,
            operation_id = %input.operation_id,
            incidents = incident_ids.len(),
            "Report generated",
        );

        Ok(ReportWithIncidents {
            report,
            incident_ids,
        })
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM operaciones_portuarias.reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A report together with the ids of its linked incidents.
    pub async fn find_with_incidents(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ReportWithIncidents>, sqlx::Error> {
        let Some(report) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let incident_ids: Vec<DbId> = sqlx::query_scalar(
            "SELECT incident_id FROM operaciones_portuarias.report_incidents
             WHERE report_id = $1
             ORDER BY incident_id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(Some(ReportWithIncidents {
            report,
            incident_ids,
        }))
    }

    /// List reports, newest report date first.
    pub async fn list(pool: &PgPool, params: PageParams) -> Result<Page<Report>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM operaciones_portuarias.reports
             ORDER BY report_date DESC, code
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Report>(&query)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM operaciones_portuarias.reports")
            .fetch_one(pool)
            .await?;
        Ok(Page::new(rows, params, total))
    }

    /// Delete a report. Incident links cascade; the incidents remain.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM operaciones_portuarias.reports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
