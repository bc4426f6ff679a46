//! Repository for certifications and the `operation_certifications` join table.

use logistica_core::pagination::{Page, PageParams};
use logistica_core::status::ApprovalStatus;
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::certification::{
    Certification, CreateCertification, OperationCertification, OperationCertificationDetail,
    UpdateCertification,
};

const COLUMNS: &str = "id, code, name, issued_at, expires_at, country, created_at, updated_at";

const LINK_COLUMNS: &str =
    "id, operation_id, certification_id, approval_status, approved_at, created_at, updated_at";

pub struct CertificationRepo;

impl CertificationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCertification,
    ) -> Result<Certification, sqlx::Error> {
        let query = format!(
            "INSERT INTO gestion_maritima.certifications (code, name, issued_at, expires_at, country)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certification>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(input.issued_at)
            .bind(input.expires_at)
            .bind(&input.country)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Certification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gestion_maritima.certifications WHERE id = $1");
        sqlx::query_as::<_, Certification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List certifications, soonest expiry first.
    pub async fn list(
        pool: &PgPool,
        params: PageParams,
    ) -> Result<Page<Certification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gestion_maritima.certifications
             ORDER BY expires_at, code
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Certification>(&query)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM gestion_maritima.certifications")
                .fetch_one(pool)
                .await?;
        Ok(Page::new(rows, params, total))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCertification,
    ) -> Result<Option<Certification>, sqlx::Error> {
        let query = format!(
            "UPDATE gestion_maritima.certifications SET
                name = COALESCE($2, name),
                issued_at = COALESCE($3, issued_at),
                expires_at = COALESCE($4, expires_at),
                country = COALESCE($5, country)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certification>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.issued_at)
            .bind(input.expires_at)
            .bind(&input.country)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gestion_maritima.certifications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Operation <-> certification links
    // -----------------------------------------------------------------------

    /// Attach a certification to an operation with `pending` approval.
    ///
    /// Returns [`DbError::Duplicate`] if the pair is already linked.
    pub async fn link(
        pool: &PgPool,
        operation_id: DbId,
        certification_id: DbId,
    ) -> Result<OperationCertification, DbError> {
        let query = format!(
            "INSERT INTO gestion_maritima.operation_certifications (operation_id, certification_id)
             VALUES ($1, $2)
             ON CONFLICT (operation_id, certification_id) DO NOTHING
             RETURNING {LINK_COLUMNS}"
        );
        sqlx::query_as::<_, OperationCertification>(&query)
            .bind(operation_id)
            .bind(certification_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DbError::Duplicate {
                entity: "OperationCertification",
                detail: format!(
                    "certification {certification_id} is already attached to operation {operation_id}"
                ),
            })
    }

    /// Certifications attached to an operation, with their approval state.
    pub async fn list_for_operation(
        pool: &PgPool,
        operation_id: DbId,
    ) -> Result<Vec<OperationCertificationDetail>, sqlx::Error> {
        sqlx::query_as::<_, OperationCertificationDetail>(
            "SELECT oc.id, oc.operation_id, oc.certification_id,
                    c.code AS certification_code, c.name AS certification_name, c.expires_at,
                    oc.approval_status, oc.approved_at
             FROM gestion_maritima.operation_certifications oc
             JOIN gestion_maritima.certifications c ON c.id = oc.certification_id
             WHERE oc.operation_id = $1
             ORDER BY c.code",
        )
        .bind(operation_id)
        .fetch_all(pool)
        .await
    }

    pub async fn find_link(
        pool: &PgPool,
        operation_id: DbId,
        certification_id: DbId,
    ) -> Result<Option<OperationCertification>, sqlx::Error> {
        let query = format!(
            "SELECT {LINK_COLUMNS} FROM gestion_maritima.operation_certifications
             WHERE operation_id = $1 AND certification_id = $2"
        );
        sqlx::query_as::<_, OperationCertification>(&query)
            .bind(operation_id)
            .bind(certification_id)
            .fetch_optional(pool)
            .await
    }

    /// Record an approval decision on a link that is still pending.
    /// `approved_at` is stamped only on approval. `None` when the link is
    /// missing or was already reviewed.
    pub async fn set_approval(
        pool: &PgPool,
        operation_id: DbId,
        certification_id: DbId,
        status: ApprovalStatus,
    ) -> Result<Option<OperationCertification>, sqlx::Error> {
        let query = format!(
            "UPDATE gestion_maritima.operation_certifications SET
                approval_status = $3,
                approved_at = CASE WHEN $3 = 'approved' THEN NOW() ELSE NULL END
             WHERE operation_id = $1 AND certification_id = $2
               AND approval_status = 'pending'
             RETURNING {LINK_COLUMNS}"
        );
        sqlx::query_as::<_, OperationCertification>(&query)
            .bind(operation_id)
            .bind(certification_id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    pub async fn unlink(
        pool: &PgPool,
        operation_id: DbId,
        certification_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM gestion_maritima.operation_certifications
             WHERE operation_id = $1 AND certification_id = $2",
        )
        .bind(operation_id)
        .bind(certification_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
