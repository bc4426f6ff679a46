//! Repository for operating conditions and the operation join table.

use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::operating_condition::{
    CreateOperatingCondition, LinkCondition, OperatingCondition, OperationCondition,
};

const COLUMNS: &str = "id, code, name, description, created_at, updated_at";

const DETAIL_QUERY: &str = "SELECT oc.id, oc.operation_id, oc.condition_id,
        c.code AS condition_code, c.name AS condition_name, oc.notes
     FROM gestion_maritima.operation_operating_conditions oc
     JOIN gestion_maritima.operating_conditions c ON c.id = oc.condition_id";

pub struct OperatingConditionRepo;

impl OperatingConditionRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateOperatingCondition,
    ) -> Result<OperatingCondition, sqlx::Error> {
        let query = format!(
            "INSERT INTO gestion_maritima.operating_conditions (code, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OperatingCondition>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// The condition catalogue is small; it is returned whole.
    pub async fn list(pool: &PgPool) -> Result<Vec<OperatingCondition>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM gestion_maritima.operating_conditions ORDER BY code");
        sqlx::query_as::<_, OperatingCondition>(&query)
            .fetch_all(pool)
            .await
    }

    /// Attach a condition to an operation.
    ///
    /// Returns [`DbError::Duplicate`] if the pair is already linked.
    pub async fn link(
        pool: &PgPool,
        operation_id: DbId,
        input: &LinkCondition,
    ) -> Result<OperationCondition, DbError> {
        let inserted: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO gestion_maritima.operation_operating_conditions
                (operation_id, condition_id, notes)
             VALUES ($1, $2, $3)
             ON CONFLICT (operation_id, condition_id) DO NOTHING
             RETURNING id",
        )
        .bind(operation_id)
        .bind(input.condition_id)
        .bind(&input.notes)
        .fetch_optional(pool)
        .await?;

        let Some(id) = inserted else {
            return Err(DbError::Duplicate {
                entity: "OperationCondition",
                detail: format!(
                    "condition {} is already attached to operation {operation_id}",
                    input.condition_id
                ),
            });
        };

        let row = sqlx::query_as::<_, OperationCondition>(&format!("{DETAIL_QUERY} WHERE oc.id = $1"))
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    pub async fn list_for_operation(
        pool: &PgPool,
        operation_id: DbId,
    ) -> Result<Vec<OperationCondition>, sqlx::Error> {
        sqlx::query_as::<_, OperationCondition>(&format!(
            "{DETAIL_QUERY} WHERE oc.operation_id = $1 ORDER BY c.code"
        ))
        .bind(operation_id)
        .fetch_all(pool)
        .await
    }

    pub async fn unlink(
        pool: &PgPool,
        operation_id: DbId,
        condition_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM gestion_maritima.operation_operating_conditions
             WHERE operation_id = $1 AND condition_id = $2",
        )
        .bind(operation_id)
        .bind(condition_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
