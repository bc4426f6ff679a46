//! Repository for the `monitoreo.containers` table.

use logistica_core::pagination::{Page, PageParams};
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::models::container::{Container, CreateContainer, UpdateContainer};

const COLUMNS: &str = "id, code, container_type, operation_id, created_at, updated_at";

pub struct ContainerRepo;

impl ContainerRepo {
    pub async fn create(pool: &PgPool, input: &CreateContainer) -> Result<Container, sqlx::Error> {
        let query = format!(
            "INSERT INTO monitoreo.containers (code, container_type, operation_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Container>(&query)
            .bind(&input.code)
            .bind(&input.container_type)
            .bind(input.operation_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Container>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monitoreo.containers WHERE id = $1");
        sqlx::query_as::<_, Container>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, params: PageParams) -> Result<Page<Container>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM monitoreo.containers
             ORDER BY code
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Container>(&query)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM monitoreo.containers")
            .fetch_one(pool)
            .await?;
        Ok(Page::new(rows, params, total))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContainer,
    ) -> Result<Option<Container>, sqlx::Error> {
        let query = format!(
            "UPDATE monitoreo.containers SET
                container_type = COALESCE($2, container_type),
                operation_id = COALESCE($3, operation_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Container>(&query)
            .bind(id)
            .bind(&input.container_type)
            .bind(input.operation_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a container. Its sensors and their notifications cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM monitoreo.containers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
