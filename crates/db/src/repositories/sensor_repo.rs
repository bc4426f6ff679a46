//! Repository for the `monitoreo.sensors` table.

use logistica_core::pagination::{Page, PageParams};
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::models::sensor::{CreateSensor, Sensor, UpdateSensor};

const COLUMNS: &str = "id, code, container_id, sensor_type, role, is_active, created_at, updated_at";

pub struct SensorRepo;

impl SensorRepo {
    pub async fn create(pool: &PgPool, input: &CreateSensor) -> Result<Sensor, sqlx::Error> {
        let query = format!(
            "INSERT INTO monitoreo.sensors (code, container_id, sensor_type, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sensor>(&query)
            .bind(&input.code)
            .bind(input.container_id)
            .bind(&input.sensor_type)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sensor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monitoreo.sensors WHERE id = $1");
        sqlx::query_as::<_, Sensor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, params: PageParams) -> Result<Page<Sensor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM monitoreo.sensors
             ORDER BY code
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Sensor>(&query)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM monitoreo.sensors")
            .fetch_one(pool)
            .await?;
        Ok(Page::new(rows, params, total))
    }

    /// All sensors mounted on a container.
    pub async fn list_by_container(
        pool: &PgPool,
        container_id: DbId,
    ) -> Result<Vec<Sensor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM monitoreo.sensors WHERE container_id = $1 ORDER BY code"
        );
        sqlx::query_as::<_, Sensor>(&query)
            .bind(container_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSensor,
    ) -> Result<Option<Sensor>, sqlx::Error> {
        let query = format!(
            "UPDATE monitoreo.sensors SET
                sensor_type = COALESCE($2, sensor_type),
                role = COALESCE($3, role),
                is_active = COALESCE($4, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sensor>(&query)
            .bind(id)
            .bind(&input.sensor_type)
            .bind(&input.role)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM monitoreo.sensors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
