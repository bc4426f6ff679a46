//! Repository for sensor notifications and their types.

use logistica_core::pagination::{Page, PageParams};
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{
    CreateNotification, Notification, NotificationFilter, NotificationType,
};

const SELECT: &str = "SELECT n.id, n.sensor_id, n.notification_type_id,
        t.code AS notification_type, n.value, n.recorded_at
     FROM monitoreo.notifications n
     JOIN monitoreo.notification_types t ON t.id = n.notification_type_id";

pub struct NotificationRepo;

impl NotificationRepo {
    pub async fn list_types(pool: &PgPool) -> Result<Vec<NotificationType>, sqlx::Error> {
        sqlx::query_as::<_, NotificationType>(
            "SELECT id, code, name FROM monitoreo.notification_types ORDER BY code",
        )
        .fetch_all(pool)
        .await
    }

    /// Record a sensor reading. `recorded_at` defaults to now.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO monitoreo.notifications (sensor_id, notification_type_id, value, recorded_at)
             VALUES ($1, $2, $3, COALESCE($4, NOW()))
             RETURNING id",
        )
        .bind(input.sensor_id)
        .bind(input.notification_type_id)
        .bind(input.value)
        .bind(input.recorded_at)
        .fetch_one(pool)
        .await?;

        sqlx::query_as::<_, Notification>(&format!("{SELECT} WHERE n.id = $1"))
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Notifications for one sensor, most recent first.
    pub async fn list_for_sensor(
        pool: &PgPool,
        sensor_id: DbId,
        params: PageParams,
    ) -> Result<Page<Notification>, sqlx::Error> {
        let rows = sqlx::query_as::<_, Notification>(&format!(
            "{SELECT} WHERE n.sensor_id = $1
             ORDER BY n.recorded_at DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(sensor_id)
        .bind(params.limit)
        .bind(params.offset())
        .fetch_all(pool)
        .await?;
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM monitoreo.notifications WHERE sensor_id = $1")
                .bind(sensor_id)
                .fetch_one(pool)
                .await?;
        Ok(Page::new(rows, params, total))
    }

    /// All notifications, most recent first, optionally filtered by type.
    pub async fn list(
        pool: &PgPool,
        filter: &NotificationFilter,
        params: PageParams,
    ) -> Result<Page<Notification>, sqlx::Error> {
        let rows = sqlx::query_as::<_, Notification>(&format!(
            "{SELECT} WHERE ($1::uuid IS NULL OR n.notification_type_id = $1)
             ORDER BY n.recorded_at DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(filter.notification_type_id)
        .bind(params.limit)
        .bind(params.offset())
        .fetch_all(pool)
        .await?;
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM monitoreo.notifications
             WHERE ($1::uuid IS NULL OR notification_type_id = $1)",
        )
        .bind(filter.notification_type_id)
        .fetch_one(pool)
        .await?;
        Ok(Page::new(rows, params, total))
    }
}
