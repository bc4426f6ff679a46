//! Repository for the `gestion_reserva.clients` table.

use logistica_core::pagination::{Page, PageParams};
use logistica_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient, UpdateClient};

const COLUMNS: &str = "id, name, tax_id, email, phone, created_at, updated_at";

pub struct ClientRepo;

impl ClientRepo {
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO gestion_reserva.clients (name, tax_id, email, phone)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.tax_id)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gestion_reserva.clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List clients alphabetically.
    pub async fn list(pool: &PgPool, params: PageParams) -> Result<Page<Client>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gestion_reserva.clients
             ORDER BY name, tax_id
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Client>(&query)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gestion_reserva.clients")
            .fetch_one(pool)
            .await?;
        Ok(Page::new(rows, params, total))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE gestion_reserva.clients SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gestion_reserva.clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
