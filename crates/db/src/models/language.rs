//! Shared language lookup.

use serde::Serialize;
use sqlx::FromRow;
use logistica_core::types::DbId;

/// A row from `compartido.languages`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Language {
    pub id: DbId,
    pub code: String,
    pub name: String,
}
