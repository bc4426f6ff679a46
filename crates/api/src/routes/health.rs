use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when PostgreSQL does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// GET /health. Answers 503 while the database is unreachable so load
/// balancers stop routing to this instance.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match logistica_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                database: "up",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    version: env!("CARGO_PKG_VERSION"),
                    database: "down",
                }),
            )
        }
    }
}

/// Mounted at the root, outside `/api/v1` and without authentication.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
