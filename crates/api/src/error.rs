//! Handler errors and their `{message, code}` JSON rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use logistica_core::error::CoreError;
use logistica_db::error::{FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION};
use logistica_db::DbError;
use serde::Serialize;

/// PostgreSQL SQLSTATE for `check_violation`.
const CHECK_VIOLATION: &str = "23514";

/// Everything a handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request is well formed but cannot be applied, e.g. a reading for
    /// an inactive sensor.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Logged in full, answered with a generic message.
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// The body of every non-2xx answer.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: &'static str,
}

impl ErrorBody {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "An internal error occurred")
    }
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Duplicate { entity, detail } => {
                CoreError::Conflict(format!("{entity} already exists: {detail}")).into()
            }
            DbError::Invalid(msg) => AppError::BadRequest(msg),
            DbError::Sqlx(e) => AppError::Database(e),
        }
    }
}

/// Names every rejected field, sorted, without echoing submitted values.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| &**k).collect();
        fields.sort_unstable();
        CoreError::Validation(format!("Invalid fields: {}", fields.join(", "))).into()
    }
}

impl AppError {
    fn to_response_parts(&self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => database_parts(err),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorBody::new("BAD_REQUEST", msg.as_str()))
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_response_parts();
        (status, Json(body)).into_response()
    }
}

fn core_parts(err: &CoreError) -> (StatusCode, ErrorBody) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            ErrorBody::new("NOT_FOUND", format!("{entity} with id {id} not found")),
        ),
        CoreError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            ErrorBody::new("VALIDATION_ERROR", msg.as_str()),
        ),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, ErrorBody::new("CONFLICT", msg.as_str())),
        CoreError::Unauthorized(msg) => (
            StatusCode::UNAUTHORIZED,
            ErrorBody::new("UNAUTHORIZED", msg.as_str()),
        ),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorBody::new("FORBIDDEN", msg.as_str())),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Domain invariant broken");
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
        }
    }
}

/// Missing rows are 404. Duplicates on named `uq_*` constraints are 409.
/// Foreign-key and check violations are the caller's fault (400). Anything
/// else is a 500 whose driver text stays in the log.
fn database_parts(err: &sqlx::Error) -> (StatusCode, ErrorBody) {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            ErrorBody::new("NOT_FOUND", "Resource not found"),
        );
    }

    if let sqlx::Error::Database(db_err) = err {
        let constraint = db_err.constraint().unwrap_or("unknown");
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) if constraint.starts_with("uq_") => {
                return (
                    StatusCode::CONFLICT,
                    ErrorBody::new(
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    ),
                );
            }
            Some(FOREIGN_KEY_VIOLATION) => {
                return (
                    StatusCode::BAD_REQUEST,
                    ErrorBody::new(
                        "BAD_REQUEST",
                        format!("Referenced record is missing or still in use: {constraint}"),
                    ),
                );
            }
            Some(CHECK_VIOLATION) => {
                return (
                    StatusCode::BAD_REQUEST,
                    ErrorBody::new(
                        "BAD_REQUEST",
                        format!("Value violates check constraint: {constraint}"),
                    ),
                );
            }
            _ => {}
        }
    }

    tracing::error!(error = %err, "Database error");
    (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
}
