//! Handlers for the `/admin` resource (user management).
//!
//! All handlers require the `administracion` module via [`AdminAccess`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use logistica_core::error::CoreError;
use logistica_core::modules::Module;
use logistica_core::pagination::{Page, PageRequest};
use logistica_core::types::DbId;
use logistica_db::models::user::{
    CreateEmployee, CreateOperator, CreateUser, Profile, UserResponse,
};
use logistica_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::middleware::guard::{AdminAccess, RequireModule};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/usuarios`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
    pub module: Module,
    #[validate(nested)]
    pub employee: Option<EmployeeRequest>,
    #[validate(nested)]
    pub operator: Option<OperatorRequest>,
}

/// Optional employee record created together with the user.
#[derive(Debug, Deserialize, Validate)]
pub struct EmployeeRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 1, max = 32))]
    pub document_number: String,
    pub position: Option<String>,
}

/// Optional operator attributes for monitoring staff.
#[derive(Debug, Deserialize, Validate)]
pub struct OperatorRequest {
    #[validate(length(min = 1, max = 32))]
    pub shift: String,
    #[validate(length(min = 1, max = 100))]
    pub monitoring_zone: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/usuarios
///
/// Create a user. Validates password strength, hashes it, and returns the
/// new user's [`Profile`] with 201 Created. 409 if the email is taken, in
/// which case no employee row is left behind either.
pub async fn create_user(
    State(state): State<AppState>,
    RequireModule(admin, _): RequireModule<AdminAccess>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<Profile>)> {
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    // Employee, user and operator rows commit together or not at all.
    let mut tx = state.pool.begin().await?;

    let employee_id = match input.employee {
        Some(employee) => {
            let created = UserRepo::create_employee(
                &mut *tx,
                &CreateEmployee {
                    first_name: employee.first_name,
                    last_name: employee.last_name,
                    document_number: employee.document_number,
                    position: employee.position,
                },
            )
            .await?;
            Some(created.id)
        }
        None => None,
    };

    let user = UserRepo::create(
        &mut *tx,
        &CreateUser {
            email: input.email.trim().to_string(),
            password_hash,
            employee_id,
            module: input.module,
        },
    )
    .await?;

    if let Some(operator) = input.operator {
        UserRepo::create_operator(
            &mut *tx,
            &CreateOperator {
                user_id: user.id,
                shift: operator.shift,
                monitoring_zone: operator.monitoring_zone,
            },
        )
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        user_id = %user.id,
        module = %user.module,
        created_by = %admin.user_id,
        "User created",
    );

    let profile = UserRepo::profile(&state.pool, user.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.id,
        }))?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/admin/usuarios
pub async fn list_users(
    State(state): State<AppState>,
    _guard: RequireModule<AdminAccess>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Page<UserResponse>>> {
    let users = UserRepo::list(&state.pool, page.into()).await?;
    Ok(Json(users.map(UserResponse::from)))
}

/// GET /api/v1/admin/usuarios/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _guard: RequireModule<AdminAccess>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user.into()))
}

/// DELETE /api/v1/admin/usuarios/{id}
///
/// Deactivate a user. Administrators cannot deactivate themselves, and the
/// last active administrator cannot be deactivated.
pub async fn deactivate_user(
    State(state): State<AppState>,
    RequireModule(admin, _): RequireModule<AdminAccess>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if admin.user_id == id {
        return Err(AppError::Core(CoreError::Conflict(
            "Administrators cannot deactivate their own account".into(),
        )));
    }

    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    if user.is_active && user.module == Module::Administration {
        let admins = UserRepo::count_active_with_module(&state.pool, Module::Administration).await?;
        if admins <= 1 {
            return Err(AppError::Core(CoreError::Conflict(
                "Cannot deactivate the last active administrator".into(),
            )));
        }
    }

    if UserRepo::deactivate(&state.pool, id).await? {
        tracing::info!(user_id = %id, deactivated_by = %admin.user_id, "User deactivated");
    }
    Ok(StatusCode::NO_CONTENT)
}
