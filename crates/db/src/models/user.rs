//! User, employee, operator models and the profile view.

use logistica_core::modules::Module;
use logistica_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row joined with its module slug.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] or [`Profile`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub employee_id: Option<DbId>,
    #[sqlx(try_from = "String")]
    pub module: Module,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub employee_id: Option<DbId>,
    pub module: Module,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            employee_id: user.employee_id,
            module: user.module,
            is_active: user.is_active,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

/// A row from `seguridad.employees`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
    pub position: Option<String>,
}

/// A row from `seguridad.operators`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Operator {
    pub id: DbId,
    pub user_id: DbId,
    pub shift: String,
    pub monitoring_zone: String,
}

/// Authenticated user's profile as returned by `/auth/profile` and login.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub module: Module,
    pub employee: Option<Employee>,
    pub operator: Option<Operator>,
    pub last_login_at: Option<Timestamp>,
}

/// DTO for inserting a user. The password is already hashed.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub employee_id: Option<DbId>,
    pub module: Module,
}

#[derive(Debug, Deserialize)]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
    pub position: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateOperator {
    pub user_id: DbId,
    pub shift: String,
    pub monitoring_zone: String,
}
