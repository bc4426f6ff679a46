//! Repository for users, employees and operators in the `seguridad` schema.

use logistica_core::modules::Module;
use logistica_core::pagination::{Page, PageParams};
use logistica_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::user::{
    CreateEmployee, CreateOperator, CreateUser, Employee, Operator, Profile, User,
};

/// User columns with the module slug resolved from `seguridad.modules`.
const COLUMNS: &str = "u.id, u.email, u.password_hash, u.employee_id, m.slug AS module, \
                       u.is_active, u.last_login_at, u.created_at, u.updated_at";

const FROM: &str = "seguridad.users u JOIN seguridad.modules m ON m.id = u.module_id";

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, document_number, position";

const OPERATOR_COLUMNS: &str = "id, user_id, shift, monitoring_zone";

/// Provides CRUD operations for users and their linked records.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, resolving the module by slug.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "WITH u AS (
                INSERT INTO seguridad.users (email, password_hash, employee_id, module_id)
                VALUES ($1, $2, $3, (SELECT id FROM seguridad.modules WHERE slug = $4))
                RETURNING *
             )
             SELECT {COLUMNS} FROM u JOIN seguridad.modules m ON m.id = u.module_id"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.employee_id)
            .bind(input.module.slug())
            .fetch_one(executor)
            .await?;
        tracing::info!(user_id = %user.id, module = %user.module, "User created");
        Ok(user)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE u.id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// `Some(is_active)` for an existing user, `None` when the id is unknown.
    pub async fn is_active(pool: &PgPool, id: DbId) -> Result<Option<bool>, sqlx::Error> {
        sqlx::query_scalar("SELECT is_active FROM seguridad.users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE lower(u.email) = lower($1)");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List users, most recently created first.
    pub async fn list(pool: &PgPool, params: PageParams) -> Result<Page<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM}
             ORDER BY u.created_at DESC, u.email
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, User>(&query)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM seguridad.users")
            .fetch_one(pool)
            .await?;
        Ok(Page::new(rows, params, total))
    }

    /// Soft-deactivate a user by setting `is_active = false`.
    ///
    /// Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE seguridad.users SET is_active = false WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set `last_login_at` to now.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE seguridad.users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Number of active users holding `module`.
    pub async fn count_active_with_module(
        pool: &PgPool,
        module: Module,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {FROM} WHERE m.slug = $1 AND u.is_active");
        sqlx::query_scalar(&query)
            .bind(module.slug())
            .fetch_one(pool)
            .await
    }

    /// Assemble the profile of a user with its employee and operator rows.
    pub async fn profile(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let Some(user) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let employee = match user.employee_id {
            Some(employee_id) => Self::find_employee(pool, employee_id).await?,
            None => None,
        };
        let operator = Self::find_operator_by_user(pool, user.id).await?;
        Ok(Some(Profile {
            id: user.id,
            email: user.email,
            module: user.module,
            employee,
            operator,
            last_login_at: user.last_login_at,
        }))
    }

    // -----------------------------------------------------------------------
    // Employees
    // -----------------------------------------------------------------------

    pub async fn create_employee<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateEmployee,
    ) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO seguridad.employees (first_name, last_name, document_number, position)
             VALUES ($1, $2, $3, $4)
             RETURNING {EMPLOYEE_COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.document_number)
            .bind(&input.position)
            .fetch_one(executor)
            .await
    }

    pub async fn find_employee(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {EMPLOYEE_COLUMNS} FROM seguridad.employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Operators
    // -----------------------------------------------------------------------

    pub async fn create_operator<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateOperator,
    ) -> Result<Operator, sqlx::Error> {
        let query = format!(
            "INSERT INTO seguridad.operators (user_id, shift, monitoring_zone)
             VALUES ($1, $2, $3)
             RETURNING {OPERATOR_COLUMNS}"
        );
        sqlx::query_as::<_, Operator>(&query)
            .bind(input.user_id)
            .bind(&input.shift)
            .bind(&input.monitoring_zone)
            .fetch_one(executor)
            .await
    }

    pub async fn find_operator_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Operator>, sqlx::Error> {
        let query = format!("SELECT {OPERATOR_COLUMNS} FROM seguridad.operators WHERE user_id = $1");
        sqlx::query_as::<_, Operator>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_operators(
        pool: &PgPool,
        params: PageParams,
    ) -> Result<Page<Operator>, sqlx::Error> {
        let query = format!(
            "SELECT {OPERATOR_COLUMNS} FROM seguridad.operators
             ORDER BY monitoring_zone, shift
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Operator>(&query)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM seguridad.operators")
            .fetch_one(pool)
            .await?;
        Ok(Page::new(rows, params, total))
    }
}
