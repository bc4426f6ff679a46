//! Bearer-token authentication.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use logistica_core::error::CoreError;
use logistica_core::modules::Module;
use logistica_core::types::DbId;
use logistica_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller behind a valid access token whose account is still active.
///
/// Taking `AuthUser` as a handler argument only proves the caller is logged
/// in. Route groups that belong to a module use
/// [`RequireModule`](super::guard::RequireModule) instead, which wraps this.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    /// Copied from the token; the module guard reads it from here.
    pub module: Module,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected access token");
            unauthorized("Invalid or expired token")
        })?;

        // Deactivation takes effect immediately, not when the token expires.
        if UserRepo::is_active(&state.pool, claims.sub).await? != Some(true) {
            tracing::info!(user_id = %claims.sub, "Token of an inactive or deleted account");
            return Err(unauthorized("Account is deactivated"));
        }

        Ok(AuthUser {
            user_id: claims.sub,
            module: claims.module,
        })
    }
}

/// The token part of `Authorization: Bearer <token>`. The scheme name is
/// matched case-insensitively.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let value = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?
        .to_str()
        .map_err(|_| unauthorized("Authorization header is not valid text"))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>",
        )),
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn parts(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/v1/auth/profile");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn bearer_scheme_is_case_insensitive() {
        let parts = parts(Some("bearer abc.def.ghi"));
        assert_eq!(bearer_token(&parts).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn other_schemes_and_blank_tokens_are_rejected() {
        assert!(bearer_token(&parts(Some("Basic dXNlcjpwdw=="))).is_err());
        assert!(bearer_token(&parts(Some("Bearer   "))).is_err());
        assert!(bearer_token(&parts(None)).is_err());
    }
}
