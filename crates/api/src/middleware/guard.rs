//! Module-based route guards.
//!
//! Each route group names the modules allowed to use it through a
//! zero-sized [`ModuleGuard`] type. Handlers take [`RequireModule<G>`] as an
//! extractor; the decision itself is [`logistica_core::modules::authorize`].
//!
//! ```ignore
//! async fn list(
//!     RequireModule(user, _): RequireModule<MaritimeAccess>,
//!     State(state): State<AppState>,
//! ) -> AppResult<Json<Page<Vessel>>> { ... }
//! ```

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use logistica_core::error::CoreError;
use logistica_core::modules::{authorize, denial_message, Access, Module};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// The list of modules a route group accepts.
pub trait ModuleGuard: Send + Sync + 'static {
    const REQUIRED: &'static [Module];
}

/// Declare a zero-sized guard type for a fixed module list.
macro_rules! module_guard {
    ($(#[$meta:meta])* $name:ident => [$($module:ident),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl ModuleGuard for $name {
            const REQUIRED: &'static [Module] = &[$(Module::$module),+];
        }
    };
}

module_guard!(
    /// `/gestion-maritima` routes.
    MaritimeAccess => [MaritimeManagement, Administration]
);
module_guard!(
    /// `/gestion-reserva` routes.
    ReservationAccess => [ReservationManagement, Administration]
);
module_guard!(
    /// `/monitoreo` routes.
    MonitoringAccess => [Monitoring, Administration]
);
module_guard!(
    /// Incidents and reports under `/operaciones-portuarias`.
    IncidentAccess => [PortOperations, MaritimeManagement, Administration]
);
module_guard!(
    /// Berth operations under `/operaciones-portuarias/operaciones`.
    PortOperationAccess => [PortOperations, Administration]
);
module_guard!(
    /// The operations dashboard summary.
    DashboardAccess => [MaritimeManagement, PortOperations, Administration]
);
module_guard!(
    /// `/admin` routes.
    AdminAccess => [Administration]
);

/// Requires an authenticated user whose module is in `G::REQUIRED`.
///
/// Rejects with 401 when the token is missing or invalid, and with 403
/// naming the accepted modules when the user's module is not listed.
pub struct RequireModule<G: ModuleGuard>(pub AuthUser, pub PhantomData<G>);

impl<G: ModuleGuard> FromRequestParts<AppState> for RequireModule<G> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        match authorize(Some(user.module), G::REQUIRED) {
            Access::Allowed => Ok(RequireModule(user, PhantomData)),
            Access::Denied { required } => {
                tracing::warn!(
                    user_id = %user.user_id,
                    module = %user.module,
                    path = %parts.uri.path(),
                    "Module access denied",
                );
                Err(AppError::Core(CoreError::Forbidden(denial_message(
                    &required,
                ))))
            }
        }
    }
}

impl<G: ModuleGuard> RequireModule<G> {
    pub fn user(&self) -> &AuthUser {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_passes_every_guard() {
        for required in [
            MaritimeAccess::REQUIRED,
            ReservationAccess::REQUIRED,
            MonitoringAccess::REQUIRED,
            IncidentAccess::REQUIRED,
            PortOperationAccess::REQUIRED,
            DashboardAccess::REQUIRED,
            AdminAccess::REQUIRED,
        ] {
            assert!(required.contains(&Module::Administration));
        }
    }

    #[test]
    fn incidents_are_shared_with_maritime() {
        assert!(authorize(Some(Module::MaritimeManagement), IncidentAccess::REQUIRED).is_allowed());
        assert!(
            !authorize(Some(Module::MaritimeManagement), PortOperationAccess::REQUIRED)
                .is_allowed()
        );
    }

    #[test]
    fn monitoring_cannot_reach_reservations() {
        assert!(!authorize(Some(Module::Monitoring), ReservationAccess::REQUIRED).is_allowed());
    }
}
