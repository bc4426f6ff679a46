//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`guard::RequireModule`] -- Requires the user's module to be in a route group's list.

pub mod auth;
pub mod guard;
