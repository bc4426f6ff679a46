//! One module per API namespace.
//!
//! Each function issues exactly one request to a fixed path and returns the
//! parsed body. Paths are relative to the client's base URL (`/api/v1`).

pub mod auth;
pub mod maritime;
pub mod monitoring;
pub mod port_operations;
pub mod reservations;
