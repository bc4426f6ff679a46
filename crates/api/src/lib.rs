//! HTTP API for the four logistics modules: maritime management,
//! reservations, container monitoring and port operations, plus user
//! administration.
//!
//! The binary in `main.rs` only wires configuration and the pool into
//! [`router::app`]; integration tests drive that same router in-process.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
