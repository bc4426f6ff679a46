//! Shared domain vocabulary for the logistics platform.
//!
//! Everything in here is free of I/O so the API server, the data layer and
//! the client can agree on the same types.

pub mod codes;
pub mod error;
pub mod modules;
pub mod pagination;
pub mod status;
pub mod types;
pub mod validation;
