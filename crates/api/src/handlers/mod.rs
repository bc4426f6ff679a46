//! Request handlers, one submodule per resource.
//!
//! Handlers authorize through the guard extractors in
//! [`crate::middleware`], validate DTOs with `validator`, delegate to the
//! corresponding repository in `logistica_db`, and map errors via
//! [`crate::error::AppError`].

pub mod admin;
pub mod auth;
pub mod certification;
pub mod client;
pub mod container;
pub mod crew;
pub mod incident;
pub mod language;
pub mod notification;
pub mod operating_condition;
pub mod operation;
pub mod operator;
pub mod port_operation;
pub mod report;
pub mod reservation;
pub mod sensor;
pub mod shipping_route;
pub mod tariff;
pub mod vessel;
