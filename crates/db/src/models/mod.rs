//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod certification;
pub mod client;
pub mod container;
pub mod crew;
pub mod incident;
pub mod language;
pub mod notification;
pub mod operating_condition;
pub mod operation;
pub mod port_operation;
pub mod report;
pub mod reservation;
pub mod sensor;
pub mod shipping_route;
pub mod tariff;
pub mod user;
pub mod vessel;
