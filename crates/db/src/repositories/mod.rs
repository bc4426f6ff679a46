//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. List methods are
//! paginated with [`logistica_core::pagination::PageParams`].

pub mod certification_repo;
pub mod client_repo;
pub mod container_repo;
pub mod crew_repo;
pub mod incident_repo;
pub mod language_repo;
pub mod notification_repo;
pub mod operating_condition_repo;
pub mod operation_repo;
pub mod port_operation_repo;
pub mod report_repo;
pub mod reservation_repo;
pub mod sensor_repo;
pub mod shipping_route_repo;
pub mod tariff_repo;
pub mod user_repo;
pub mod vessel_repo;

pub use certification_repo::CertificationRepo;
pub use client_repo::ClientRepo;
pub use container_repo::ContainerRepo;
pub use crew_repo::CrewRepo;
pub use incident_repo::IncidentRepo;
pub use language_repo::LanguageRepo;
pub use notification_repo::NotificationRepo;
pub use operating_condition_repo::OperatingConditionRepo;
pub use operation_repo::OperationRepo;
pub use port_operation_repo::PortOperationRepo;
pub use report_repo::ReportRepo;
pub use reservation_repo::ReservationRepo;
pub use sensor_repo::SensorRepo;
pub use shipping_route_repo::ShippingRouteRepo;
pub use tariff_repo::TariffRepo;
pub use user_repo::UserRepo;
pub use vessel_repo::VesselRepo;
