//! Integration tests for repository CRUD, filters and pagination.

mod common;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use logistica_core::modules::Module;
use logistica_core::pagination::PageParams;
use logistica_core::status::{
    OperationStatus, PortOperationKind, PortOperationStatus, ReservationStatus,
};
use logistica_db::models::client::CreateClient;
use logistica_db::models::operation::{OperationFilter, UpdateOperation};
use logistica_db::models::port_operation::{CreatePortOperation, UpdatePortOperation};
use logistica_db::models::report::{CreateReport, GenerateReport};
use logistica_db::models::reservation::{CreateReservation, ReservationFilter};
use logistica_db::models::shipping_route::{CreateShippingRoute, ShippingRoute};
use logistica_db::models::tariff::{CreateTariff, TariffFilter};
use logistica_db::models::user::{CreateEmployee, CreateOperator, CreateUser};
use logistica_db::repositories::{
    ClientRepo, OperationRepo, PortOperationRepo, ReportRepo, ReservationRepo,
    ShippingRouteRepo, TariffRepo, UserRepo, VesselRepo,
};
use logistica_db::DbError;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn route(pool: &PgPool, code: &str) -> ShippingRoute {
    ShippingRouteRepo::create(
        pool,
        &CreateShippingRoute {
            code: code.to_string(),
            origin: "Callao".to_string(),
            destination: "Shanghai".to_string(),
            transit_days: 28,
        },
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_operation_defaults_to_registered(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    assert_eq!(op.status, OperationStatus::Registered);
    assert_eq!(op.progress, 0);
    assert_eq!(op.container_count, 12);

    let found = OperationRepo::find_by_code(&pool, "OP-1").await.unwrap();
    assert_eq!(found.map(|o| o.id), Some(op.id));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_operation_update_keeps_unset_fields(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    let updated = OperationRepo::update(
        &pool,
        op.id,
        &UpdateOperation {
            vessel_id: None,
            container_count: None,
            progress: Some(40),
            origin_port: None,
            destination_port: None,
            departed_at: None,
            estimated_arrival: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.progress, 40);
    assert_eq!(updated.origin_port.as_deref(), Some("Callao"));
    assert!(updated.updated_at >= op.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_finished_operation_is_not_updated(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    OperationRepo::set_status(&pool, op.id, OperationStatus::Cancelled)
        .await
        .unwrap();

    let updated = OperationRepo::update(
        &pool,
        op.id,
        &UpdateOperation {
            vessel_id: None,
            container_count: Some(5),
            progress: None,
            origin_port: None,
            destination_port: None,
            departed_at: None,
            estimated_arrival: None,
        },
    )
    .await
    .unwrap();
    assert!(updated.is_none());

    let stored = OperationRepo::find_by_id(&pool, op.id).await.unwrap().unwrap();
    assert_eq!(stored.container_count, op.container_count);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_completing_operation_sets_full_progress(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    let done = OperationRepo::set_status(&pool, op.id, OperationStatus::Completed)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(done.status, OperationStatus::Completed);
    assert_eq!(done.progress, 100);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_operation_list_filters_by_status(pool: PgPool) {
    let a = common::operation(&pool, "OP-A").await;
    common::operation(&pool, "OP-B").await;
    OperationRepo::set_status(&pool, a.id, OperationStatus::Navigating)
        .await
        .unwrap();

    let filter = OperationFilter {
        status: Some(OperationStatus::Navigating),
        vessel_id: None,
    };
    let page = OperationRepo::list(&pool, &filter, PageParams::default())
        .await
        .unwrap();
    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.data[0].code, "OP-A");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_operation_summary_counts_active(pool: PgPool) {
    let a = common::operation(&pool, "OP-A").await;
    let b = common::operation(&pool, "OP-B").await;
    common::operation(&pool, "OP-C").await;
    OperationRepo::set_status(&pool, a.id, OperationStatus::Cancelled)
        .await
        .unwrap();
    OperationRepo::set_status(&pool, b.id, OperationStatus::Navigating)
        .await
        .unwrap();

    let summary = OperationRepo::summary(&pool).await.unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.by_status.len(), 3);
    // Two non-terminal operations with 12 containers each.
    assert_eq!(summary.containers_in_flight, 24);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_operation_code_violates_unique(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    let err = OperationRepo::create(&pool, &common::new_operation(op.vessel_id, "OP-1"))
        .await
        .unwrap_err();
    assert!(logistica_db::error::is_unique_violation(&err));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_vessel_in_use_cannot_be_deleted(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    let err = VesselRepo::delete(&pool, op.vessel_id).await.unwrap_err();
    let code = match &err {
        sqlx::Error::Database(db) => db.code().map(|c| c.to_string()),
        _ => None,
    };
    assert_eq!(code.as_deref(), Some(logistica_db::error::FOREIGN_KEY_VIOLATION));
}

// ---------------------------------------------------------------------------
// Reservations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_tariff_pagination(pool: PgPool) {
    let route = route(&pool, "CAL-SHA").await;
    for i in 1..=25 {
        TariffRepo::create(
            &pool,
            &CreateTariff {
                code: format!("TAR-{i:03}"),
                route_id: route.id,
                container_type: "40HC".to_string(),
                amount_cents: 100_000 + i,
                currency: None,
            },
        )
        .await
        .unwrap();
    }
    let filter = TariffFilter::default();

    let first = TariffRepo::list(&pool, &filter, PageParams::new(1, 10)).await.unwrap();
    assert_eq!(first.data.len(), 10);
    assert_eq!(first.data[0].code, "TAR-001");
    assert_eq!(first.data[9].code, "TAR-010");
    assert_eq!(first.data[0].currency, "USD");
    assert!(first.pagination.has_next);
    assert!(!first.pagination.has_previous);

    let last = TariffRepo::list(&pool, &filter, PageParams::new(3, 10)).await.unwrap();
    assert_eq!(last.data.len(), 5);
    assert_eq!(last.data[0].code, "TAR-021");
    assert_eq!(last.data[4].code, "TAR-025");
    assert_eq!(last.pagination.total, 25);
    assert_eq!(last.pagination.total_pages, 3);
    assert!(!last.pagination.has_next);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reservation_starts_pending_and_filters(pool: PgPool) {
    let route = route(&pool, "CAL-SHA").await;
    let client = ClientRepo::create(
        &pool,
        &CreateClient {
            name: "Andes Export SAC".to_string(),
            tax_id: "20123456789".to_string(),
            email: Some("ops@andes.example".to_string()),
            phone: None,
        },
    )
    .await
    .unwrap();

    let reservation = ReservationRepo::create(
        &pool,
        &CreateReservation {
            code: "RES-1".to_string(),
            client_id: client.id,
            route_id: route.id,
            tariff_id: None,
            container_count: 3,
            reserved_for: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            notes: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(reservation.status, ReservationStatus::Pending);

    let filter = ReservationFilter {
        status: None,
        client_id: Some(client.id),
    };
    let page = ReservationRepo::list(&pool, &filter, PageParams::default())
        .await
        .unwrap();
    assert_eq!(page.pagination.total, 1);
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_generate_report_with_empty_selection(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    let generated = ReportRepo::generate(
        &pool,
        &GenerateReport {
            operation_id: op.id,
            incident_ids: vec![],
            code: None,
            report_date: None,
            detail: String::new(),
        },
    )
    .await
    .unwrap();

    assert!(generated.report.code.starts_with("REP-"));
    assert!(generated.incident_ids.is_empty());
    assert_eq!(generated.report.operation_id, Some(op.id));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_generate_report_links_selected_incidents(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    let first = common::incident(&pool, op.id, "INC-1").await;
    let second = common::incident(&pool, op.id, "INC-2").await;

    let generated = ReportRepo::generate(
        &pool,
        &GenerateReport {
            operation_id: op.id,
            incident_ids: vec![first.id, second.id],
            code: Some("REP-CUSTOM".to_string()),
            report_date: None,
            detail: "Two incidents during unloading".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(generated.report.code, "REP-CUSTOM");

    let found = ReportRepo::find_with_incidents(&pool, generated.report.id)
        .await
        .unwrap()
        .unwrap();
    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(found.incident_ids, expected);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_generate_report_rejects_foreign_incident(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    let other = common::operation(&pool, "OP-2").await;
    let foreign = common::incident(&pool, other.id, "INC-9").await;

    let err = ReportRepo::generate(
        &pool,
        &GenerateReport {
            operation_id: op.id,
            incident_ids: vec![foreign.id],
            code: None,
            report_date: None,
            detail: String::new(),
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, DbError::Invalid(_));

    // Nothing was written.
    let page = ReportRepo::list(&pool, PageParams::default()).await.unwrap();
    assert_eq!(page.pagination.total, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_standalone_report_gets_generated_code(pool: PgPool) {
    let report = ReportRepo::create(
        &pool,
        &CreateReport {
            code: None,
            operation_id: None,
            report_date: Some(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()),
            detail: "Monthly berth summary".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(report.code.starts_with("REP-"));
    assert!(ReportRepo::delete(&pool, report.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Port operations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_port_operation_completion_stamps_time(pool: PgPool) {
    let created = PortOperationRepo::create(
        &pool,
        &CreatePortOperation {
            code: "PO-1".to_string(),
            operation_id: None,
            berth: "B3".to_string(),
            kind: PortOperationKind::Unloading,
            scheduled_at: chrono::Utc::now(),
        },
    )
    .await
    .unwrap();
    assert_eq!(created.status, PortOperationStatus::Scheduled);
    assert!(created.completed_at.is_none());

    let done = PortOperationRepo::update(
        &pool,
        created.id,
        &UpdatePortOperation {
            berth: None,
            status: Some(PortOperationStatus::Completed),
            scheduled_at: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(done.status, PortOperationStatus::Completed);
    assert!(done.completed_at.is_some());
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_user_profile_includes_employee_and_operator(pool: PgPool) {
    let employee = UserRepo::create_employee(
        &pool,
        &CreateEmployee {
            first_name: "Luis".to_string(),
            last_name: "Paredes".to_string(),
            document_number: "45678912".to_string(),
            position: Some("Monitor".to_string()),
        },
    )
    .await
    .unwrap();
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            email: "luis@logistica.example".to_string(),
            password_hash: "not-a-real-hash".to_string(),
            employee_id: Some(employee.id),
            module: Module::Monitoring,
        },
    )
    .await
    .unwrap();
    assert_eq!(user.module, Module::Monitoring);

    UserRepo::create_operator(
        &pool,
        &CreateOperator {
            user_id: user.id,
            shift: "night".to_string(),
            monitoring_zone: "Muelle Sur".to_string(),
        },
    )
    .await
    .unwrap();

    let profile = UserRepo::profile(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(profile.module, Module::Monitoring);
    assert_eq!(profile.employee.map(|e| e.id), Some(employee.id));
    assert_eq!(profile.operator.map(|o| o.shift).as_deref(), Some("night"));

    let by_email = UserRepo::find_by_email(&pool, "LUIS@logistica.example")
        .await
        .unwrap();
    assert!(by_email.is_some());

    assert!(UserRepo::deactivate(&pool, user.id).await.unwrap());
    assert!(!UserRepo::deactivate(&pool, user.id).await.unwrap());
}
