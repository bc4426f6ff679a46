//! Shared fixtures for repository integration tests.

#![allow(dead_code)]

use chrono::{Duration, Utc};
use logistica_core::types::DbId;
use logistica_db::models::certification::{Certification, CreateCertification};
use logistica_db::models::incident::{CreateIncident, Incident};
use logistica_db::models::operation::{CreateOperation, Operation};
use logistica_db::models::vessel::{CreateVessel, Vessel};
use logistica_db::repositories::{CertificationRepo, IncidentRepo, OperationRepo, VesselRepo};
use sqlx::PgPool;

pub async fn vessel(pool: &PgPool, code: &str) -> Vessel {
    VesselRepo::create(
        pool,
        &CreateVessel {
            code: code.to_string(),
            name: format!("Vessel {code}"),
            imo_number: None,
            flag_country: Some("PE".to_string()),
        },
    )
    .await
    .unwrap()
}

pub fn new_operation(vessel_id: DbId, code: &str) -> CreateOperation {
    CreateOperation {
        code: code.to_string(),
        vessel_id,
        status: None,
        container_count: Some(12),
        progress: None,
        origin_port: Some("Callao".to_string()),
        destination_port: Some("Valparaíso".to_string()),
        departed_at: None,
        estimated_arrival: None,
    }
}

pub async fn operation(pool: &PgPool, code: &str) -> Operation {
    let vessel = vessel(pool, &format!("V-{code}")).await;
    OperationRepo::create(pool, &new_operation(vessel.id, code))
        .await
        .unwrap()
}

pub async fn certification(pool: &PgPool, code: &str) -> Certification {
    let issued_at = Utc::now();
    CertificationRepo::create(
        pool,
        &CreateCertification {
            code: code.to_string(),
            name: format!("Certificate {code}"),
            issued_at,
            expires_at: issued_at + Duration::days(365),
            country: "PE".to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn incident(pool: &PgPool, operation_id: DbId, code: &str) -> Incident {
    let types = IncidentRepo::list_types(pool).await.unwrap();
    IncidentRepo::create(
        pool,
        &CreateIncident {
            code: code.to_string(),
            operation_id,
            incident_type_id: types[0].id,
            incident_status_id: None,
            description: "Container dropped during unloading".to_string(),
            severity: 3,
            occurred_at: Utc::now(),
        },
    )
    .await
    .unwrap()
}
