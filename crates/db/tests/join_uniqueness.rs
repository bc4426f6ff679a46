//! Duplicate pairs in join tables are rejected at the repository boundary.

mod common;

use assert_matches::assert_matches;
use logistica_core::status::ApprovalStatus;
use logistica_db::models::crew::{AddCrewLanguage, CreateCrewMember};
use logistica_db::models::operating_condition::{CreateOperatingCondition, LinkCondition};
use logistica_db::repositories::{
    CertificationRepo, CrewRepo, LanguageRepo, OperatingConditionRepo,
};
use logistica_db::DbError;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_operation_certification_rejected(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    let cert = common::certification(&pool, "CERT-1").await;

    let link = CertificationRepo::link(&pool, op.id, cert.id).await.unwrap();
    assert_eq!(link.approval_status, ApprovalStatus::Pending);
    assert!(link.approved_at.is_none());

    let err = CertificationRepo::link(&pool, op.id, cert.id).await.unwrap_err();
    assert_matches!(err, DbError::Duplicate { entity: "OperationCertification", .. });

    let links = CertificationRepo::list_for_operation(&pool, op.id).await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].certification_code, "CERT-1");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_same_certification_on_two_operations_allowed(pool: PgPool) {
    let first = common::operation(&pool, "OP-1").await;
    let second = common::operation(&pool, "OP-2").await;
    let cert = common::certification(&pool, "CERT-1").await;

    CertificationRepo::link(&pool, first.id, cert.id).await.unwrap();
    CertificationRepo::link(&pool, second.id, cert.id).await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn test_approval_stamps_approved_at(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    let cert = common::certification(&pool, "CERT-1").await;
    CertificationRepo::link(&pool, op.id, cert.id).await.unwrap();

    let approved = CertificationRepo::set_approval(&pool, op.id, cert.id, ApprovalStatus::Approved)
        .await
        .unwrap()
        .expect("link should exist");
    assert_eq!(approved.approval_status, ApprovalStatus::Approved);
    assert!(approved.approved_at.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reviewed_link_is_not_reviewed_again(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    let cert = common::certification(&pool, "CERT-1").await;
    CertificationRepo::link(&pool, op.id, cert.id).await.unwrap();

    let rejected = CertificationRepo::set_approval(&pool, op.id, cert.id, ApprovalStatus::Rejected)
        .await
        .unwrap()
        .expect("pending link should be reviewed");
    assert_eq!(rejected.approval_status, ApprovalStatus::Rejected);
    assert!(rejected.approved_at.is_none());

    // A second reviewer who read the link while it was pending loses.
    let late = CertificationRepo::set_approval(&pool, op.id, cert.id, ApprovalStatus::Approved)
        .await
        .unwrap();
    assert!(late.is_none());

    let stored = CertificationRepo::find_link(&pool, op.id, cert.id)
        .await
        .unwrap()
        .expect("link should exist");
    assert_eq!(stored.approval_status, ApprovalStatus::Rejected);
    assert!(stored.approved_at.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_crew_language_rejected(pool: PgPool) {
    let member = CrewRepo::create(
        &pool,
        &CreateCrewMember {
            first_name: "Rosa".to_string(),
            last_name: "Quispe".to_string(),
            rank: "Chief Officer".to_string(),
            nationality: Some("PE".to_string()),
            operation_id: None,
        },
    )
    .await
    .unwrap();
    let english = LanguageRepo::find_by_code(&pool, "en")
        .await
        .unwrap()
        .expect("seeded language");
    let input = AddCrewLanguage {
        language_id: english.id,
        proficiency_level: Some("B2".to_string()),
    };

    let added = CrewRepo::add_language(&pool, member.id, &input).await.unwrap();
    assert_eq!(added.language_code, "en");

    let err = CrewRepo::add_language(&pool, member.id, &input).await.unwrap_err();
    assert_matches!(err, DbError::Duplicate { .. });

    assert!(CrewRepo::remove_language(&pool, member.id, english.id).await.unwrap());
    assert!(CrewRepo::list_languages(&pool, member.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_operation_condition_rejected(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    let condition = OperatingConditionRepo::create(
        &pool,
        &CreateOperatingCondition {
            code: "HEAVY-SEA".to_string(),
            name: "Heavy sea".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    let input = LinkCondition {
        condition_id: condition.id,
        notes: Some("Beaufort 7".to_string()),
    };

    let linked = OperatingConditionRepo::link(&pool, op.id, &input).await.unwrap();
    assert_eq!(linked.condition_code, "HEAVY-SEA");

    let err = OperatingConditionRepo::link(&pool, op.id, &input).await.unwrap_err();
    assert_matches!(err, DbError::Duplicate { .. });
}

#[sqlx::test(migrations = "./migrations")]
async fn test_report_incident_pair_is_unique(pool: PgPool) {
    let op = common::operation(&pool, "OP-1").await;
    let incident = common::incident(&pool, op.id, "INC-1").await;
    let report = logistica_db::repositories::ReportRepo::generate(
        &pool,
        &logistica_db::models::report::GenerateReport {
            operation_id: op.id,
            incident_ids: vec![incident.id, incident.id],
            code: None,
            report_date: None,
            detail: String::new(),
        },
    )
    .await
    .unwrap();

    // Repeated ids in one selection collapse to a single link.
    assert_eq!(report.incident_ids, vec![incident.id]);

    let err = sqlx::query(
        "INSERT INTO operaciones_portuarias.report_incidents (report_id, incident_id)
         VALUES ($1, $2)",
    )
    .bind(report.report.id)
    .bind(incident.id)
    .execute(&pool)
    .await
    .unwrap_err();
    assert!(logistica_db::error::is_unique_violation(&err));
}
