//! Maritime management endpoints: vessels, operations and their lifecycle,
//! certification links, crew languages.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, delete_auth, expect_json, get_auth, post_json_auth, put_json_auth, token_for};
use logistica_core::modules::Module;
use serde_json::{json, Value};
use sqlx::PgPool;

const BASE: &str = "/api/v1/gestion-maritima";

async fn setup(pool: PgPool) -> (Router, String) {
    let token = token_for(&pool, Module::MaritimeManagement).await;
    (common::build_test_app(pool), token)
}

async fn create_operation(app: &Router, token: &str, code: &str) -> Value {
    let vessel = expect_json(
        post_json_auth(
            app.clone(),
            &format!("{BASE}/embarcaciones"),
            json!({ "code": format!("V-{code}"), "name": "Pacific Star" }),
            token,
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    expect_json(
        post_json_auth(
            app.clone(),
            &format!("{BASE}/operaciones"),
            json!({
                "code": code,
                "vessel_id": vessel["id"],
                "container_count": 40,
                "origin_port": "Callao",
                "destination_port": "Manzanillo"
            }),
            token,
        )
        .await,
        StatusCode::CREATED,
    )
    .await
}

async fn transition(app: &Router, token: &str, id: &Value, status: &str) -> axum::response::Response {
    put_json_auth(
        app.clone(),
        &format!("{BASE}/operaciones/{}/estado", id.as_str().unwrap()),
        json!({ "status": status }),
        token,
    )
    .await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn new_operation_starts_registered(pool: PgPool) {
    let (app, token) = setup(pool).await;
    let operation = create_operation(&app, &token, "OP-100").await;

    assert_eq!(operation["status"], "registered");
    assert_eq!(operation["progress"], 0);
    assert_eq!(operation["container_count"], 40);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn operation_follows_the_lifecycle(pool: PgPool) {
    let (app, token) = setup(pool).await;
    let operation = create_operation(&app, &token, "OP-101").await;
    let id = &operation["id"];

    for status in ["navigating", "in_transit", "in_port", "completed"] {
        let json = expect_json(transition(&app, &token, id, status).await, StatusCode::OK).await;
        assert_eq!(json["status"], status);
    }

    let json = body_json(
        get_auth(
            app,
            &format!("{BASE}/operaciones/{}", id.as_str().unwrap()),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(json["status"], "completed");
    assert_eq!(json["progress"], 100);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn transitions_outside_the_table_are_rejected(pool: PgPool) {
    let (app, token) = setup(pool).await;
    let operation = create_operation(&app, &token, "OP-102").await;
    let id = &operation["id"];

    // registered cannot jump straight into port.
    let json = expect_json(
        transition(&app, &token, id, "in_port").await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "Operation cannot move from registered to in_port");

    // Same status is not a transition either.
    let response = transition(&app, &token, id, "registered").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Cancelled is terminal.
    let response = transition(&app, &token, id, "cancelled").await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = transition(&app, &token, id, "navigating").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn finished_operation_cannot_be_edited(pool: PgPool) {
    let (app, token) = setup(pool).await;
    let operation = create_operation(&app, &token, "OP-107").await;
    let id = &operation["id"];
    for status in ["navigating", "in_port", "completed"] {
        expect_json(transition(&app, &token, id, status).await, StatusCode::OK).await;
    }
    let uri = format!("{BASE}/operaciones/{}", id.as_str().unwrap());

    let json = expect_json(
        put_json_auth(app.clone(), &uri, json!({ "progress": 20 }), &token).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["message"],
        "Operation OP-107 is already completed and can no longer be edited"
    );

    let json = body_json(get_auth(app, &uri, &token).await).await;
    assert_eq!(json["status"], "completed");
    assert_eq!(json["progress"], 100);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_status(pool: PgPool) {
    let (app, token) = setup(pool).await;
    let first = create_operation(&app, &token, "OP-103").await;
    create_operation(&app, &token, "OP-104").await;
    transition(&app, &token, &first["id"], "navigating").await;

    let json = body_json(
        get_auth(app, &format!("{BASE}/operaciones?status=navigating&page=1&limit=5"), &token).await,
    )
    .await;
    assert_eq!(json["pagination"]["total"], 1);
    assert_eq!(json["pagination"]["limit"], 5);
    assert_eq!(json["data"][0]["code"], "OP-103");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_operation_code_is_a_conflict(pool: PgPool) {
    let (app, token) = setup(pool).await;
    let operation = create_operation(&app, &token, "OP-105").await;

    let response = post_json_auth(
        app,
        &format!("{BASE}/operaciones"),
        json!({ "code": "OP-105", "vessel_id": operation["vessel_id"] }),
        &token,
    )
    .await;
    let json = expect_json(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_progress_is_a_validation_error(pool: PgPool) {
    let (app, token) = setup(pool).await;
    let operation = create_operation(&app, &token, "OP-106").await;

    let response = put_json_auth(
        app,
        &format!("{BASE}/operaciones/{}", operation["id"].as_str().unwrap()),
        json!({ "progress": 140 }),
        &token,
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["message"], "Invalid fields: progress");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn operation_registered_as_completed_needs_full_progress(pool: PgPool) {
    let (app, token) = setup(pool).await;
    let existing = create_operation(&app, &token, "OP-108").await;

    let response = post_json_auth(
        app.clone(),
        &format!("{BASE}/operaciones"),
        json!({
            "code": "OP-109",
            "vessel_id": existing["vessel_id"],
            "status": "completed",
            "progress": 90
        }),
        &token,
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["message"], "A completed operation must have progress 100");

    let created = expect_json(
        post_json_auth(
            app,
            &format!("{BASE}/operaciones"),
            json!({
                "code": "OP-109",
                "vessel_id": existing["vessel_id"],
                "status": "completed",
                "progress": 100
            }),
            &token,
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(created["status"], "completed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn certification_link_is_unique_and_reviewable(pool: PgPool) {
    let (app, token) = setup(pool).await;
    let operation = create_operation(&app, &token, "OP-107").await;
    let op_id = operation["id"].as_str().unwrap().to_string();

    let certification = expect_json(
        post_json_auth(
            app.clone(),
            &format!("{BASE}/certificaciones"),
            json!({
                "code": "ISPS-1",
                "name": "ISPS compliance",
                "issued_at": "2026-01-01T00:00:00Z",
                "expires_at": "2027-01-01T00:00:00Z",
                "country": "PE"
            }),
            &token,
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let link_body = json!({ "certification_id": certification["id"] });
    let links_uri = format!("{BASE}/operaciones/{op_id}/certificaciones");

    let link = expect_json(
        post_json_auth(app.clone(), &links_uri, link_body.clone(), &token).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(link["approval_status"], "pending");
    assert!(link["approved_at"].is_null());

    let json = expect_json(
        post_json_auth(app.clone(), &links_uri, link_body, &token).await,
        StatusCode::CONFLICT,
    )
    .await;
    assert_eq!(json["code"], "CONFLICT");

    let review_uri = format!("{links_uri}/{}", certification["id"].as_str().unwrap());
    let reviewed = expect_json(
        put_json_auth(app.clone(), &review_uri, json!({ "approval_status": "approved" }), &token)
            .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(reviewed["approval_status"], "approved");
    assert!(reviewed["approved_at"].is_string());

    // A decision is final.
    let json = expect_json(
        put_json_auth(app.clone(), &review_uri, json!({ "approval_status": "rejected" }), &token)
            .await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["message"], "Certification approval cannot move from approved to rejected");
    let json = expect_json(
        put_json_auth(app.clone(), &review_uri, json!({ "approval_status": "approved" }), &token)
            .await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["message"], "Certification approval cannot move from approved to approved");

    let listed = body_json(get_auth(app, &links_uri, &token).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["certification_code"], "ISPS-1");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn certification_window_must_be_ordered(pool: PgPool) {
    let (app, token) = setup(pool).await;

    let response = post_json_auth(
        app,
        &format!("{BASE}/certificaciones"),
        json!({
            "code": "BAD-1",
            "name": "Backwards",
            "issued_at": "2027-01-01T00:00:00Z",
            "expires_at": "2026-01-01T00:00:00Z",
            "country": "PE"
        }),
        &token,
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["message"], "expires_at must be after issued_at");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn crew_language_pair_is_unique(pool: PgPool) {
    let (app, token) = setup(pool).await;

    let member = expect_json(
        post_json_auth(
            app.clone(),
            &format!("{BASE}/tripulantes"),
            json!({ "first_name": "Rosa", "last_name": "Quispe", "rank": "Second officer" }),
            &token,
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let languages = body_json(get_auth(app.clone(), &format!("{BASE}/idiomas"), &token).await).await;
    let english = languages
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["code"] == "en")
        .unwrap()
        .clone();

    let uri = format!("{BASE}/tripulantes/{}/idiomas", member["id"].as_str().unwrap());
    let body = json!({ "language_id": english["id"], "proficiency_level": "fluent" });

    let added = expect_json(
        post_json_auth(app.clone(), &uri, body.clone(), &token).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(added["language_code"], "en");

    let response = post_json_auth(app.clone(), &uri, body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = delete_auth(
        app,
        &format!("{uri}/{}", english["id"].as_str().unwrap()),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn vessel_in_use_cannot_be_deleted(pool: PgPool) {
    let (app, token) = setup(pool).await;
    let operation = create_operation(&app, &token, "OP-108").await;

    let response = delete_auth(
        app,
        &format!("{BASE}/embarcaciones/{}", operation["vessel_id"].as_str().unwrap()),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn summary_counts_by_status(pool: PgPool) {
    let (app, token) = setup(pool).await;
    let first = create_operation(&app, &token, "OP-109").await;
    create_operation(&app, &token, "OP-110").await;
    transition(&app, &token, &first["id"], "navigating").await;

    let json = expect_json(
        get_auth(app, &format!("{BASE}/operaciones/resumen"), &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["containers_in_flight"], 80);
    assert_eq!(json["by_status"].as_array().unwrap().len(), 2);
}
