//! Reservation management endpoints: server-side pagination and tariff
//! consistency.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, expect_json, get_auth, post_json_auth, token_for};
use logistica_core::modules::Module;
use serde_json::{json, Value};
use sqlx::PgPool;

const BASE: &str = "/api/v1/gestion-reserva";

async fn create_route(app: &Router, token: &str, code: &str) -> Value {
    expect_json(
        post_json_auth(
            app.clone(),
            &format!("{BASE}/rutas"),
            json!({ "code": code, "origin": "Callao", "destination": "Shanghai", "transit_days": 32 }),
            token,
        )
        .await,
        StatusCode::CREATED,
    )
    .await
}

async fn create_tariff(app: &Router, token: &str, route: &Value, code: &str) -> Value {
    expect_json(
        post_json_auth(
            app.clone(),
            &format!("{BASE}/tarifas"),
            json!({
                "code": code,
                "route_id": route["id"],
                "container_type": "40HC",
                "amount_cents": 250_000
            }),
            token,
        )
        .await,
        StatusCode::CREATED,
    )
    .await
}

fn codes(page: &Value) -> Vec<String> {
    page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["code"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn twenty_five_tariffs_paginate_in_tens(pool: PgPool) {
    let token = token_for(&pool, Module::ReservationManagement).await;
    let app = common::build_test_app(pool);
    let route = create_route(&app, &token, "R-CAL-SHA").await;
    for n in 1..=25 {
        create_tariff(&app, &token, &route, &format!("TAR-{n:03}")).await;
    }

    let first = body_json(get_auth(app.clone(), &format!("{BASE}/tarifas?page=1&limit=10"), &token).await).await;
    let expected: Vec<String> = (1..=10).map(|n| format!("TAR-{n:03}")).collect();
    assert_eq!(codes(&first), expected);
    assert_eq!(first["pagination"]["total"], 25);
    assert_eq!(first["pagination"]["total_pages"], 3);
    assert_eq!(first["pagination"]["has_previous"], false);
    assert_eq!(first["pagination"]["has_next"], true);

    let last = body_json(get_auth(app, &format!("{BASE}/tarifas?page=3&limit=10"), &token).await).await;
    let expected: Vec<String> = (21..=25).map(|n| format!("TAR-{n:03}")).collect();
    assert_eq!(codes(&last), expected);
    assert_eq!(last["pagination"]["has_previous"], true);
    assert_eq!(last["pagination"]["has_next"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tariffs_filter_by_route(pool: PgPool) {
    let token = token_for(&pool, Module::ReservationManagement).await;
    let app = common::build_test_app(pool);
    let north = create_route(&app, &token, "R-N").await;
    let south = create_route(&app, &token, "R-S").await;
    create_tariff(&app, &token, &north, "TAR-N1").await;
    create_tariff(&app, &token, &south, "TAR-S1").await;
    create_tariff(&app, &token, &south, "TAR-S2").await;

    let uri = format!("{BASE}/tarifas?route_id={}", south["id"].as_str().unwrap());
    let page = body_json(get_auth(app, &uri, &token).await).await;
    assert_eq!(codes(&page), vec!["TAR-S1", "TAR-S2"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reservation_starts_pending_and_checks_tariff_route(pool: PgPool) {
    let token = token_for(&pool, Module::ReservationManagement).await;
    let app = common::build_test_app(pool);
    let client = expect_json(
        post_json_auth(
            app.clone(),
            &format!("{BASE}/clientes"),
            json!({ "name": "Agroexport SAC", "tax_id": "20123456789", "email": "ops@agroexport.pe" }),
            &token,
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let route = create_route(&app, &token, "R-1").await;
    let other_route = create_route(&app, &token, "R-2").await;
    let foreign_tariff = create_tariff(&app, &token, &other_route, "TAR-X").await;

    let response = post_json_auth(
        app.clone(),
        &format!("{BASE}/reservas"),
        json!({
            "code": "RES-1",
            "client_id": client["id"],
            "route_id": route["id"],
            "tariff_id": foreign_tariff["id"],
            "container_count": 3,
            "reserved_for": "2026-11-20"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let reservation = expect_json(
        post_json_auth(
            app,
            &format!("{BASE}/reservas"),
            json!({
                "code": "RES-1",
                "client_id": client["id"],
                "route_id": route["id"],
                "container_count": 3,
                "reserved_for": "2026-11-20"
            }),
            &token,
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(reservation["status"], "pending");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_tax_id_and_bad_email_are_rejected(pool: PgPool) {
    let token = token_for(&pool, Module::ReservationManagement).await;
    let app = common::build_test_app(pool);
    let body = json!({ "name": "Naviera Sur", "tax_id": "20999999991" });

    let response = post_json_auth(app.clone(), &format!("{BASE}/clientes"), body.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = post_json_auth(app.clone(), &format!("{BASE}/clientes"), body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_json_auth(
        app,
        &format!("{BASE}/clientes"),
        json!({ "name": "Otra", "tax_id": "1", "email": "not-an-email" }),
        &token,
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["message"], "Invalid fields: email");
}
