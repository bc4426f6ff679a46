//! Module guard behaviour over HTTP: 401 without a token, 403 naming the
//! accepted modules, 200 for members.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, token_for};
use logistica_core::modules::Module;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/gestion-maritima/embarcaciones").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn other_module_is_forbidden_with_required_list(pool: PgPool) {
    let token = token_for(&pool, Module::Monitoring).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/gestion-maritima/embarcaciones", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(
        json["message"],
        "Access restricted to modules: gestion-maritima, administracion"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn member_module_is_allowed(pool: PgPool) {
    let token = token_for(&pool, Module::MaritimeManagement).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/gestion-maritima/embarcaciones", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["pagination"]["total"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn administration_reaches_every_group(pool: PgPool) {
    let token = token_for(&pool, Module::Administration).await;
    let app = common::build_test_app(pool);

    for uri in [
        "/api/v1/gestion-maritima/operaciones",
        "/api/v1/gestion-reserva/clientes",
        "/api/v1/monitoreo/contenedores",
        "/api/v1/operaciones-portuarias/incidentes",
        "/api/v1/operaciones-portuarias/operaciones",
        "/api/v1/admin/usuarios",
    ] {
        let response = get_auth(app.clone(), uri, &token).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn shared_groups_accept_each_listed_module(pool: PgPool) {
    let maritime = token_for(&pool, Module::MaritimeManagement).await;
    let port_ops = token_for(&pool, Module::PortOperations).await;
    let app = common::build_test_app(pool);

    // Incidents are shared between port operations and maritime management.
    for token in [&maritime, &port_ops] {
        let response =
            get_auth(app.clone(), "/api/v1/operaciones-portuarias/incidentes", token).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Berth work is not.
    let response = get_auth(
        app.clone(),
        "/api/v1/operaciones-portuarias/operaciones",
        &maritime,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The dashboard summary is open to port operations too.
    let response = get_auth(app, "/api/v1/gestion-maritima/operaciones/resumen", &port_ops).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lookups_only_need_authentication(pool: PgPool) {
    let token = token_for(&pool, Module::ReservationManagement).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app.clone(), "/api/v1/gestion-maritima/idiomas", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let languages = body_json(response).await;
    assert_eq!(languages.as_array().unwrap().len(), 4);

    let response = get_auth(app.clone(), "/api/v1/operaciones-portuarias/tipos-incidente", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/api/v1/monitoreo/tipos-notificacion").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn out_of_range_page_is_an_empty_page(pool: PgPool) {
    let token = token_for(&pool, Module::MaritimeManagement).await;
    let app = common::build_test_app(pool);

    let response = get_auth(
        app,
        "/api/v1/gestion-maritima/embarcaciones?page=9223372036854775807&limit=100",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["pagination"]["has_next"], false);
}
