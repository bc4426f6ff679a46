use sqlx::PgPool;

/// Connect, migrate and verify the lookup seed rows.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    logistica_db::health_check(&pool).await.unwrap();

    let tables = [
        "compartido.languages",
        "seguridad.modules",
        "monitoreo.notification_types",
        "operaciones_portuarias.incident_types",
        "operaciones_portuarias.incident_statuses",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert!(count.0 > 0, "{table} should have seed data, got 0 rows");
    }
}

/// Every `Module` variant must have a matching seed row.
#[sqlx::test(migrations = "./migrations")]
async fn test_module_slugs_are_seeded(pool: PgPool) {
    let slugs: Vec<String> = sqlx::query_scalar("SELECT slug FROM seguridad.modules")
        .fetch_all(&pool)
        .await
        .unwrap();

    for module in logistica_core::modules::Module::ALL {
        assert!(
            slugs.iter().any(|s| s == module.slug()),
            "module {module} has no seed row"
        );
    }
}

/// The default incident status used on create exists.
#[sqlx::test(migrations = "./migrations")]
async fn test_default_incident_status_exists(pool: PgPool) {
    let status = logistica_db::repositories::IncidentRepo::find_status_by_code(
        &pool,
        logistica_db::repositories::incident_repo::DEFAULT_STATUS_CODE,
    )
    .await
    .unwrap();
    assert!(status.is_some());
}
