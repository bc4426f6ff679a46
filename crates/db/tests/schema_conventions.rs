use sqlx::PgPool;

const SCHEMAS: &str = "('compartido', 'seguridad', 'gestion_maritima', 'gestion_reserva', \
                       'monitoreo', 'operaciones_portuarias')";

/// All `id` columns must be uuid.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_pks_are_uuid(pool: PgPool) {
    let rows: Vec<(String, String, String)> = sqlx::query_as(&format!(
        "SELECT table_schema, table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema IN {SCHEMAS}
         ORDER BY table_schema, table_name"
    ))
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (schema, table, data_type) in &rows {
        assert_eq!(
            data_type, "uuid",
            "Table {schema}.{table}.id should be uuid, got {data_type}"
        );
    }
}

/// Every table must have created_at and updated_at as timestamptz.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_tables_have_timestamps(pool: PgPool) {
    let tables: Vec<(String, String)> = sqlx::query_as(&format!(
        "SELECT table_schema, table_name
         FROM information_schema.tables
         WHERE table_schema IN {SCHEMAS}
           AND table_type = 'BASE TABLE'
         ORDER BY table_schema, table_name"
    ))
    .fetch_all(&pool)
    .await
    .unwrap();

    for (schema, table) in &tables {
        for col in ["created_at", "updated_at"] {
            let result: Option<(String,)> = sqlx::query_as(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = $1
                   AND table_name = $2
                   AND column_name = $3",
            )
            .bind(schema)
            .bind(table)
            .bind(col)
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) =
                result.unwrap_or_else(|| panic!("Table {schema}.{table} is missing column {col}"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {schema}.{table}.{col} should be timestamptz, got {data_type}"
            );
        }
    }
}

/// Every table must carry the updated_at trigger.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_tables_have_updated_at_trigger(pool: PgPool) {
    let missing: Vec<(String, String)> = sqlx::query_as(&format!(
        "SELECT t.table_schema, t.table_name
         FROM information_schema.tables t
         WHERE t.table_schema IN {SCHEMAS}
           AND t.table_type = 'BASE TABLE'
           AND NOT EXISTS (
               SELECT 1 FROM information_schema.triggers tr
               WHERE tr.event_object_schema = t.table_schema
                 AND tr.event_object_table = t.table_name
                 AND tr.action_statement LIKE '%trigger_set_updated_at%'
           )
         ORDER BY t.table_schema, t.table_name"
    ))
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(missing.is_empty(), "Tables without updated_at trigger: {missing:?}");
}

/// Unique constraints use the `uq_` prefix so the API can map them to 409.
#[sqlx::test(migrations = "./migrations")]
async fn test_unique_constraints_are_prefixed(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(&format!(
        "SELECT table_name, constraint_name
         FROM information_schema.table_constraints
         WHERE constraint_type = 'UNIQUE'
           AND table_schema IN {SCHEMAS}"
    ))
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table, name) in &rows {
        assert!(
            name.starts_with("uq_"),
            "Unique constraint {name} on {table} should start with uq_"
        );
    }
}
