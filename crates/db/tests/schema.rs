use sqlx::PgPool;

/// Connect, migrate, and verify the cities schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap(pool: PgPool) {
    cities_db::health_check(&pool).await.unwrap();

    let columns: Vec<(String, String)> = sqlx::query_as(
        "SELECT column_name::text, data_type::text FROM information_schema.columns \
         WHERE table_name = 'cities' ORDER BY ordinal_position",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["id", "name", "created_at", "updated_at"]);
    assert_eq!(columns[0].1, "bigint");
    assert_eq!(columns[2].1, "timestamp with time zone");
}

/// The name index must be unique and carry the name the API matches on.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_name_index_exists(pool: PgPool) {
    let (is_unique,): (bool,) = sqlx::query_as(
        "SELECT ix.indisunique FROM pg_index ix \
         JOIN pg_class c ON c.oid = ix.indexrelid \
         WHERE c.relname = $1",
    )
    .bind(cities_db::UQ_CITIES_NAME)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert!(is_unique);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_schema_version_reports_latest_migration(pool: PgPool) {
    let version = cities_db::schema_version(&pool).await.unwrap();
    assert_eq!(version, Some(20260101000001));
}
