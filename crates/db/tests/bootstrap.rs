use assert_matches::assert_matches;
use movies_core::movie::MovieInput;
use movies_db::repositories::MovieRepo;
use sqlx::PgPool;

/// Full bootstrap: health check, create table, verify columns.
#[sqlx::test(migrations = false)]
async fn test_full_bootstrap(pool: PgPool) {
    movies_db::health_check(&pool).await.unwrap();
    movies_db::ensure_schema(&pool).await.unwrap();

    let columns: Vec<(String, String, String)> = sqlx::query_as(
        "SELECT column_name::TEXT, data_type::TEXT, is_nullable::TEXT \
         FROM information_schema.columns \
         WHERE table_name = 'movies' \
         ORDER BY ordinal_position",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let expected = [
        ("id", "bigint"),
        ("title", "text"),
        ("rating", "numeric"),
        ("is_scary", "boolean"),
    ];
    assert_eq!(columns.len(), expected.len());
    for ((name, data_type, nullable), (want_name, want_type)) in columns.iter().zip(expected) {
        assert_eq!(name, want_name);
        assert_eq!(data_type, want_type);
        assert_eq!(nullable, "NO", "{name} should be NOT NULL");
    }
}

/// Running the bootstrap again must neither fail nor touch existing rows.
#[sqlx::test(migrations = false)]
async fn test_bootstrap_is_idempotent(pool: PgPool) {
    movies_db::ensure_schema(&pool).await.unwrap();

    let input = MovieInput {
        title: "Halloween".to_string(),
        rating: 7.7,
        is_scary: true,
    };
    let created = MovieRepo::create(&pool, &input).await.unwrap();

    movies_db::ensure_schema(&pool).await.unwrap();

    let movies = MovieRepo::list(&pool).await.unwrap();
    assert_eq!(movies, vec![created]);
}

/// Not-null constraints hold even when the API layer is bypassed.
#[sqlx::test(migrations = false)]
async fn test_null_title_is_rejected(pool: PgPool) {
    movies_db::ensure_schema(&pool).await.unwrap();

    let result = sqlx::query("INSERT INTO movies (title, rating, is_scary) VALUES (NULL, 5.0, true)")
        .execute(&pool)
        .await;

    assert_matches!(result, Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23502"));
}

/// A table created with a 32-bit `SERIAL` key is kept as-is by the bootstrap
/// and must still be fully usable.
#[sqlx::test(migrations = false)]
async fn test_existing_serial_table_is_usable(pool: PgPool) {
    sqlx::query(
        "CREATE TABLE movies ( \
             id SERIAL PRIMARY KEY, \
             title TEXT NOT NULL, \
             rating NUMERIC(3,1) NOT NULL, \
             is_scary BOOLEAN NOT NULL \
         )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO movies (title, rating, is_scary) VALUES ('Nosferatu', 7.9, true)")
        .execute(&pool)
        .await
        .unwrap();

    movies_db::ensure_schema(&pool).await.unwrap();

    let existing = MovieRepo::list(&pool).await.unwrap();
    assert_eq!(existing.len(), 1);
    assert_eq!(existing[0].title, "Nosferatu");
    assert_eq!(existing[0].rating, 7.9);

    let input = MovieInput {
        title: "Suspiria".to_string(),
        rating: 7.4,
        is_scary: true,
    };
    let created = MovieRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.id, existing[0].id + 1);

    let found = MovieRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created.clone()));

    let replacement = MovieInput {
        title: "Suspiria (1977)".to_string(),
        rating: 7.5,
        is_scary: false,
    };
    let updated = MovieRepo::update(&pool, created.id, &replacement)
        .await
        .unwrap()
        .expect("movie should exist");
    assert_eq!(updated.title, "Suspiria (1977)");
    assert!(!updated.is_scary);

    assert!(MovieRepo::delete(&pool, created.id).await.unwrap());
    assert_eq!(MovieRepo::list(&pool).await.unwrap(), existing);
}
