//! Startup schema bootstrap.
//!
//! Creates the `movies` table if it is absent. This runs on every startup
//! and never alters an existing table; there is no version tracking.

use sqlx::PgPool;

/// DDL for the `movies` table.
///
/// `rating` is `NUMERIC(3,1)`: one decimal place, enough for `0.0..=10.0`.
pub const CREATE_MOVIES_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS movies ( \
        id BIGSERIAL PRIMARY KEY, \
        title TEXT NOT NULL, \
        rating NUMERIC(3,1) NOT NULL, \
        is_scary BOOLEAN NOT NULL \
    )";

/// Ensure the `movies` table exists.
///
/// Holds a single pooled connection for the statement; the connection goes
/// back to the pool when it drops, whether the statement succeeded or not.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    sqlx::query(CREATE_MOVIES_TABLE).execute(&mut *conn).await?;
    tracing::debug!("movies table ensured");
    Ok(())
}
