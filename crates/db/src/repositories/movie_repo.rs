//! Repository for the `movies` table.
//!
//! Every method issues exactly one parameterized statement. Absence is
//! reported as `None` / `false`; deciding what that means for HTTP is the
//! caller's job.

use movies_core::movie::{Movie, MovieInput};
use movies_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{into_movie, MovieRow};

/// Column list for `movies` queries. `rating` comes back as text; `id` is
/// widened so tables created with a 32-bit `SERIAL` key decode as well.
const COLUMNS: &str = "id::BIGINT AS id, title, rating::TEXT AS rating, is_scary";

/// Provides data access for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List all movies in creation (id) order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, MovieRow>(&query)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(into_movie)
            .collect()
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(into_movie)
            .transpose()
    }

    /// Insert a new movie, returning it with its assigned id.
    pub async fn create(pool: &PgPool, input: &MovieInput) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, rating, is_scary) \
             VALUES ($1, $2::NUMERIC, $3) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(&input.title)
            .bind(input.rating)
            .bind(input.is_scary)
            .fetch_one(pool)
            .await?;
        into_movie(row)
    }

    /// Replace every field of a movie.
    ///
    /// Returns `None` if no movie has the given id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MovieInput,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET \
                 title = $2, \
                 rating = $3::NUMERIC, \
                 is_scary = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.rating)
            .bind(input.is_scary)
            .fetch_optional(pool)
            .await?
            .map(into_movie)
            .transpose()
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
