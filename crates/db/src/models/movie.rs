//! Movie row model.
//!
//! The table uses snake_case columns and stores `rating` as `NUMERIC`.
//! Queries select the rating as text so no precision is lost in transit;
//! conversion to the API's numeric rating happens here.

use movies_core::movie::Movie;
use movies_core::types::DbId;
use sqlx::FromRow;

/// A row from the `movies` table, with `rating` cast to text.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub title: String,
    pub rating: String,
    pub is_scary: bool,
}

/// The `rating` column held something that does not parse as a number.
#[derive(Debug, thiserror::Error)]
#[error("rating column is not numeric: {value:?}")]
pub struct InvalidRating {
    pub value: String,
}

impl TryFrom<MovieRow> for Movie {
    type Error = InvalidRating;

    fn try_from(row: MovieRow) -> Result<Self, Self::Error> {
        let rating = row
            .rating
            .trim()
            .parse::<f64>()
            .map_err(|_| InvalidRating { value: row.rating.clone() })?;

        Ok(Movie {
            id: row.id,
            title: row.title,
            rating,
            is_scary: row.is_scary,
        })
    }
}

/// Map a row into a [`Movie`], reporting a bad rating as a column decode
/// error so callers only ever see `sqlx::Error`.
pub fn into_movie(row: MovieRow) -> Result<Movie, sqlx::Error> {
    Movie::try_from(row).map_err(|err| sqlx::Error::ColumnDecode {
        index: "rating".to_string(),
        source: Box::new(err),
    })
}
