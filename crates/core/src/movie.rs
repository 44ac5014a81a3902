//! Movie domain types and field rules.
//!
//! [`Movie`] is the API-facing representation (camelCase on the wire).
//! [`MovieInput`] is the full-replacement payload accepted by both create
//! and update; its shape is enforced by serde (required fields, strict
//! types, no unknown fields) and its value ranges by `validator`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Lowest accepted rating (inclusive).
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted rating (inclusive).
pub const MAX_RATING: f64 = 10.0;

/// Entity name used in not-found errors.
pub const MOVIE_ENTITY: &str = "Movie";

/// A persisted movie as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub rating: f64,
    pub is_scary: bool,
}

/// Request body for `POST /movies` and `PUT /movies/{id}`.
///
/// PUT uses the same payload: every field is required, there is no
/// partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MovieInput {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(range(min = 0.0, max = 10.0, message = "must be between 0 and 10"))]
    pub rating: f64,
    pub is_scary: bool,
}

/// Validate a movie id taken from a request path.
///
/// Ids are assigned by a BIGSERIAL sequence, so anything below 1 can never
/// match a row and is rejected as malformed input rather than looked up.
pub fn validate_movie_id(id: DbId) -> Result<DbId, CoreError> {
    if id < 1 {
        return Err(CoreError::Validation(format!(
            "params/id must be a positive integer, got {id}"
        )));
    }
    Ok(id)
}
