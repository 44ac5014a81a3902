//! Validating extractors.
//!
//! These run before a handler body executes, so a request that fails here
//! never reaches the repository layer. Every rejection is an [`AppError`]
//! and therefore renders as a JSON 400.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use movies_core::error::CoreError;
use movies_core::movie::validate_movie_id;
use movies_core::types::DbId;
use movies_core::validation::validate_input;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// The `{id}` path segment of a single-movie route, guaranteed to be a
/// positive integer.
///
/// ```ignore
/// async fn get_by_id(MovieId(id): MovieId) -> AppResult<Json<Movie>> { ... }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieId(pub DbId);

impl<S> FromRequestParts<S> for MovieId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected movie id");
                CoreError::Validation("params/id must be a positive integer".to_string())
            })?;

        Ok(MovieId(validate_movie_id(id)?))
    }
}

/// JSON body extractor that also runs the payload's `validator` rules.
///
/// Shape problems (missing or unknown fields, wrong types) and rule
/// violations both become `VALIDATION_ERROR`; bodies that are not JSON at
/// all become `BAD_REQUEST`.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_to_error)?;

        validate_input("body", &value)?;

        Ok(ValidJson(value))
    }
}

fn json_rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            AppError::Core(CoreError::Validation(format!("body {}", err.body_text())))
        }
        other => AppError::BadRequest(other.body_text()),
    }
}
