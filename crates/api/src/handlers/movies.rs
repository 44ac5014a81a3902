//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use movies_core::error::CoreError;
use movies_core::movie::{Movie, MovieInput, MOVIE_ENTITY};
use movies_core::types::DbId;
use movies_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{MovieId, ValidJson};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: MOVIE_ENTITY,
        id,
    })
}

/// GET /movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    MovieId(id): MovieId,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(movie))
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<MovieInput>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let movie = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /movies/{id}
///
/// Full replacement: every field in the body overwrites the stored value.
pub async fn update(
    State(state): State<AppState>,
    MovieId(id): MovieId,
    ValidJson(input): ValidJson<MovieInput>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete(State(state): State<AppState>, MovieId(id): MovieId) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
