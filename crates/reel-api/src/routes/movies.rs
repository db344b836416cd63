//! # Movies API
//!
//! Routes:
//! - GET    /movies         : List movies, optionally filtered by `genre` or `search`
//! - GET    /movies/{id}    : Get one movie
//! - POST   /movies         : Create a movie (store assigns the id)
//! - PATCH  /movies/{id}    : Merge a partial update into a movie
//! - DELETE /movies/{id}    : Delete a movie
//!
//! Writes validate the body before touching the store, so a PATCH with an
//! invalid body answers 400 even when the id is unknown.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use reel_core::{Movie, MovieDraft, MovieFilter, MoviePatch};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::error::AppError;
use crate::extractors::{extract_movie, extract_movie_patch};
use crate::state::AppState;

/// Query parameters for listing movies.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMoviesQuery {
    /// Genre name, matched case-insensitively against any of a movie's
    /// genres. Takes precedence over `search`.
    pub genre: Option<String>,
    /// Exact title, matched case-insensitively. Ignored when `genre` is set.
    pub search: Option<String>,
}

/// Build the movies router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).patch(update_movie).delete(delete_movie),
        )
}

/// GET /movies: List movies.
#[utoipa::path(
    get,
    path = "/movies",
    params(ListMoviesQuery),
    responses(
        (status = 200, description = "Matching movies in collection order", body = Vec<Movie>),
    ),
    tag = "movies"
)]
pub(crate) async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListMoviesQuery>,
) -> Json<Vec<Movie>> {
    let filter = MovieFilter::from_query(query.genre.as_deref(), query.search.as_deref());
    if matches!(filter, MovieFilter::Genre(_)) && query.search.is_some() {
        tracing::debug!("genre filter present, ignoring search parameter");
    }
    Json(state.movies.list(&filter))
}

/// GET /movies/{id}: Get a movie.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie found", body = Movie),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "movies"
)]
pub(crate) async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, AppError> {
    state
        .movies
        .get(&id)
        .map(Json)
        .ok_or_else(AppError::movie_not_found)
}

/// POST /movies: Create a movie.
#[utoipa::path(
    post,
    path = "/movies",
    request_body = MovieDraft,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 400, description = "Schema violations", body = crate::error::ValidationErrorBody),
    ),
    tag = "movies"
)]
pub(crate) async fn create_movie(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), AppError> {
    let draft = extract_movie(body)?;
    let movie = state.movies.create(draft)?;
    tracing::info!(movie_id = %movie.id, title = %movie.title, "movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/{id}: Partially update a movie.
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie ID")),
    request_body = MoviePatch,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 400, description = "Schema violations", body = crate::error::ValidationErrorBody),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "movies"
)]
pub(crate) async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Movie>, AppError> {
    let patch = extract_movie_patch(body)?;
    let movie = state
        .movies
        .update(&id, patch)
        .ok_or_else(AppError::movie_not_found)?;
    tracing::info!(movie_id = %movie.id, "movie updated");
    Ok(Json(movie))
}

/// DELETE /movies/{id}: Delete a movie.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie ID")),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "movies"
)]
pub(crate) async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !state.movies.delete(&id) {
        return Err(AppError::movie_not_found());
    }
    tracing::info!(movie_id = %id, "movie deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dune() -> Value {
        json!({
            "title": "Dune",
            "year": 2021,
            "director": "D. Villeneuve",
            "duration": 155,
            "poster": "https://x.test/p.jpg",
            "genre": ["Sci-fi"]
        })
    }

    #[tokio::test]
    async fn create_then_get_by_handler() {
        let state = AppState::new();
        let (status, Json(created)) = create_movie(State(state.clone()), Ok(Json(dune())))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.rate, 5.0);

        let Json(fetched) = get_movie(State(state), Path(created.id.to_string()))
            .await
            .unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_with_invalid_body_leaves_store_empty() {
        let state = AppState::new();
        let err = create_movie(State(state.clone()), Ok(Json(json!({"year": -5}))))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(state.movies.is_empty());
    }

    #[tokio::test]
    async fn patch_validates_before_lookup() {
        let state = AppState::new();
        let err = update_movie(
            State(state),
            Path("unknown".to_string()),
            Ok(Json(json!({"genre": ["Western"]}))),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_unknown_is_not_found() {
        let err = delete_movie(State(AppState::new()), Path("nope".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_with_both_filters_uses_genre() {
        let state = AppState::new();
        create_movie(State(state.clone()), Ok(Json(dune()))).await.unwrap();
        let query = ListMoviesQuery {
            genre: Some("SCI-FI".to_string()),
            search: Some("Something Else".to_string()),
        };
        let Json(movies) = list_movies(State(state), Query(query)).await;
        assert_eq!(movies.len(), 1);
    }
}
