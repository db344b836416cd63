//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reel API",
        version = "0.1.0",
        description = "In-memory movie catalogue: list, filter, create, patch and delete movie records.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::movies::list_movies,
        crate::routes::movies::get_movie,
        crate::routes::movies::create_movie,
        crate::routes::movies::update_movie,
        crate::routes::movies::delete_movie,
    ),
    components(schemas(
        reel_core::Movie,
        reel_core::MovieDraft,
        reel_core::MoviePatch,
        reel_core::Genre,
        reel_core::FieldViolation,
        reel_core::PathSegment,
        reel_core::ViolationCode,
        crate::error::ErrorBody,
        crate::error::ValidationErrorBody,
    )),
    tags(
        (name = "movies", description = "Movie catalogue"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_movie_paths() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/movies"));
        assert!(spec.paths.paths.contains_key("/movies/{id}"));
    }
}
