//! # reel-api: Axum API Service for the Reel Catalogue
//!
//! HTTP JSON API over an in-memory, ordered collection of movie records.
//!
//! ## API Surface
//!
//! | Route                  | Module                 | Purpose                  |
//! |------------------------|------------------------|--------------------------|
//! | `/movies`, `/movies/{id}` | [`routes::movies`]  | Movie CRUD and filtering |
//! | `/openapi.json`        | [`openapi`]            | Generated OpenAPI spec   |
//! | `/health/*`            | this module            | Liveness / readiness     |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → OriginGuard → CorsLayer → Handler
//! ```
//!
//! The origin guard rejects disallowed browser origins with 403 before any
//! handler, health probe included, sees the request.
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers; validation lives in `reel-core`,
//!   collection semantics in [`state::MovieStore`].
//! - All errors map to structured HTTP responses via [`AppError`].

pub mod bootstrap;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::origin::{origin_guard, OriginPolicy};

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let policy = OriginPolicy::new(&state.config.allowed_origins);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new()
        .merge(routes::movies::router())
        .merge(openapi::router())
        .merge(health)
        .layer(policy.cors_layer())
        .layer(from_fn(origin_guard))
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(policy))
        .with_state(state)
}

/// Liveness probe. Always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. The store is built before the listener binds, so a
/// running server is ready.
async fn readiness() -> &'static str {
    "ready"
}
