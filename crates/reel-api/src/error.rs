//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//!
//! | variant          | status | body                                  |
//! |------------------|--------|---------------------------------------|
//! | `NotFound`       | 404    | `{"error": "Movie not found"}`        |
//! | `Validation`     | 400    | `{"errors": [FieldViolation, ...]}`   |
//! | `BadRequest`     | 400    | `{"error": "<rejection text>"}`       |
//! | `OriginRejected` | 403    | `{"error": "Not allowed by CORS"}`    |
//! | `Internal`       | 500    | `{"error": "An internal error occurred"}` |
//!
//! Internal error details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reel_core::FieldViolation;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::state::StoreError;

/// Message returned for any unknown movie id.
pub const MOVIE_NOT_FOUND: &str = "Movie not found";

/// Message returned for requests from a disallowed origin.
pub const ORIGIN_REJECTED: &str = "Not allowed by CORS";

/// Single-message error body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Schema violation body returned for rejected writes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorBody {
    pub errors: Vec<FieldViolation>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Referenced movie does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// Request body failed schema validation (400).
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// Request body could not be parsed as JSON (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Request came from an origin outside the allow-list (403).
    #[error("Not allowed by CORS")]
    OriginRejected,

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn movie_not_found() -> Self {
        Self::NotFound(MOVIE_NOT_FOUND.to_string())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::OriginRejected => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(errors) => {
                return (status, Json(ValidationErrorBody { errors })).into_response();
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "internal server error");
                "An internal error occurred".to_string()
            }
            Self::NotFound(message) | Self::BadRequest(message) => message,
            Self::OriginRejected => ORIGIN_REJECTED.to_string(),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Store errors are broken invariants, not client mistakes.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}
