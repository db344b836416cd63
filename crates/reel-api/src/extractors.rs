//! # Body Extraction & Validation
//!
//! Write handlers take the body as raw JSON and run it through the movie
//! schema validator, so that type mismatches are reported per field instead
//! of as a single deserialization failure.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use reel_core::{validate_full, validate_partial, MovieDraft, MoviePatch};
use serde_json::Value;

use crate::error::AppError;

/// Extract a JSON body, mapping syntax and content-type rejections to
/// [`AppError::BadRequest`].
pub fn extract_json(result: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a body that must be a complete movie.
pub fn extract_movie(result: Result<Json<Value>, JsonRejection>) -> Result<MovieDraft, AppError> {
    let value = extract_json(result)?;
    validate_full(&value)
        .into_result()
        .map_err(AppError::Validation)
}

/// Extract a body that holds a partial movie update.
pub fn extract_movie_patch(
    result: Result<Json<Value>, JsonRejection>,
) -> Result<MoviePatch, AppError> {
    let value = extract_json(result)?;
    validate_partial(&value)
        .into_result()
        .map_err(AppError::Validation)
}
