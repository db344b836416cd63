//! # Error Types
//!
//! Schema violations on request input are not errors here; they come back as
//! [`crate::Validation::Invalid`]. The errors in this module are startup
//! failures, where a bad seed dataset must stop the process.

use thiserror::Error;

use crate::validate::FieldViolation;

/// Failure while parsing the seed dataset.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The seed is not valid JSON.
    #[error("seed is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The seed parsed, but its top level is not an array.
    #[error("seed must be a JSON array of movies")]
    NotAnArray,

    /// A record has no usable `id`.
    #[error("seed record {index} has no non-empty string id")]
    MissingId {
        /// Position of the record in the seed array.
        index: usize,
    },

    /// A record violates the movie schema.
    #[error("seed record {index} is invalid: {}", join(.violations))]
    InvalidRecord {
        /// Position of the record in the seed array.
        index: usize,
        /// Every violation found in the record.
        violations: Vec<FieldViolation>,
    },
}

fn join(violations: &[FieldViolation]) -> String {
    let parts: Vec<String> = violations.iter().map(ToString::to_string).collect();
    parts.join("; ")
}
