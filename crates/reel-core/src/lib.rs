//! # reel-core: Domain Types for the Reel Catalogue
//!
//! Everything the service knows about a movie lives here: the record shape,
//! the closed genre vocabulary, the schema validator that guards every write,
//! the list filter, and the seed dataset parser.
//!
//! ## Key Design Principles
//!
//! 1. **Validated construction only.** A [`Movie`] is built from a
//!    [`MovieDraft`], and a draft only comes out of [`validate_full`]. The
//!    store never sees unchecked input.
//!
//! 2. **Results, not faults.** Malformed input is a normal outcome. The
//!    validator returns [`Validation::Invalid`] with one [`FieldViolation`]
//!    per problem instead of an error or a panic.
//!
//! 3. **Closed genre set.** [`Genre`] is an exhaustive enum; the canonical
//!    spelling is the serialized form.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `reel-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod filter;
pub mod genre;
pub mod movie;
pub mod seed;
pub mod validate;

pub use error::SeedError;
pub use filter::MovieFilter;
pub use genre::Genre;
pub use movie::{Movie, MovieDraft, MovieId, MoviePatch, DEFAULT_RATE};
pub use seed::parse_seed;
pub use validate::{
    validate_full, validate_partial, FieldViolation, PathSegment, Validation, ViolationCode,
};
