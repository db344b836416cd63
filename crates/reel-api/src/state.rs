//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The movie collection is owned by a [`MovieStore`] built once at startup
//! (see [`crate::bootstrap`]) and mutated in place for the life of the
//! process. Nothing is persisted.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use reel_core::{Movie, MovieDraft, MovieFilter, MovieId, MoviePatch};
use thiserror::Error;

// -- Movie Store --------------------------------------------------------------

/// Failure inside the store. Each variant means the id uniqueness invariant
/// would be broken.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Two records would share an id.
    #[error("duplicate movie id: {0}")]
    DuplicateId(MovieId),
}

/// Thread-safe, cloneable, ordered movie collection.
///
/// Records keep insertion order; deletion removes in place without
/// reordering the rest. Lookups are linear scans with exact string equality
/// on the id.
///
/// All operations are synchronous (the RwLock is `parking_lot`, not
/// `tokio::sync`) and never hold the lock across `.await` points, so every
/// operation is atomic with respect to every other.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl MovieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of seed records, rejecting duplicate ids.
    pub fn from_seed(movies: Vec<Movie>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(movie.id.as_str()) {
                return Err(StoreError::DuplicateId(movie.id.clone()));
            }
        }
        Ok(Self {
            movies: Arc::new(RwLock::new(movies)),
        })
    }

    /// Records matching the filter, in collection order.
    pub fn list(&self, filter: &MovieFilter) -> Vec<Movie> {
        self.movies
            .read()
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect()
    }

    /// Retrieve a record by id.
    pub fn get(&self, id: &str) -> Option<Movie> {
        self.movies.read().iter().find(|m| m.id == id).cloned()
    }

    /// Append a validated draft under a freshly generated id.
    pub fn create(&self, draft: MovieDraft) -> Result<Movie, StoreError> {
        let mut guard = self.movies.write();
        let id = MovieId::generate();
        if guard.iter().any(|m| m.id == id) {
            return Err(StoreError::DuplicateId(id));
        }
        let movie = Movie::from_draft(id, draft);
        guard.push(movie.clone());
        Ok(movie)
    }

    /// Merge a validated patch into the record in place. Returns the updated
    /// record, or `None` if no record has this id.
    pub fn update(&self, id: &str, patch: MoviePatch) -> Option<Movie> {
        let mut guard = self.movies.write();
        let movie = guard.iter_mut().find(|m| m.id == id)?;
        movie.apply(patch);
        Some(movie.clone())
    }

    /// Remove the record with this id. Returns `false`, leaving the
    /// collection untouched, if there is none.
    pub fn delete(&self, id: &str) -> bool {
        let mut guard = self.movies.write();
        match guard.iter().position(|m| m.id == id) {
            Some(index) => {
                guard.remove(index);
                true
            }
            None => false,
        }
    }

    /// Return the number of records.
    pub fn len(&self) -> usize {
        self.movies.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// -- Application State --------------------------------------------------------

/// Origins accepted when `REEL_ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:8080", "http://localhost:3000"];

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Browser origins allowed to call the API. Requests without an
    /// `Origin` header are always allowed.
    pub allowed_origins: Vec<String>,
    /// Seed dataset file. `None` uses the dataset compiled into the binary.
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// Build configuration from `PORT`, `REEL_ALLOWED_ORIGINS` (comma
    /// separated) and `REEL_SEED_PATH`. Unset or unparsable values fall back
    /// to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let allowed_origins = std::env::var("REEL_ALLOWED_ORIGINS")
            .map(|v| parse_origin_list(&v))
            .unwrap_or(defaults.allowed_origins);

        let seed_path = std::env::var_os("REEL_SEED_PATH").map(PathBuf::from);

        Self {
            port,
            allowed_origins,
            seed_path,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
            seed_path: None,
        }
    }
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly: the store is an `Arc` handle, so every clone sees the
/// same collection.
#[derive(Debug, Clone)]
pub struct AppState {
    pub movies: MovieStore,
    pub config: AppConfig,
}

impl AppState {
    /// Empty collection with default configuration.
    pub fn new() -> Self {
        Self::with_store(AppConfig::default(), MovieStore::new())
    }

    pub fn with_store(config: AppConfig, movies: MovieStore) -> Self {
        Self { movies, config }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
