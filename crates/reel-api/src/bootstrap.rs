//! # Startup Bootstrap
//!
//! Builds the application state once at process start:
//!
//! 1. **Load Seed**: Read `REEL_SEED_PATH` if configured, otherwise use the
//!    dataset compiled into the binary.
//! 2. **Validate Seed**: Every record must pass the movie schema.
//! 3. **Build Store**: Seed ids must be unique.
//! 4. **Log Banner**: Port, seed source, record count, allowed origins.
//!
//! Any failure aborts startup; the service never runs on a partial or
//! inconsistent collection.

use std::path::PathBuf;

use reel_core::{parse_seed, Movie, SeedError};

use crate::state::{AppConfig, AppState, MovieStore, StoreError};

/// Seed dataset shipped with the binary.
pub const EMBEDDED_SEED: &str = include_str!("../data/movies.json");

/// Errors during startup.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// Seed file could not be read.
    #[error("cannot read seed file {}: {source}", .path.display())]
    ReadSeed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed content is malformed or violates the schema.
    #[error("invalid seed dataset: {0}")]
    Seed(#[from] SeedError),

    /// Seed records share an id.
    #[error("invalid seed dataset: {0}")]
    Store(#[from] StoreError),
}

/// Build the application state from configuration.
pub fn bootstrap(config: AppConfig) -> Result<AppState, BootstrapError> {
    let movies = load_seed(&config)?;
    let store = MovieStore::from_seed(movies)?;
    log_banner(&config, store.len());
    Ok(AppState::with_store(config, store))
}

/// Read and validate the configured seed dataset.
pub fn load_seed(config: &AppConfig) -> Result<Vec<Movie>, BootstrapError> {
    match &config.seed_path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| BootstrapError::ReadSeed {
                path: path.clone(),
                source,
            })?;
            Ok(parse_seed(&json)?)
        }
        None => Ok(parse_seed(EMBEDDED_SEED)?),
    }
}

fn log_banner(config: &AppConfig, movie_count: usize) {
    let seed_source = config
        .seed_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "embedded".to_string());
    tracing::info!(
        port = config.port,
        seed = %seed_source,
        movies = movie_count,
        allowed_origins = ?config.allowed_origins,
        "movie collection loaded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::MovieFilter;
    use std::io::Write;
    use std::path::Path;

    fn write_temp_seed(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("movies.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    fn config_with_seed(path: PathBuf) -> AppConfig {
        AppConfig {
            seed_path: Some(path),
            ..AppConfig::default()
        }
    }

    #[test]
    fn embedded_seed_is_valid() {
        let state = bootstrap(AppConfig::default()).unwrap();
        assert!(!state.movies.is_empty());
    }

    #[test]
    fn seed_file_replaces_embedded_dataset() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_temp_seed(
            tmp.path(),
            r#"[{
                "id": "m-1",
                "title": "Heat",
                "year": 1995,
                "director": "Michael Mann",
                "duration": 170,
                "poster": "https://img.test/heat.jpg",
                "genre": ["Action", "Drama"]
            }]"#,
        );
        let state = bootstrap(config_with_seed(path)).unwrap();
        let all = state.movies.list(&MovieFilter::All);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "m-1");
        assert_eq!(all[0].rate, 5.0);
    }

    #[test]
    fn empty_seed_file_gives_empty_store() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_temp_seed(tmp.path(), "[]");
        let state = bootstrap(config_with_seed(path)).unwrap();
        assert!(state.movies.is_empty());
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = bootstrap(config_with_seed(tmp.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, BootstrapError::ReadSeed { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn invalid_seed_record_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_temp_seed(
            tmp.path(),
            r#"[{"id": "x", "title": "Bad", "year": -1, "director": "d",
                 "duration": 90, "poster": "https://p.test", "genre": ["Drama"]}]"#,
        );
        let err = bootstrap(config_with_seed(path)).unwrap_err();
        assert!(matches!(err, BootstrapError::Seed(_)));
        assert!(err.to_string().contains("year"));
    }

    #[test]
    fn duplicate_seed_ids_are_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let record = r#"{"id": "dup", "title": "T", "year": 2000, "director": "d",
                         "duration": 90, "poster": "https://p.test", "genre": ["Drama"]}"#;
        let path = write_temp_seed(tmp.path(), &format!("[{record}, {record}]"));
        let err = bootstrap(config_with_seed(path)).unwrap_err();
        assert!(matches!(err, BootstrapError::Store(StoreError::DuplicateId(_))));
    }
}
