//! # Movie Records
//!
//! [`Movie`] is the stored record. [`MovieDraft`] is the normalized output of
//! full validation (everything but the id), and [`MoviePatch`] the normalized
//! output of partial validation (every field optional).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::genre::Genre;

/// Rate assigned on creation when the input omits one.
pub const DEFAULT_RATE: f64 = 5.0;

/// Opaque movie identifier.
///
/// Generated ids are UUID v4 text, but seed records may carry any non-empty
/// string, so lookups compare the raw text exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String)]
pub struct MovieId(String);

impl MovieId {
    /// Fresh random identifier (128-bit, UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MovieId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for MovieId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A stored movie record. Field order here is the JSON field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Release year.
    pub year: u32,
    pub director: String,
    /// Running time in minutes.
    pub duration: u32,
    /// Poster image URL, kept exactly as submitted.
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

impl Movie {
    /// Attach an id to a fully validated draft.
    pub fn from_draft(id: MovieId, draft: MovieDraft) -> Self {
        Self {
            id,
            title: draft.title,
            year: draft.year,
            director: draft.director,
            duration: draft.duration,
            poster: draft.poster,
            genre: draft.genre,
            rate: draft.rate,
        }
    }

    /// Merge a partial update over this record. Fields absent from the
    /// patch keep their current value; the id is never touched.
    pub fn apply(&mut self, patch: MoviePatch) {
        let MoviePatch {
            title,
            year,
            director,
            duration,
            poster,
            genre,
            rate,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(year) = year {
            self.year = year;
        }
        if let Some(director) = director {
            self.director = director;
        }
        if let Some(duration) = duration {
            self.duration = duration;
        }
        if let Some(poster) = poster {
            self.poster = poster;
        }
        if let Some(genre) = genre {
            self.genre = genre;
        }
        if let Some(rate) = rate {
            self.rate = rate;
        }
    }
}

/// Normalized output of full validation, with `rate` already defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MovieDraft {
    pub title: String,
    pub year: u32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

/// Normalized output of partial validation. Absent fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct MoviePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<Genre>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

impl MoviePatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> MovieDraft {
        MovieDraft {
            title: "Dune".to_string(),
            year: 2021,
            director: "D. Villeneuve".to_string(),
            duration: 155,
            poster: "https://x.test/p.jpg".to_string(),
            genre: vec![Genre::SciFi],
            rate: DEFAULT_RATE,
        }
    }

    #[test]
    fn generated_ids_are_distinct_uuids() {
        let a = MovieId::generate();
        let b = MovieId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn from_draft_keeps_every_field() {
        let id = MovieId::from("seed-1");
        let movie = Movie::from_draft(id.clone(), draft());
        assert_eq!(movie.id, id);
        assert_eq!(movie.title, "Dune");
        assert_eq!(movie.year, 2021);
        assert_eq!(movie.genre, vec![Genre::SciFi]);
        assert_eq!(movie.rate, 5.0);
    }

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut movie = Movie::from_draft(MovieId::from("m"), draft());
        movie.apply(MoviePatch {
            year: Some(2024),
            rate: Some(8.1),
            ..MoviePatch::default()
        });
        assert_eq!(movie.year, 2024);
        assert_eq!(movie.rate, 8.1);
        assert_eq!(movie.title, "Dune");
        assert_eq!(movie.duration, 155);
        assert_eq!(movie.id, "m");
    }

    #[test]
    fn apply_empty_patch_is_identity() {
        let original = Movie::from_draft(MovieId::from("m"), draft());
        let mut movie = original.clone();
        let patch = MoviePatch::default();
        assert!(patch.is_empty());
        movie.apply(patch);
        assert_eq!(movie, original);
    }

    #[test]
    fn movie_serializes_id_first() {
        let movie = Movie::from_draft(MovieId::from("abc"), draft());
        let json = serde_json::to_string(&movie).unwrap();
        assert!(json.starts_with(r#"{"id":"abc","title":"Dune""#), "{json}");
        assert!(json.contains(r#""rate":5.0"#), "{json}");
    }
}
