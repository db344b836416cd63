//! # Genre Vocabulary
//!
//! The closed set of genres a movie may carry. Matching on input is
//! case-sensitive against the canonical spelling; list filtering is
//! case-insensitive.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A movie genre, serialized with its canonical spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Genre {
    Action,
    Animation,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Thriller,
    #[serde(rename = "Sci-fi")]
    SciFi,
}

impl Genre {
    /// Every genre, in canonical order.
    pub const ALL: [Genre; 10] = [
        Genre::Action,
        Genre::Animation,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Mystery,
        Genre::Thriller,
        Genre::SciFi,
    ];

    /// Canonical spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Animation => "Animation",
            Self::Adventure => "Adventure",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Fantasy => "Fantasy",
            Self::Horror => "Horror",
            Self::Mystery => "Mystery",
            Self::Thriller => "Thriller",
            Self::SciFi => "Sci-fi",
        }
    }

    /// Case-insensitive comparison against a caller-supplied name.
    ///
    /// `lowered` must already be lowercased; the list filter lowercases the
    /// query once instead of once per record.
    pub fn matches_lowered(&self, lowered: &str) -> bool {
        self.as_str().to_lowercase() == lowered
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a canonical genre name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGenre(pub String);

impl std::fmt::Display for UnknownGenre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown genre \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownGenre {}

impl FromStr for Genre {
    type Err = UnknownGenre;

    /// Exact, case-sensitive lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}
