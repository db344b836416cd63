//! # List Filters
//!
//! A list request carries at most one effective filter. When both `genre`
//! and `search` are supplied, the genre filter wins and the title search is
//! dropped.

use crate::movie::Movie;

/// Which records a list request selects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MovieFilter {
    /// Every record.
    #[default]
    All,
    /// Records carrying the genre, compared case-insensitively.
    /// Holds the lowercased query.
    Genre(String),
    /// Records whose title equals the query, compared case-insensitively.
    /// Exact match, not substring. Holds the lowercased query.
    Title(String),
}

impl MovieFilter {
    /// Build the filter from raw query parameters. Empty strings count as
    /// absent.
    pub fn from_query(genre: Option<&str>, search: Option<&str>) -> Self {
        let genre = genre.filter(|g| !g.is_empty());
        let search = search.filter(|s| !s.is_empty());
        match (genre, search) {
            (Some(genre), _) => Self::Genre(genre.to_lowercase()),
            (None, Some(search)) => Self::Title(search.to_lowercase()),
            (None, None) => Self::All,
        }
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            Self::All => true,
            Self::Genre(lowered) => movie.genre.iter().any(|g| g.matches_lowered(lowered)),
            Self::Title(lowered) => movie.title.to_lowercase() == *lowered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::Genre;
    use crate::movie::MovieId;

    fn movie(title: &str, genre: Vec<Genre>) -> Movie {
        Movie {
            id: MovieId::generate(),
            title: title.to_string(),
            year: 1999,
            director: "Someone".to_string(),
            duration: 120,
            poster: "https://img.test/p.jpg".to_string(),
            genre,
            rate: 7.0,
        }
    }

    #[test]
    fn empty_query_means_all() {
        assert_eq!(MovieFilter::from_query(None, None), MovieFilter::All);
        assert_eq!(MovieFilter::from_query(Some(""), Some("")), MovieFilter::All);
    }

    #[test]
    fn genre_takes_precedence_over_search() {
        let filter = MovieFilter::from_query(Some("Drama"), Some("The Matrix"));
        assert_eq!(filter, MovieFilter::Genre("drama".to_string()));
    }

    #[test]
    fn empty_genre_falls_back_to_search() {
        let filter = MovieFilter::from_query(Some(""), Some("Heat"));
        assert_eq!(filter, MovieFilter::Title("heat".to_string()));
    }

    #[test]
    fn genre_filter_matches_any_genre_case_insensitively() {
        let m = movie("Alien", vec![Genre::Horror, Genre::SciFi]);
        assert!(MovieFilter::from_query(Some("SCI-FI"), None).matches(&m));
        assert!(MovieFilter::from_query(Some("horror"), None).matches(&m));
        assert!(!MovieFilter::from_query(Some("comedy"), None).matches(&m));
    }

    #[test]
    fn title_filter_is_exact_not_substring() {
        let m = movie("The Matrix", vec![Genre::Action]);
        assert!(MovieFilter::from_query(None, Some("the matrix")).matches(&m));
        assert!(!MovieFilter::from_query(None, Some("matrix")).matches(&m));
        assert!(!MovieFilter::from_query(None, Some("The Matrix Reloaded")).matches(&m));
    }
}
