//! # Seed Dataset
//!
//! The collection starts from a JSON array of movie records, each carrying
//! its own `id`. Every record goes through [`validate_full`] so the store
//! never holds a record the API would have refused.

use serde_json::Value;

use crate::error::SeedError;
use crate::movie::{Movie, MovieId};
use crate::validate::{validate_full, Validation};

/// Parse and validate a seed dataset.
///
/// Id uniqueness is not checked here; the store enforces it when it takes
/// ownership of the records.
pub fn parse_seed(json: &str) -> Result<Vec<Movie>, SeedError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(SeedError::NotAnArray);
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let id = item
                .get("id")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
                .ok_or(SeedError::MissingId { index })?;
            match validate_full(item) {
                Validation::Valid(draft) => Ok(Movie::from_draft(MovieId::from(id), draft)),
                Validation::Invalid(violations) => {
                    Err(SeedError::InvalidRecord { index, violations })
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::Genre;

    const TWO_MOVIES: &str = r#"[
        {
            "id": "dcdd0fad-a94c-4810-8acc-5f108d3b18c3",
            "title": "The Shawshank Redemption",
            "year": 1994,
            "director": "Frank Darabont",
            "duration": 142,
            "poster": "https://i.ebayimg.com/images/g/4goAAOSwMyBe7hnQ/s-l1200.webp",
            "genre": ["Drama"],
            "rate": 9.3
        },
        {
            "id": "c8a7d63f-3b04-44d3-9d95-8782fd7dcfaf",
            "title": "The Dark Knight",
            "year": 2008,
            "director": "Christopher Nolan",
            "duration": 152,
            "poster": "https://i.ebayimg.com/images/g/yokAAOSw8w1YARbm/s-l1200.jpg",
            "genre": ["Action", "Crime", "Drama"],
            "rate": 9.0
        }
    ]"#;

    #[test]
    fn empty_array_is_a_valid_seed() {
        assert!(parse_seed("[]").unwrap().is_empty());
    }

    #[test]
    fn parses_valid_records_in_order() {
        let json = TWO_MOVIES.replace(r#""Action", "Crime", "Drama""#, r#""Action", "Drama""#);
        let movies = parse_seed(&json).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "The Shawshank Redemption");
        assert_eq!(movies[0].id, "dcdd0fad-a94c-4810-8acc-5f108d3b18c3");
        assert_eq!(movies[1].genre, vec![Genre::Action, Genre::Drama]);
    }

    #[test]
    fn rejects_record_outside_schema() {
        // "Crime" is not in the genre set.
        match parse_seed(TWO_MOVIES) {
            Err(SeedError::InvalidRecord { index, violations }) => {
                assert_eq!(index, 1);
                assert!(violations[0].message.contains("'Crime'"));
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn rejects_record_without_id() {
        let json = r#"[{"title": "x"}]"#;
        assert!(matches!(
            parse_seed(json),
            Err(SeedError::MissingId { index: 0 })
        ));
    }

    #[test]
    fn rejects_non_array_seed() {
        assert!(matches!(parse_seed("{}"), Err(SeedError::NotAnArray)));
        assert!(matches!(parse_seed("not json"), Err(SeedError::Json(_))));
    }
}
