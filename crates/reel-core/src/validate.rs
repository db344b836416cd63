//! # Movie Schema Validation
//!
//! Checks untyped request bodies against the movie record contract and
//! produces normalized, fully typed data.
//!
//! ## Contract
//!
//! | field      | rule                                                      |
//! |------------|-----------------------------------------------------------|
//! | `title`    | string, non-empty                                         |
//! | `year`     | integer, > 0                                              |
//! | `director` | string, non-empty                                         |
//! | `duration` | integer, > 0 (minutes)                                    |
//! | `poster`   | URL with scheme and host                                  |
//! | `genre`    | non-empty array of canonical [`Genre`] names              |
//! | `rate`     | number, > 0; defaults to [`DEFAULT_RATE`] in full mode    |
//!
//! Unknown fields are ignored and dropped. `null` is a type error, not an
//! absent field. Every violation found is reported, in the order of the
//! table above.
//!
//! Neither entry point fails: invalid input comes back as
//! [`Validation::Invalid`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;
use utoipa::ToSchema;

use crate::genre::Genre;
use crate::movie::{MovieDraft, MoviePatch, DEFAULT_RATE};

/// Outcome of validating an input.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation<T> {
    /// Input satisfied the schema; carries the normalized data.
    Valid(T),
    /// Input violated the schema; never empty.
    Invalid(Vec<FieldViolation>),
}

impl<T> Validation<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Convert into a `Result` for `?`-style propagation.
    pub fn into_result(self) -> Result<T, Vec<FieldViolation>> {
        match self {
            Self::Valid(data) => Ok(data),
            Self::Invalid(violations) => Err(violations),
        }
    }
}

/// One step of the path to a violating value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Machine-readable violation reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    Required,
    InvalidType,
    TooSmall,
    TooBig,
    NotInteger,
    InvalidUrl,
    InvalidEnumValue,
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldViolation {
    /// Path to the offending value; empty when the input as a whole is wrong.
    pub path: Vec<PathSegment>,
    pub code: ViolationCode,
    pub message: String,
}

impl FieldViolation {
    /// Name of the top-level field this violation concerns, if any.
    pub fn field(&self) -> Option<&str> {
        match self.path.first() {
            Some(PathSegment::Field(name)) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            return f.write_str(&self.message);
        }
        let path: Vec<String> = self.path.iter().map(ToString::to_string).collect();
        write!(f, "{}: {}", path.join("."), self.message)
    }
}

/// Validate a complete movie. Missing required fields are violations and an
/// absent `rate` becomes [`DEFAULT_RATE`].
pub fn validate_full(input: &Value) -> Validation<MovieDraft> {
    let Some(obj) = input.as_object() else {
        return Validation::Invalid(vec![root_type_violation(input)]);
    };
    let mut c = Checker::new(obj, Mode::Full);

    let title = c.text("title");
    let year = c.positive_int("year");
    let director = c.text("director");
    let duration = c.positive_int("duration");
    let poster = c.url("poster");
    let genre = c.genres("genre");
    let rate = c.positive_number("rate");

    if !c.violations.is_empty() {
        return Validation::Invalid(c.violations);
    }

    match (title, year, director, duration, poster, genre) {
        (Some(title), Some(year), Some(director), Some(duration), Some(poster), Some(genre)) => {
            Validation::Valid(MovieDraft {
                title,
                year,
                director,
                duration,
                poster,
                genre,
                rate: rate.unwrap_or(DEFAULT_RATE),
            })
        }
        // Full mode records a `required` violation for every missing field,
        // so reaching here means the checks above disagree with each other.
        _ => Validation::Invalid(vec![FieldViolation {
            path: Vec::new(),
            code: ViolationCode::Required,
            message: "Required".to_string(),
        }]),
    }
}

/// Validate a partial movie. Every field is optional; present fields obey
/// the same rules as [`validate_full`]. Nothing is defaulted.
pub fn validate_partial(input: &Value) -> Validation<MoviePatch> {
    let Some(obj) = input.as_object() else {
        return Validation::Invalid(vec![root_type_violation(input)]);
    };
    let mut c = Checker::new(obj, Mode::Partial);

    let patch = MoviePatch {
        title: c.text("title"),
        year: c.positive_int("year"),
        director: c.text("director"),
        duration: c.positive_int("duration"),
        poster: c.url("poster"),
        genre: c.genres("genre"),
        rate: c.positive_number("rate"),
    };

    if c.violations.is_empty() {
        Validation::Valid(patch)
    } else {
        Validation::Invalid(c.violations)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Full,
    Partial,
}

/// Accumulates violations while extracting typed fields.
struct Checker<'a> {
    obj: &'a Map<String, Value>,
    mode: Mode,
    violations: Vec<FieldViolation>,
}

impl<'a> Checker<'a> {
    fn new(obj: &'a Map<String, Value>, mode: Mode) -> Self {
        Self {
            obj,
            mode,
            violations: Vec::new(),
        }
    }

    fn reject(&mut self, path: Vec<PathSegment>, code: ViolationCode, message: String) {
        self.violations.push(FieldViolation {
            path,
            code,
            message,
        });
    }

    fn reject_field(&mut self, field: &str, code: ViolationCode, message: impl Into<String>) {
        self.reject(
            vec![PathSegment::Field(field.to_string())],
            code,
            message.into(),
        );
    }

    /// Look up a field, recording `required` when full mode finds it missing.
    fn get(&mut self, field: &str) -> Option<&'a Value> {
        let value = self.obj.get(field);
        if value.is_none() && self.mode == Mode::Full {
            self.reject_field(field, ViolationCode::Required, "Required");
        }
        value
    }

    fn text(&mut self, field: &str) -> Option<String> {
        let value = self.get(field)?;
        let Some(s) = value.as_str() else {
            self.reject_field(
                field,
                ViolationCode::InvalidType,
                format!("Expected string, received {}", kind(value)),
            );
            return None;
        };
        if s.trim().is_empty() {
            self.reject_field(
                field,
                ViolationCode::TooSmall,
                "String must contain at least 1 character(s)",
            );
            return None;
        }
        Some(s.to_string())
    }

    fn positive_int(&mut self, field: &str) -> Option<u32> {
        let value = self.get(field)?;
        let Some(n) = value.as_f64() else {
            self.reject_field(
                field,
                ViolationCode::InvalidType,
                format!("Expected number, received {}", kind(value)),
            );
            return None;
        };
        if n.fract() != 0.0 {
            self.reject_field(
                field,
                ViolationCode::NotInteger,
                "Expected integer, received float",
            );
            return None;
        }
        if n <= 0.0 {
            self.reject_field(field, ViolationCode::TooSmall, "Number must be greater than 0");
            return None;
        }
        if n > f64::from(u32::MAX) {
            self.reject_field(
                field,
                ViolationCode::TooBig,
                format!("Number must be less than or equal to {}", u32::MAX),
            );
            return None;
        }
        Some(n as u32)
    }

    fn positive_number(&mut self, field: &str) -> Option<f64> {
        // `rate` is optional in both modes.
        let value = self.obj.get(field)?;
        let Some(n) = value.as_f64().filter(|n| n.is_finite()) else {
            self.reject_field(
                field,
                ViolationCode::InvalidType,
                format!("Expected number, received {}", kind(value)),
            );
            return None;
        };
        if n <= 0.0 {
            self.reject_field(field, ViolationCode::TooSmall, "Number must be greater than 0");
            return None;
        }
        Some(n)
    }

    fn url(&mut self, field: &str) -> Option<String> {
        let value = self.get(field)?;
        let Some(s) = value.as_str() else {
            self.reject_field(
                field,
                ViolationCode::InvalidType,
                format!("Expected string, received {}", kind(value)),
            );
            return None;
        };
        match Url::parse(s) {
            Ok(url) if url.has_host() => Some(s.to_string()),
            _ => {
                self.reject_field(field, ViolationCode::InvalidUrl, "Invalid url");
                None
            }
        }
    }

    fn genres(&mut self, field: &str) -> Option<Vec<Genre>> {
        let value = self.get(field)?;
        let Some(items) = value.as_array() else {
            self.reject_field(
                field,
                ViolationCode::InvalidType,
                format!("Expected array, received {}", kind(value)),
            );
            return None;
        };
        if items.is_empty() {
            self.reject_field(
                field,
                ViolationCode::TooSmall,
                "Array must contain at least 1 element(s)",
            );
            return None;
        }

        let before = self.violations.len();
        let mut genres = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let path = vec![PathSegment::Field(field.to_string()), PathSegment::Index(i)];
            match item.as_str() {
                Some(name) => match name.parse::<Genre>() {
                    Ok(genre) => genres.push(genre),
                    Err(_) => self.reject(
                        path,
                        ViolationCode::InvalidEnumValue,
                        format!(
                            "Invalid enum value. Expected {}, received '{name}'",
                            expected_genres()
                        ),
                    ),
                },
                None => self.reject(
                    path,
                    ViolationCode::InvalidType,
                    format!("Expected string, received {}", kind(item)),
                ),
            }
        }

        (self.violations.len() == before).then_some(genres)
    }
}

fn root_type_violation(input: &Value) -> FieldViolation {
    FieldViolation {
        path: Vec::new(),
        code: ViolationCode::InvalidType,
        message: format!("Expected object, received {}", kind(input)),
    }
}

/// `'Action' | 'Animation' | ...`
fn expected_genres() -> String {
    let names: Vec<String> = Genre::ALL
        .iter()
        .map(|g| format!("'{}'", g.as_str()))
        .collect();
    names.join(" | ")
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
