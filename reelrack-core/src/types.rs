//! The movie record stored in the collection.

use crate::validate::{self, ValidationError};

/// A single movie in the collection.
///
/// The title is the unique identifier: exact case-sensitive match for
/// identity, case-insensitive for search. Ratings carry one fractional
/// digit of precision.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    /// Poster image URL from the metadata provider. Display-only.
    pub poster_url: Option<String>,
}

impl Movie {
    /// Build a movie, validating every field.
    ///
    /// The rating is rounded to one decimal so persisted values always
    /// honor the precision invariant.
    pub fn new(
        title: impl Into<String>,
        year: i32,
        rating: f64,
        poster_url: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate::validate_title(&title)?;
        validate::validate_year(year)?;
        validate::validate_rating(rating)?;
        Ok(Self {
            title,
            year,
            rating: round_rating(rating),
            poster_url,
        })
    }
}

/// Round a rating to one fractional digit.
pub fn round_rating(rating: f64) -> f64 {
    (rating * 10.0).round() / 10.0
}
