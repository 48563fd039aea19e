//! Field validation and bounded numeric parsing.
//!
//! Pure functions, no I/O. Callers (the interactive shell) loop until a
//! valid value or an explicit blank-default is obtained; nothing here
//! silently coerces out-of-range input.

use thiserror::Error;

/// Maximum allowed title length in characters.
pub const MAX_TITLE_LEN: usize = 30;
/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1900;
/// Latest accepted release year.
pub const MAX_YEAR: i32 = 2030;
/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;
/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Movie name must not be empty nor greater than {MAX_TITLE_LEN} characters")]
    InvalidTitle,
    #[error("Invalid input. Please enter a valid number.")]
    NotNumeric,
    #[error("Please enter a valid value, in the range {min}-{max}")]
    OutOfRange { min: f64, max: f64 },
}

/// Reject an empty title or one longer than [`MAX_TITLE_LEN`] characters.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() || title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::InvalidTitle);
    }
    Ok(())
}

/// Reject a year outside [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn validate_year(year: i32) -> Result<(), ValidationError> {
    if year < MIN_YEAR || year > MAX_YEAR {
        return Err(ValidationError::OutOfRange {
            min: MIN_YEAR as f64,
            max: MAX_YEAR as f64,
        });
    }
    Ok(())
}

/// Reject a rating outside [`MIN_RATING`]..=[`MAX_RATING`].
pub fn validate_rating(rating: f64) -> Result<(), ValidationError> {
    if rating < MIN_RATING || rating > MAX_RATING {
        return Err(ValidationError::OutOfRange {
            min: MIN_RATING,
            max: MAX_RATING,
        });
    }
    Ok(())
}

/// Parse a numeric value from free-text input, enforcing inclusive bounds.
///
/// Input containing any alphabetic character is rejected outright so that
/// values like "1e3" or "nan" never slip through the float parser.
pub fn parse_bounded(input: &str, min: f64, max: f64) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.chars().any(|c| c.is_alphabetic()) {
        return Err(ValidationError::NotNumeric);
    }
    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotNumeric)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { min, max });
    }
    Ok(value)
}

/// Like [`parse_bounded`], but blank input yields the caller-supplied
/// default instead of a rejection. Used for optional filter bounds.
pub fn parse_bounded_or_default(
    input: &str,
    min: f64,
    max: f64,
    default: f64,
) -> Result<f64, ValidationError> {
    if input.trim().is_empty() {
        return Ok(default);
    }
    parse_bounded(input, min, max)
}

/// Whole-number variant of [`parse_bounded_or_default`] for year bounds.
///
/// Fractional input like "2001.7" is rejected rather than truncated, so
/// a typo can never silently widen a year window.
pub fn parse_bounded_int_or_default(
    input: &str,
    min: i32,
    max: i32,
    default: i32,
) -> Result<i32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    if trimmed.chars().any(|c| c.is_alphabetic()) {
        return Err(ValidationError::NotNumeric);
    }
    let value: i32 = trimmed.parse().map_err(|_| ValidationError::NotNumeric)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            min: min as f64,
            max: max as f64,
        });
    }
    Ok(value)
}
