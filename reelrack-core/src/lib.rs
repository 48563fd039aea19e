//! Movie collection data model, validation, and derived views.
//!
//! This crate defines the `Movie` record and all pure operations over a
//! collection snapshot without any database or network dependencies.
//! Consumers read a snapshot from `reelrack-db` and pass it to the view
//! functions here; nothing in this crate performs I/O.

pub mod types;
pub mod validate;
pub mod views;

pub use types::Movie;
pub use validate::{
    MAX_RATING, MAX_TITLE_LEN, MAX_YEAR, MIN_RATING, MIN_YEAR, ValidationError,
    parse_bounded, parse_bounded_int_or_default, parse_bounded_or_default, validate_title,
};
pub use views::{
    Stats, ViewError, filter_movies, random_pick, search, sort_by_rating, sort_by_year, stats,
};
