//! Mutations against the movie collection.

use log::debug;
use reelrack_core::Movie;
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(rusqlite::Error),
    #[error("Movie '{title}' already exists")]
    Duplicate { title: String },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Sqlite(err)
    }
}

/// Insert a new movie.
///
/// Callers are expected to check for an existing title via a prior
/// snapshot; the primary key still refuses duplicates and that refusal
/// is reported as [`StoreError::Duplicate`] rather than a raw SQLite
/// error. The check-then-insert gap is a known race, accepted for a
/// single-user CLI.
pub fn insert_movie(conn: &Connection, movie: &Movie) -> Result<(), StoreError> {
    let result = conn.execute(
        "INSERT INTO movies (title, year, rating, url) VALUES (?1, ?2, ?3, ?4)",
        params![movie.title, movie.year, movie.rating, movie.poster_url],
    );
    match result {
        Ok(_) => {
            debug!("inserted '{}' ({})", movie.title, movie.year);
            Ok(())
        }
        Err(e) if is_constraint_violation(&e) => Err(StoreError::Duplicate {
            title: movie.title.clone(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Delete a movie by exact title.
///
/// Returns `Ok(false)` when no row matched; a missing title is a no-op,
/// not an error, since callers check existence against the snapshot.
pub fn delete_movie(conn: &Connection, title: &str) -> Result<bool, StoreError> {
    let changed = conn.execute("DELETE FROM movies WHERE title = ?1", params![title])?;
    debug!("delete '{}' affected {} row(s)", title, changed);
    Ok(changed > 0)
}

/// Rewrite only the rating of an existing movie, matched by exact title.
///
/// Year and poster are untouched. Returns `Ok(false)` when no row matched.
pub fn update_rating(conn: &Connection, title: &str, rating: f64) -> Result<bool, StoreError> {
    let changed = conn.execute(
        "UPDATE movies SET rating = ?2 WHERE title = ?1",
        params![title, rating],
    )?;
    debug!("update '{}' affected {} row(s)", title, changed);
    Ok(changed > 0)
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
