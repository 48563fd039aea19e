//! Read queries for the movie collection.

use reelrack_core::Movie;
use rusqlite::{Connection, params};

use crate::operations::StoreError;

/// Retrieve the full collection snapshot, in retrieval order.
///
/// A failed read surfaces as an error; callers must treat it as "no data
/// available", not as an empty collection.
pub fn get_all_movies(conn: &Connection) -> Result<Vec<Movie>, StoreError> {
    let mut stmt = conn.prepare("SELECT title, year, rating, url FROM movies")?;
    let rows = stmt.query_map([], row_to_movie)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a movie by exact title.
pub fn find_movie(conn: &Connection, title: &str) -> Result<Option<Movie>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT title, year, rating, url FROM movies WHERE title = ?1 LIMIT 1")?;
    let result = stmt.query_row(params![title], row_to_movie);
    match result {
        Ok(movie) => Ok(Some(movie)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Number of movies in the collection.
pub fn movie_count(conn: &Connection) -> Result<i64, StoreError> {
    let count = conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
    Ok(count)
}

fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        title: row.get(0)?,
        year: row.get(1)?,
        rating: row.get(2)?,
        poster_url: row.get(3)?,
    })
}
