//! Read-only projections over a collection snapshot.
//!
//! Every function takes the snapshot as a borrowed slice and returns owned
//! results; the snapshot is never mutated. Tie-breaks are defined against
//! snapshot order (stable sorts), which is the retrieval order of the
//! backing store.

use rand::seq::SliceRandom;
use thiserror::Error;

use crate::types::{Movie, round_rating};

#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("No movies in the collection")]
    EmptyCollection,
}

/// Descriptive statistics over the collection's ratings.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Arithmetic mean of ratings, rounded to 1 decimal.
    pub average: f64,
    /// Median rating, rounded to 1 decimal. Even counts average the two
    /// middle values.
    pub median: f64,
    /// Highest-rated movie; first encountered on ties under descending sort.
    pub best: Movie,
    /// Lowest-rated movie; last under descending sort (the symmetric
    /// tie-break rule).
    pub worst: Movie,
}

/// All movies sorted by rating, highest first. Stable.
pub fn sort_by_rating(snapshot: &[Movie]) -> Vec<Movie> {
    let mut sorted = snapshot.to_vec();
    sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    sorted
}

/// All movies sorted by release year. Stable.
pub fn sort_by_year(snapshot: &[Movie], latest_first: bool) -> Vec<Movie> {
    let mut sorted = snapshot.to_vec();
    if latest_first {
        sorted.sort_by(|a, b| b.year.cmp(&a.year));
    } else {
        sorted.sort_by(|a, b| a.year.cmp(&b.year));
    }
    sorted
}

/// Movies with `rating >= min_rating` released within
/// `start_year..=end_year`. All bounds inclusive; callers pass the range
/// extremes for "no restriction".
pub fn filter_movies(
    snapshot: &[Movie],
    min_rating: f64,
    start_year: i32,
    end_year: i32,
) -> Vec<Movie> {
    snapshot
        .iter()
        .filter(|m| m.rating >= min_rating && start_year <= m.year && m.year <= end_year)
        .cloned()
        .collect()
}

/// Case-insensitive substring search on titles, in snapshot order.
pub fn search(snapshot: &[Movie], query: &str) -> Vec<Movie> {
    let needle = query.to_lowercase();
    snapshot
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Compute mean, median, best, and worst over a non-empty snapshot.
pub fn stats(snapshot: &[Movie]) -> Result<Stats, ViewError> {
    if snapshot.is_empty() {
        return Err(ViewError::EmptyCollection);
    }

    let total: f64 = snapshot.iter().map(|m| m.rating).sum();
    let average = round_rating(total / snapshot.len() as f64);

    let mut ratings: Vec<f64> = snapshot.iter().map(|m| m.rating).collect();
    ratings.sort_by(f64::total_cmp);
    let mid = ratings.len() / 2;
    let median = if ratings.len() % 2 == 0 {
        round_rating((ratings[mid - 1] + ratings[mid]) / 2.0)
    } else {
        round_rating(ratings[mid])
    };

    let by_rating = sort_by_rating(snapshot);
    let best = by_rating[0].clone();
    let worst = by_rating[by_rating.len() - 1].clone();

    Ok(Stats {
        average,
        median,
        best,
        worst,
    })
}

/// Uniformly pick one movie from a non-empty snapshot.
pub fn random_pick(snapshot: &[Movie]) -> Result<&Movie, ViewError> {
    snapshot
        .choose(&mut rand::thread_rng())
        .ok_or(ViewError::EmptyCollection)
}
