//! SQLite persistence layer for the movie collection.
//!
//! Provides schema creation, CRUD operations, and snapshot queries
//! backed by SQLite (via rusqlite with bundled feature).
//!
//! There is no global connection state: every operation borrows an
//! explicitly constructed `Connection` handle, and rusqlite commits each
//! statement before returning, so a write is durable by the time the
//! caller sees `Ok`.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{StoreError, delete_movie, insert_movie, update_rating};
pub use queries::{find_movie, get_all_movies, movie_count};
pub use rusqlite::Connection;
pub use schema::{SchemaError, open_database, open_memory};
