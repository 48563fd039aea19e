//! OMDb metadata lookup client.
//!
//! Given a free-text title, returns the canonical title, release year,
//! rating (one decimal), and poster URL — or an explicit error, never a
//! partial record. The API key is loaded from the environment or a TOML
//! config file.

pub mod client;
pub mod credentials;
pub mod error;
pub mod types;

pub use client::OmdbClient;
pub use credentials::{config_path, load_api_key, save_to_file};
pub use error::LookupError;
pub use types::MovieInfo;
