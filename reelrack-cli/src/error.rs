use thiserror::Error;

/// Errors that can abort CLI startup.
///
/// Everything past startup is recovered at the menu boundary and printed;
/// only a missing database or runtime is fatal.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened
    #[error("Database error: {0}")]
    Database(String),

    /// Runtime creation failed
    #[error("Runtime error: {0}")]
    Runtime(String),
}
