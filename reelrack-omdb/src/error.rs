/// Errors that can occur during metadata lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("The API request timed out")]
    Timeout,

    #[error("No movie found for '{title}'")]
    NotFound { title: String },

    #[error("API key was rejected by OMDb")]
    InvalidKey,

    #[error("API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
