use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Track selector outside the recognised set
    #[error("Invalid track '{value}': expected '3' or '4'")]
    InvalidTrack { value: String },
    /// Network request failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Server answered with a non-success status
    #[error("HTTP {status} while fetching {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },
    /// Listing page held no entry for the requested prefix
    #[error("No packages matching '{prefix}' found in the listing")]
    NoCandidates { prefix: String },
    /// Version key missing or not a valid semantic version
    #[error("Cannot parse version '{key}' of '{entry}': {reason}")]
    VersionParse {
        entry: String,
        key: String,
        reason: String,
    },
    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    /// Regex compilation failed
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    /// Async runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(String),
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
