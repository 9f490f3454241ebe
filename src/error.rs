//! Error types for Unicode Finder
//!
//! Provides standardized error handling across the library and binaries.

use thiserror::Error;

/// Errors that can occur in Unicode Finder
#[derive(Debug, Error)]
pub enum FinderError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset document was reachable but not usable
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Clipboard operation errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Desktop notification errors
    #[error("Notification error: {0}")]
    Notification(String),

    /// Dataset generation errors
    #[error("Generator error: {0}")]
    Generator(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP errors while fetching a remote document
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for Unicode Finder operations
pub type FinderResult<T> = Result<T, FinderError>;
