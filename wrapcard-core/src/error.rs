//! Error types for wrapcard-core

use thiserror::Error;

/// Main error type for the wrapcard-core library
///
/// Rendering itself never fails; these errors come from loading
/// configuration, categories and form values.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Category not found in a catalog
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    /// Form value that is neither a string nor a number
    #[error("invalid form value for field {field}: {message}")]
    InvalidFormValue { field: String, message: String },
}

/// Result type alias for wrapcard-core
pub type Result<T> = std::result::Result<T, Error>;
