//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Navigation target is not one of the known pages
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Business card format is not one of pdf, jpg or vcard
    #[error("Unknown card format: {0}")]
    UnknownFormat(String),

    /// A contact form field failed validation
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// A submission is already in flight
    #[error("A message is already being sent")]
    Busy,

    /// Preference storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Site configuration is malformed
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
