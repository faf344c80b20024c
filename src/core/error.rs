//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ActionError`] - Failed prepare/publish requests
//! - [`ConfigError`] - Missing page configuration

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// CSV parsing error
    #[error("CSV parse error: {0}")]
    CsvParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// A prepare or publish request that did not succeed.
///
/// Carries the message shown to the user: the server's `detail` when the
/// error body has one, otherwise a generic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ActionError {
    pub message: String,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Page configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Mount element not present in the page.
    #[error("mount element #{0} not found")]
    MissingMountElement(&'static str),
    /// Required `data-*` attribute missing or blank.
    #[error("missing data-{0} attribute")]
    MissingAttribute(&'static str),
}
