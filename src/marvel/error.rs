//! Errors produced while talking to the Marvel API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarvelError {
    /// No public key in config or environment
    #[error("Marvel public API key is not configured")]
    MissingApiKey,

    /// Base URL plus path did not form a valid URL
    #[error("Invalid API URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Transport failure (DNS, connect, TLS, timeout, body read)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// 404, or a success envelope with no results
    #[error("Character {id} not found")]
    NotFound { id: u32 },

    /// Body was not the expected JSON envelope
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl MarvelError {
    /// Short machine-readable kind, used in log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            MarvelError::MissingApiKey => "missing_api_key",
            MarvelError::InvalidUrl { .. } => "invalid_url",
            MarvelError::Request(err) if err.is_timeout() => "timeout",
            MarvelError::Request(_) => "request_error",
            MarvelError::Status { .. } => "status_error",
            MarvelError::NotFound { .. } => "not_found",
            MarvelError::Decode(_) => "decode_error",
        }
    }
}
