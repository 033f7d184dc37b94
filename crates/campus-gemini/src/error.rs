//! Error types for Gemini operations.

use thiserror::Error;

/// Errors that can occur when interacting with the Gemini API.
#[derive(Error, Debug)]
pub enum GeminiError {
    /// The configured API key environment variable is unset or empty.
    #[error("API key environment variable {var} is not set")]
    MissingApiKey { var: String },

    /// Unable to reach the API host.
    #[error("Connection error: could not reach {host}")]
    Connection { host: String },

    /// Request timeout.
    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// API returned an error response.
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The response carried no usable text.
    #[error("Model response contained no text")]
    EmptyResponse,

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, GeminiError>;
