//! API error types for the NiceHash REST API client.
//!
//! Only local failures are errors here. A response with a non-2xx status or
//! an error payload is still a response, and is handed back to the caller
//! untouched.

use thiserror::Error;

/// API-specific error type for the NiceHash REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest (timeout, DNS, connection refused)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request parameters could not be encoded as a query string
    #[error("Query encoding error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// Invalid client configuration
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// Whether the request failed because the client timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Http(e) if e.is_timeout())
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
