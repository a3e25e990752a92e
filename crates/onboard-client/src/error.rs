//! Internal error types for Onboard API operations.
//!
//! These errors are internal to `onboard-client` and are mapped to
//! `OnboardError` at the port boundary.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors related to Onboard API requests.
#[derive(Debug, Error)]
pub enum ClientError {
    /// API request failed with an HTTP error status.
    #[error("Onboard API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Response body, usually the server's explanation
        body: String,
    },

    /// Exchanging credentials for an access token failed.
    #[error("Login failed with status {status}: {message}")]
    LoginFailed {
        /// HTTP status code of the login response
        status: u16,
        /// Response body
        message: String,
    },

    /// The caller's input cannot be turned into a valid request.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What is wrong with the input
        message: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Onboard API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
