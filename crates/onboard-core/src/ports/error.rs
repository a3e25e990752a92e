//! Error types for Onboard port operations.

use thiserror::Error;

/// Errors from Onboard API operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum OnboardError {
    /// The server failed (5xx). The same call may succeed later.
    #[error("Temporary API failure (status {status}): {message}")]
    Temporary {
        /// HTTP status code
        status: u16,
        /// Response body or description
        message: String,
    },

    /// The server rejected the request (4xx).
    #[error("API request rejected (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or description
        message: String,
    },

    /// Credentials missing, expired or rejected.
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// What failed
        message: String,
    },

    /// The input cannot be sent as a valid request.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What is wrong with the input
        message: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl OnboardError {
    /// Whether retrying the same call later could succeed.
    pub const fn is_temporary(&self) -> bool {
        matches!(self, Self::Temporary { .. } | Self::Network { .. })
    }

    /// HTTP status code, for errors that came from an HTTP response.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Temporary { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for Onboard port operations.
pub type OnboardResult<T> = Result<T, OnboardError>;
