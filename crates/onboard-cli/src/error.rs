//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `OnboardError` to exit codes and user-facing messages.

use onboard_core::OnboardError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The API rejected the call or answered with something unusable.
    #[error("{0}")]
    Api(String),

    /// Argument error not caught by the parser.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// An input file could not be read.
    #[error("IO error: {0}")]
    Io(String),

    /// An input file was read but is not valid JSON of the expected shape.
    #[error("Invalid input: {0}")]
    Input(String),

    /// Configuration error (missing credentials, bad base URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server or network failure; the same command may succeed later.
    #[error("Temporary failure, try again later: {0}")]
    Temporary(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Api(_) => 1,
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::Input(_) => 65,     // EX_DATAERR
            Self::Io(_) => 74,        // EX_IOERR
            Self::Temporary(_) => 75, // EX_TEMPFAIL
            Self::Config(_) => 78,    // EX_CONFIG
        }
    }

    /// Exit code for any error reaching `main`.
    pub fn exit_code_for(err: &anyhow::Error) -> u8 {
        if let Some(cli) = err.downcast_ref::<Self>() {
            return cli.exit_code();
        }
        if let Some(port) = err.downcast_ref::<OnboardError>() {
            return match port {
                OnboardError::Temporary { .. } | OnboardError::Network { .. } => 75,
                OnboardError::Configuration { .. } => 78,
                OnboardError::InvalidRequest { .. } => 2,
                OnboardError::Api { .. }
                | OnboardError::Unauthorized { .. }
                | OnboardError::InvalidResponse { .. } => 1,
            };
        }
        1
    }
}

impl From<OnboardError> for CliError {
    fn from(err: OnboardError) -> Self {
        let message = err.to_string();
        match err {
            OnboardError::Temporary { .. } | OnboardError::Network { .. } => {
                Self::Temporary(message)
            }
            OnboardError::Configuration { message } => Self::Config(message),
            OnboardError::InvalidRequest { message } => Self::Arguments(message),
            OnboardError::Api { .. }
            | OnboardError::Unauthorized { .. }
            | OnboardError::InvalidResponse { .. } => Self::Api(message),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Input(err.to_string())
    }
}
