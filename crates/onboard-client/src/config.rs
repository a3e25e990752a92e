//! Public configuration for the Onboard client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config (`models::ClientConfig`) is derived from this.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::auth::Credentials;

/// A hosted Onboard API deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Development,
}

impl Environment {
    /// Base URL of the deployment's API.
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => "https://api.onboarddata.io",
            Self::Development => "https://devapi.onboarddata.io",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Production => "production",
            Self::Development => "development",
        })
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            other => Err(format!(
                "unknown environment '{other}' (expected production or development)"
            )),
        }
    }
}

/// Configuration for the Onboard client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use onboard_client::{Credentials, OnboardClientConfig};
/// use std::time::Duration;
///
/// let config = OnboardClientConfig::development()
///     .with_credentials(Credentials::api_key("ob-p-..."))
///     .with_timeout(Duration::from_secs(60))
///     .with_client_name("nightly-export");
/// ```
#[derive(Debug, Clone)]
pub struct OnboardClientConfig {
    /// Base URL for the API
    pub(crate) base_url: String,
    /// How requests are authenticated
    pub(crate) credentials: Credentials,
    /// Identifies the calling application in the user agent
    pub(crate) client_name: Option<String>,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors on reads
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for OnboardClientConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl OnboardClientConfig {
    /// Configuration targeting an arbitrary API base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: Credentials::None,
            client_name: None,
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }

    /// Configuration targeting a hosted deployment.
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        Self::new(env.base_url())
    }

    /// `https://api.onboarddata.io`
    #[must_use]
    pub fn production() -> Self {
        Self::for_environment(Environment::Production)
    }

    /// `https://devapi.onboarddata.io`
    #[must_use]
    pub fn development() -> Self {
        Self::for_environment(Environment::Development)
    }

    /// Set the base URL for the API.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials used to authenticate.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Name the calling application; appended to the user agent.
    #[must_use]
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.client_name = if name.trim().is_empty() {
            None
        } else {
            Some(name)
        };
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Only reads are retried. Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// The base URL as configured.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// User agent sent with every request.
    pub(crate) fn user_agent(&self) -> String {
        let base = concat!("onboard-client/", env!("CARGO_PKG_VERSION"));
        match &self.client_name {
            Some(name) => format!("{base} {name}"),
            None => base.to_string(),
        }
    }
}
