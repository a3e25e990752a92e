//! HTTP backend abstraction for the Onboard API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest, exchanges credentials for an access token on first use and
//! retries transient failures of read requests.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};
use url::Url;

use crate::auth::{
    ApiKeyLogin, Credentials, LOGIN_API_KEY_PATH, LOGIN_PASSWORD_PATH, PasswordLogin,
    TokenResponse,
};
use crate::error::{ClientError, ClientResult};
use crate::models::ClientConfig;
use crate::url::build_endpoint_url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the API.
///
/// This is an implementation detail - external code should use the
/// `OnboardApi` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL and deserialize the JSON response.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ClientResult<T>;

    /// POST a JSON body and deserialize the JSON response.
    async fn post_json<T: DeserializeOwned + Send>(&self, url: &Url, body: &Value)
    -> ClientResult<T>;

    /// POST a JSON body, only checking the response status.
    async fn post_unit(&self, url: &Url, body: &Value) -> ClientResult<()>;
}

/// Whether a status code is an error response.
///
/// Anything above 399 is an error; above 499 is a server-side error that may
/// go away on its own.
pub const fn is_error_status(status: u16) -> bool {
    status > 399
}

pub const fn is_temporary_status(status: u16) -> bool {
    status > 499
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// GET requests are retried with exponential backoff on 5xx responses and
/// network errors. POST requests are sent once: point updates and data
/// copies are not idempotent.
pub struct ReqwestBackend {
    client: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    /// Bearer token, resolved once. `None` inside means unauthenticated.
    token: OnceCell<Option<String>>,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            credentials: config.credentials.clone(),
            token: OnceCell::new(),
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
        })
    }

    /// The bearer token to send, exchanging credentials on first use.
    ///
    /// Concurrent first callers share a single exchange. A failed exchange
    /// is not cached, so the next call tries again.
    async fn bearer(&self) -> ClientResult<Option<&str>> {
        let token = self
            .token
            .get_or_try_init(|| self.resolve_token())
            .await?;
        Ok(token.as_deref())
    }

    async fn resolve_token(&self) -> ClientResult<Option<String>> {
        match &self.credentials {
            Credentials::None => Ok(None),
            Credentials::Token(token) => Ok(Some(token.expose().to_string())),
            Credentials::ApiKey(key) => {
                let body = serde_json::to_value(ApiKeyLogin { key: key.expose() })?;
                self.login(LOGIN_API_KEY_PATH, &body).await.map(Some)
            }
            Credentials::UserPassword { user, password } => {
                let body = serde_json::to_value(PasswordLogin {
                    login: user,
                    password: password.expose(),
                })?;
                self.login(LOGIN_PASSWORD_PATH, &body).await.map(Some)
            }
        }
    }

    async fn login(&self, path: &str, body: &Value) -> ClientResult<String> {
        let url = build_endpoint_url(&self.base_url, path)?;
        info!(url = %url, "Exchanging credentials for an access token");

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status().as_u16();
        if is_error_status(status) {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::LoginFailed { status, message });
        }

        let token: TokenResponse = decode(response).await?;
        if token.access_token.is_empty() {
            return Err(ClientError::InvalidResponse {
                message: "login response contained an empty access_token".to_string(),
            });
        }
        Ok(token.access_token)
    }

    /// Send a request, retrying transient failures when `method` is GET.
    async fn execute(
        &self,
        method: Method,
        url: &Url,
        body: Option<&Value>,
    ) -> ClientResult<reqwest::Response> {
        let bearer = self.bearer().await?;
        let max_retries = if method == Method::GET {
            self.max_retries
        } else {
            0
        };
        let mut last_error: Option<ClientError> = None;

        for attempt in 0..=max_retries {
            if attempt > 0 {
                let delay = backoff_delay(self.retry_base_delay_ms, attempt);
                warn!(
                    url = %url,
                    attempt,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "Retrying Onboard API request"
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.request(method.clone(), url.clone());
            if let Some(token) = bearer {
                request = request.bearer_auth(token);
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    debug!(method = %method, url = %url, status, "Onboard API response");

                    if !is_error_status(status) {
                        return Ok(response);
                    }

                    let error = ClientError::ApiRequestFailed {
                        status,
                        url: url.to_string(),
                        body: response.text().await.unwrap_or_default(),
                    };

                    // Server-side failures are retryable
                    if is_temporary_status(status) && attempt < max_retries {
                        last_error = Some(error);
                        continue;
                    }

                    // Client errors or final attempt - fail immediately
                    return Err(error);
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < max_retries {
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ClientError::InvalidResponse {
            message: "Unknown error during request".to_string(),
        }))
    }
}

/// Delay before retry number `attempt`: `base_ms * 2^(attempt - 1)`, saturating.
fn backoff_delay(base_ms: u64, attempt: u8) -> Duration {
    let factor = 1u64
        .checked_shl(u32::from(attempt.saturating_sub(1)))
        .unwrap_or(u64::MAX);
    Duration::from_millis(base_ms.saturating_mul(factor))
}

/// Read a response body as JSON.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(Into::into)
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ClientResult<T> {
        let response = self.execute(Method::GET, url, None).await?;
        decode(response).await
    }

    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &Value,
    ) -> ClientResult<T> {
        let response = self.execute(Method::POST, url, Some(body)).await?;
        decode(response).await
    }

    async fn post_unit(&self, url: &Url, body: &Value) -> ClientResult<()> {
        self.execute(Method::POST, url, Some(body)).await?;
        Ok(())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
