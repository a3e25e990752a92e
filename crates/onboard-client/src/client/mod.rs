//! Onboard API client.
//!
//! This module provides the main client type. Endpoint groups live in
//! submodules: `account` (identity and administration), `catalog`
//! (buildings, equipment and reference data), `points` (point lookup and
//! selection) and `data` (timeseries, writes and ingest diagnostics).

mod account;
mod catalog;
mod data;
mod points;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::OnboardClientConfig;
use crate::error::ClientResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ClientConfig;
use crate::url::build_endpoint_url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Onboard client using the reqwest HTTP backend.
pub type DefaultOnboardClient = OnboardClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Onboard Data REST API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultOnboardClient` for production code and call it through the
/// `OnboardApi` trait.
pub struct OnboardClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ClientConfig,
}

impl DefaultOnboardClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// built. No request is sent until the first API call.
    pub fn new(config: &OnboardClientConfig) -> onboard_core::OnboardResult<Self> {
        Self::try_new(config).map_err(crate::port::map_error)
    }

    fn try_new(config: &OnboardClientConfig) -> ClientResult<Self> {
        let internal_config = ClientConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }
}

impl<B: HttpBackend> OnboardClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ClientConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// GET an endpoint relative to the base URL.
    pub(crate) async fn get<T: DeserializeOwned + Send>(&self, endpoint: &str) -> ClientResult<T> {
        let url = build_endpoint_url(&self.config.base_url, endpoint)?;
        self.backend.get_json(&url).await
    }

    /// POST a body to an endpoint and decode the response.
    pub(crate) async fn post<T, S>(&self, endpoint: &str, body: &S) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
        S: Serialize + ?Sized,
    {
        let url = build_endpoint_url(&self.config.base_url, endpoint)?;
        let body = serde_json::to_value(body)?;
        self.backend.post_json(&url, &body).await
    }

    /// POST a body to an endpoint, ignoring the response body.
    pub(crate) async fn post_unit<S: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &S,
    ) -> ClientResult<()> {
        let url = build_endpoint_url(&self.config.base_url, endpoint)?;
        let body = serde_json::to_value(body)?;
        self.backend.post_unit(&url, &body).await
    }
}
