//! Internal request types and configuration.
//!
//! These types are internal to `onboard-client`. External consumers use the
//! domain types from `onboard-core`.

use chrono::{DateTime, Utc};
use onboard_core::PointIdMap;
use onboard_core::domain::time;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use crate::auth::Credentials;
use crate::config::OnboardClientConfig;
use crate::error::ClientResult;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Onboard client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Parsed API base URL
    pub base_url: Url,
    pub credentials: Credentials,
    pub user_agent: String,
    pub timeout: Duration,
    /// Maximum number of retry attempts for transient errors (default: 3)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
}

impl ClientConfig {
    /// Validate and convert the public configuration.
    pub fn from_public(config: &OnboardClientConfig) -> ClientResult<Self> {
        Ok(Self {
            base_url: Url::parse(config.base_url.trim())?,
            credentials: config.credentials.clone(),
            user_agent: config.user_agent(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            retry_base_delay_ms: u64::try_from(config.retry_base_delay.as_millis())
                .unwrap_or(u64::MAX),
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_public(&OnboardClientConfig::default())
            .expect("production API URL is valid")
    }
}

// ============================================================================
// Request bodies
// ============================================================================

/// Body of `POST /query`.
#[derive(Debug, Serialize)]
pub struct TimeseriesQuery<'a> {
    pub point_ids: &'a [i64],
    #[serde(serialize_with = "time::serialize")]
    pub start_time: DateTime<Utc>,
    #[serde(serialize_with = "time::serialize")]
    pub end_time: DateTime<Utc>,
}

/// Body of `POST /point-data-copy`.
#[derive(Debug, Serialize)]
pub struct PointDataCopy<'a> {
    pub point_id_map: &'a PointIdMap,
    #[serde(serialize_with = "time::serialize")]
    pub start_time: DateTime<Utc>,
    #[serde(serialize_with = "time::serialize")]
    pub end_time: DateTime<Utc>,
}
