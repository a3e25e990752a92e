//! Async client for the Onboard Data REST API.
//!
//! Build an [`OnboardClientConfig`], create a [`DefaultOnboardClient`] and
//! call it through the [`onboard_core::OnboardApi`] trait:
//!
//! ```no_run
//! use onboard_client::{Credentials, DefaultOnboardClient, OnboardClientConfig};
//! use onboard_core::OnboardApi;
//!
//! # async fn run() -> Result<(), onboard_core::OnboardError> {
//! let config = OnboardClientConfig::production()
//!     .with_credentials(Credentials::api_key("ob-p-..."))
//!     .with_client_name("ingest-east");
//! let client = DefaultOnboardClient::new(&config)?;
//! let buildings = client.get_all_buildings().await?;
//! # let _ = buildings;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultOnboardClient is used through the OnboardApi trait, not its
// internal generic structure
#![allow(private_interfaces)]

mod auth;
mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultOnboardClient;

// Configuration
pub use auth::{Credentials, Secret};
pub use config::{Environment, OnboardClientConfig};

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
