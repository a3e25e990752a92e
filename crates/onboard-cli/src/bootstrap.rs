//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the concrete API client is built.
//! Command handlers receive it as `&dyn OnboardApi` and never see reqwest.

use std::sync::Arc;

use onboard_client::{Credentials, DefaultOnboardClient, Environment, OnboardClientConfig};
use onboard_core::OnboardApi;
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Hosted deployment, used when no explicit URL is given.
    pub environment: Environment,
    /// Explicit API base URL.
    pub api_url: Option<String>,
    pub credentials: Credentials,
    pub client_name: Option<String>,
}

impl CliConfig {
    /// Resolve connection settings from parsed flags and environment.
    ///
    /// Fails when no usable credentials were given, or when only one half
    /// of a username and password pair was.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let has_user = cli.user.as_deref().is_some_and(|u| !u.is_empty());
        let has_password = cli.password.is_some();
        if cli.token.is_none() && cli.api_key.is_none() && has_user != has_password {
            return Err(CliError::Config(
                "--user and --password must be given together".to_string(),
            ));
        }

        let credentials = Credentials::from_parts(
            cli.token.clone(),
            cli.api_key.clone(),
            cli.user.clone(),
            cli.password.clone(),
        );
        if !credentials.is_authenticated() {
            return Err(CliError::Config(
                "no credentials: set ONBOARD_API_KEY, ONBOARD_TOKEN or \
                 ONBOARD_USER and ONBOARD_PASSWORD"
                    .to_string(),
            ));
        }

        Ok(Self {
            environment: cli.environment,
            api_url: cli.api_url.clone().filter(|url| !url.trim().is_empty()),
            credentials,
            client_name: cli.client_name.clone(),
        })
    }

    /// Client configuration for these settings.
    pub fn client_config(&self) -> OnboardClientConfig {
        let mut config = OnboardClientConfig::for_environment(self.environment)
            .with_credentials(self.credentials.clone());
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(name) = &self.client_name {
            config = config.with_client_name(name.clone());
        }
        config
    }
}

/// Bootstrap the CLI application.
///
/// Builds the reqwest-backed client. No request is sent until the first
/// command runs.
pub fn bootstrap(config: &CliConfig) -> Result<Arc<dyn OnboardApi>, CliError> {
    let client_config = config.client_config();
    debug!(base_url = client_config.base_url(), "Creating Onboard client");

    let client = DefaultOnboardClient::new(&client_config)?;
    Ok(Arc::new(client))
}
