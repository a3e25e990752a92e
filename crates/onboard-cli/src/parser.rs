//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options. Every
//! connection option can also come from an `ONBOARD_*` environment variable
//! (or a `.env` file in the working directory).

use clap::Parser;
use onboard_client::Environment;

use crate::commands::Commands;

/// Command-line interface for the Onboard Data building API.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser, Debug)]
#[command(name = "onboard")]
#[command(about = "Query and update building data through the Onboard API")]
#[command(version)]
pub struct Cli {
    /// Hosted API deployment to talk to
    #[arg(
        long = "env",
        env = "ONBOARD_ENV",
        global = true,
        default_value_t = Environment::Production
    )]
    pub environment: Environment,

    /// API base URL, overriding --env (e.g. a local proxy)
    #[arg(long = "api-url", env = "ONBOARD_API_URL", global = true)]
    pub api_url: Option<String>,

    /// API key, exchanged for an access token on first use
    #[arg(long = "api-key", env = "ONBOARD_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Ready-made bearer token; takes precedence over other credentials
    #[arg(long, env = "ONBOARD_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Portal username, used together with --password
    #[arg(long, env = "ONBOARD_USER", global = true)]
    pub user: Option<String>,

    /// Portal password
    #[arg(long, env = "ONBOARD_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Name of the calling application, sent in the user agent
    #[arg(long = "client-name", env = "ONBOARD_CLIENT_NAME", global = true)]
    pub client_name: Option<String>,

    /// Print raw JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
