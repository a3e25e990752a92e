//! Command-line interface for the Onboard Data API.
//!
//! The `onboard` binary parses flags and environment into a [`CliConfig`],
//! builds a client at the composition root ([`bootstrap`]) and hands the
//! resulting `OnboardApi` to a handler for the chosen subcommand.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
