//! Command handlers that delegate to the `OnboardApi` port.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn <command>(api: &dyn OnboardApi, format, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input (files, id pairs)
//!   2. Call one port method
//!   3. Format output for the terminal
//!
//! Handlers should NOT build clients or talk HTTP; that happens in
//! `bootstrap`.

pub mod account;
pub mod catalog;
pub mod data;
pub mod points;
