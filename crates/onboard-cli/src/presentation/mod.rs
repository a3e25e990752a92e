//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no API calls
//! - Handlers decide what to show; this module decides how it looks

pub mod output;
pub mod tables;

// Re-export commonly used items
pub use output::{OutputFormat, emit_records, print_json};
pub use tables::{format_optional, print_separator, render_table, truncate_string};
