//! Port definitions (trait abstractions) for the Onboard API.
//!
//! The port is the interface consumers program against. It uses only
//! domain types; the HTTP implementation lives in `onboard-client`.

mod api;
mod error;

pub use api::OnboardApi;
pub use error::{OnboardError, OnboardResult};
