//! Timestamp wire format.
//!
//! The API takes and returns ISO 8601 UTC timestamps with a `Z` suffix and
//! whole-second precision, e.g. `2019-11-29T20:16:25Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Format a timestamp the way the API expects it.
pub fn to_api_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an API timestamp (any RFC 3339 offset is accepted and normalized to UTC).
pub fn parse_api_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|ts| ts.with_timezone(&Utc))
}

/// `serialize_with` adapter for required timestamps.
pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_api_timestamp(ts))
}

/// `serialize_with` adapter for optional timestamps.
#[allow(clippy::ref_option)] // serde dictates the signature
pub fn serialize_opt<S: Serializer>(
    ts: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match ts {
        Some(ts) => serializer.serialize_str(&to_api_timestamp(ts)),
        None => serializer.serialize_none(),
    }
}
