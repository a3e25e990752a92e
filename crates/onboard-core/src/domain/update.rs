//! Point data writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The latest value of a point, sent to `POST /points_update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointDataUpdate {
    pub point_id: i64,
    /// Raw value as read from the source system.
    pub value: Value,
    /// When the value was read.
    #[serde(serialize_with = "super::time::serialize")]
    pub last_updated: DateTime<Utc>,
}

impl PointDataUpdate {
    pub fn new(point_id: i64, value: impl Into<Value>, last_updated: DateTime<Utc>) -> Self {
        Self {
            point_id,
            value: value.into(),
            last_updated,
        }
    }
}
