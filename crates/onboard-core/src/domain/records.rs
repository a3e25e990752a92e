//! Records returned by the API's listing endpoints.
//!
//! Only the fields the client itself relies on are typed. Everything else
//! the server sends is preserved in `extra` so callers can still reach it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A loosely typed JSON object.
///
/// Used for endpoints whose payload the client passes through untouched
/// (users, organizations, tags, alerts, ...).
pub type Record = serde_json::Map<String, Value>;

/// Source point id mapped to destination point id, for `copy_point_data`.
pub type PointIdMap = BTreeMap<i64, i64>;

/// A building visible to the current account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub org_id: Option<i64>,
    #[serde(flatten)]
    pub extra: Record,
}

/// A piece of equipment in a building, as returned with `points=true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    /// Site-local equipment identifier (e.g. `ahu-1`).
    #[serde(default)]
    pub equip_id: Option<String>,
    #[serde(default)]
    pub building_id: Option<i64>,
    /// Ids of the points attached to this equipment.
    #[serde(default)]
    pub points: Vec<i64>,
    #[serde(flatten)]
    pub extra: Record,
}

/// A single data stream (sensor, setpoint, command) in a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: i64,
    #[serde(default)]
    pub building_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub datasource_hash: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(flatten)]
    pub extra: Record,
}

/// Timeseries data for one point, as returned by `POST /query`.
///
/// `values` holds one row per sample; each row lines up with `columns`
/// (typically a timestamp followed by raw and clean values).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesResult {
    pub point_id: i64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl TimeseriesResult {
    /// Number of samples returned.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the point had no data in the requested window.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index of a named column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_building_keeps_unknown_fields() {
        let building: Building = serde_json::from_value(json!({
            "id": 7,
            "name": "HQ",
            "org_id": 2,
            "timezone": "America/New_York"
        }))
        .unwrap();

        assert_eq!(building.id, 7);
        assert_eq!(building.name.as_deref(), Some("HQ"));
        assert_eq!(building.extra["timezone"], json!("America/New_York"));
    }

    #[test]
    fn test_equipment_points_default_empty() {
        let equipment: Equipment = serde_json::from_value(json!({"id": 3})).unwrap();
        assert!(equipment.points.is_empty());
    }

    #[test]
    fn test_point_minimal() {
        let point: Point = serde_json::from_value(json!({"id": 99})).unwrap();
        assert_eq!(point.id, 99);
        assert!(point.datasource_hash.is_none());
    }

    #[test]
    fn test_timeseries_column_lookup() {
        let ts: TimeseriesResult = serde_json::from_value(json!({
            "point_id": 5,
            "unit": "degreesFahrenheit",
            "columns": ["time", "raw", "clean"],
            "values": [["2020-01-01T00:00:00Z", 70.1, 70.1]]
        }))
        .unwrap();

        assert_eq!(ts.len(), 1);
        assert_eq!(ts.column_index("clean"), Some(2));
        assert_eq!(ts.column_index("missing"), None);
    }
}
