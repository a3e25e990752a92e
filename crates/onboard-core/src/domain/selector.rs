//! Point selection filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::records::Record;

/// Filter sent to `POST /points/select`.
///
/// Every list narrows the selection; an empty list places no constraint on
/// that dimension. The server intersects all non-empty constraints.
///
/// # Example
///
/// ```
/// use onboard_core::PointSelector;
///
/// let selector = PointSelector::new()
///     .with_buildings([12, 14])
///     .with_point_types(["Zone Temperature"]);
/// assert_eq!(selector.buildings, vec![12, 14]);
/// assert!(!selector.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointSelector {
    /// Organization ids.
    pub orgs: Vec<i64>,
    /// Building ids.
    pub buildings: Vec<i64>,
    /// Explicit point ids.
    pub point_ids: Vec<i64>,
    /// Point names as reported by the source system.
    pub point_names: Vec<String>,
    /// Datasource hashes.
    pub point_hashes: Vec<String>,
    /// Point topics.
    pub point_topics: Vec<String>,
    /// Equipment ids.
    pub equipment: Vec<i64>,
    /// Equipment type tags (e.g. `ahu`, `vav`).
    pub equipment_types: Vec<String>,
    /// Point type tags (e.g. `Zone Temperature`).
    pub point_types: Vec<String>,
    /// Only points whose data changed after this instant.
    #[serde(
        serialize_with = "super::time::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_since: Option<DateTime<Utc>>,
}

impl PointSelector {
    /// Create an empty selector (matches every visible point).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to organizations.
    #[must_use]
    pub fn with_orgs(mut self, orgs: impl IntoIterator<Item = i64>) -> Self {
        self.orgs = orgs.into_iter().collect();
        self
    }

    /// Restrict to buildings.
    #[must_use]
    pub fn with_buildings(mut self, buildings: impl IntoIterator<Item = i64>) -> Self {
        self.buildings = buildings.into_iter().collect();
        self
    }

    /// Restrict to explicit point ids.
    #[must_use]
    pub fn with_point_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.point_ids = ids.into_iter().collect();
        self
    }

    /// Restrict to point names.
    #[must_use]
    pub fn with_point_names<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.point_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to datasource hashes.
    #[must_use]
    pub fn with_point_hashes<S: Into<String>>(
        mut self,
        hashes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.point_hashes = hashes.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to point topics.
    #[must_use]
    pub fn with_point_topics<S: Into<String>>(
        mut self,
        topics: impl IntoIterator<Item = S>,
    ) -> Self {
        self.point_topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to equipment ids.
    #[must_use]
    pub fn with_equipment(mut self, equipment: impl IntoIterator<Item = i64>) -> Self {
        self.equipment = equipment.into_iter().collect();
        self
    }

    /// Restrict to equipment type tags.
    #[must_use]
    pub fn with_equipment_types<S: Into<String>>(
        mut self,
        types: impl IntoIterator<Item = S>,
    ) -> Self {
        self.equipment_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to point type tags.
    #[must_use]
    pub fn with_point_types<S: Into<String>>(
        mut self,
        types: impl IntoIterator<Item = S>,
    ) -> Self {
        self.point_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Only select points updated after `since`.
    #[must_use]
    pub const fn with_updated_since(mut self, since: DateTime<Utc>) -> Self {
        self.updated_since = Some(since);
        self
    }

    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Result of `POST /points/select`.
///
/// Lists every entity id that matched, grouped by kind. `points` is the
/// list callers usually want.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointSelection {
    /// Matching organization ids.
    pub orgs: Vec<i64>,
    /// Matching building ids.
    pub buildings: Vec<i64>,
    /// Matching equipment ids.
    pub equipment: Vec<i64>,
    /// Matching point ids.
    pub points: Vec<i64>,
    /// Keys this client does not model.
    #[serde(flatten)]
    pub extra: Record,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_empty_selector_serializes_empty_lists() {
        let value = serde_json::to_value(PointSelector::new()).unwrap();
        assert_eq!(value["buildings"], json!([]));
        assert_eq!(value["point_types"], json!([]));
        assert!(value.get("updated_since").is_none());
    }

    #[test]
    fn test_selector_builder() {
        let since = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
        let selector = PointSelector::new()
            .with_orgs([1])
            .with_buildings([10, 11])
            .with_equipment_types(["ahu"])
            .with_point_hashes(vec!["abc".to_string()])
            .with_updated_since(since);

        let value = serde_json::to_value(&selector).unwrap();
        assert_eq!(value["orgs"], json!([1]));
        assert_eq!(value["buildings"], json!([10, 11]));
        assert_eq!(value["equipment_types"], json!(["ahu"]));
        assert_eq!(value["point_hashes"], json!(["abc"]));
        assert_eq!(value["updated_since"], json!("2023-01-02T03:04:05Z"));
    }

    #[test]
    fn test_selector_is_empty() {
        assert!(PointSelector::new().is_empty());
        assert!(!PointSelector::new().with_point_ids([1]).is_empty());
    }

    #[test]
    fn test_selection_defaults_missing_lists() {
        let selection: PointSelection =
            serde_json::from_value(json!({"points": [1, 2, 3], "query_ms": 12})).unwrap();
        assert_eq!(selection.points, vec![1, 2, 3]);
        assert!(selection.buildings.is_empty());
        assert_eq!(selection.extra["query_ms"], json!(12));
    }
}
