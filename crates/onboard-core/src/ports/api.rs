//! Onboard API port trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::OnboardResult;
use crate::domain::{
    Building, Equipment, IngestStats, Point, PointDataUpdate, PointIdMap, PointSelection,
    PointSelector, Record, TimeseriesResult,
};

/// Port trait for Onboard Data API operations.
///
/// The implementation lives in `onboard-client`.
///
/// # Design
///
/// - Uses core-owned types, never HTTP types
/// - Returns `OnboardError` for all failures
/// - Bulk operations are chunked by the implementation; callers pass
///   arbitrarily long inputs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OnboardApi: Send + Sync {
    /// The current account's information.
    async fn whoami(&self) -> OnboardResult<Record>;

    /// Action audit log by or affecting the current account.
    async fn get_account_actions(&self) -> OnboardResult<Vec<Record>>;

    /// Visible user accounts.
    ///
    /// For organization admins this is all users in the organization.
    /// For other users it is just the current account.
    async fn get_users(&self) -> OnboardResult<Vec<Record>>;

    async fn get_organizations(&self) -> OnboardResult<Vec<Record>>;

    async fn get_all_buildings(&self) -> OnboardResult<Vec<Building>>;

    async fn get_tags(&self) -> OnboardResult<Vec<Record>>;

    async fn get_equipment_types(&self) -> OnboardResult<Vec<Record>>;

    /// Equipment in a building, each with its point ids.
    async fn get_building_equipment(&self, building_id: i64) -> OnboardResult<Vec<Equipment>>;

    /// Resolve a selector to matching entity ids.
    async fn select_points(&self, selector: &PointSelector) -> OnboardResult<PointSelection>;

    /// Every point id visible to the account, walking buildings then equipment.
    async fn get_all_points(&self) -> OnboardResult<Vec<i64>>;

    /// Point records for the given ids, in request order of the chunks.
    async fn get_points_by_ids(&self, point_ids: &[i64]) -> OnboardResult<Vec<Point>>;

    /// Point records for the given datasource hashes.
    async fn get_points_by_datasource(
        &self,
        datasource_hashes: &[String],
    ) -> OnboardResult<Vec<Point>>;

    async fn get_all_point_types(&self) -> OnboardResult<Vec<Record>>;

    async fn get_all_measurements(&self) -> OnboardResult<Vec<Record>>;

    async fn get_all_units(&self) -> OnboardResult<Vec<Record>>;

    /// Timeseries data for a set of points over `[start_time, end_time]`.
    async fn query_point_timeseries(
        &self,
        point_ids: &[i64],
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> OnboardResult<Vec<TimeseriesResult>>;

    /// Bulk-write latest point values. Returns the number of updates sent.
    async fn update_point_data(&self, updates: &[PointDataUpdate]) -> OnboardResult<usize>;

    /// Report timing and diagnostics for an ingest run.
    async fn send_ingest_stats(&self, stats: &IngestStats) -> OnboardResult<()>;

    /// Ingest stats for all buildings.
    async fn get_ingest_stats(&self) -> OnboardResult<Vec<Record>>;

    /// Active alerts for all buildings.
    async fn get_alerts(&self) -> OnboardResult<Vec<Record>>;

    /// Copy data between points over `[start_time, end_time]`.
    ///
    /// Returns the server's description of the operation.
    async fn copy_point_data(
        &self,
        point_id_map: &PointIdMap,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> OnboardResult<String>;
}
