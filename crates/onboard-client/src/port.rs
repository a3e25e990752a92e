//! Port trait implementation for `OnboardClient`.
//!
//! This module implements the core-owned `OnboardApi` trait for
//! `OnboardClient`, mapping internal errors to `OnboardError`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use onboard_core::{
    Building, Equipment, IngestStats, OnboardApi, OnboardError, OnboardResult, Point,
    PointDataUpdate, PointIdMap, PointSelection, PointSelector, Record, TimeseriesResult,
};

use crate::client::OnboardClient;
use crate::error::ClientError;
use crate::http::{HttpBackend, is_temporary_status};

// ============================================================================
// Error Mapping
// ============================================================================

/// Prefer the server's explanation; fall back to what was requested.
fn describe(body: String, url: String) -> String {
    if body.trim().is_empty() { url } else { body }
}

/// Convert internal `ClientError` to core `OnboardError`.
pub(crate) fn map_error(err: ClientError) -> OnboardError {
    match err {
        ClientError::ApiRequestFailed { status, url, body } => {
            if status == 401 || status == 403 {
                OnboardError::Unauthorized {
                    message: describe(body, url),
                }
            } else if is_temporary_status(status) {
                OnboardError::Temporary {
                    status,
                    message: describe(body, url),
                }
            } else {
                OnboardError::Api {
                    status,
                    message: describe(body, url),
                }
            }
        }
        ClientError::LoginFailed { status, message } => {
            if is_temporary_status(status) {
                OnboardError::Temporary { status, message }
            } else {
                OnboardError::Unauthorized { message }
            }
        }
        ClientError::InvalidRequest { message } => OnboardError::InvalidRequest { message },
        ClientError::InvalidResponse { message } => OnboardError::InvalidResponse { message },
        ClientError::Network(e) => {
            if e.is_builder() {
                OnboardError::Configuration {
                    message: e.to_string(),
                }
            } else if e.is_decode() {
                OnboardError::InvalidResponse {
                    message: e.to_string(),
                }
            } else {
                OnboardError::Network {
                    message: e.to_string(),
                }
            }
        }
        ClientError::InvalidUrl(e) => OnboardError::Configuration {
            message: e.to_string(),
        },
        ClientError::JsonParse(e) => OnboardError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> OnboardApi for OnboardClient<B> {
    async fn whoami(&self) -> OnboardResult<Record> {
        self.whoami().await.map_err(map_error)
    }

    async fn get_account_actions(&self) -> OnboardResult<Vec<Record>> {
        self.account_actions().await.map_err(map_error)
    }

    async fn get_users(&self) -> OnboardResult<Vec<Record>> {
        self.users().await.map_err(map_error)
    }

    async fn get_organizations(&self) -> OnboardResult<Vec<Record>> {
        self.organizations().await.map_err(map_error)
    }

    async fn get_all_buildings(&self) -> OnboardResult<Vec<Building>> {
        self.buildings().await.map_err(map_error)
    }

    async fn get_tags(&self) -> OnboardResult<Vec<Record>> {
        self.tags().await.map_err(map_error)
    }

    async fn get_equipment_types(&self) -> OnboardResult<Vec<Record>> {
        self.equipment_types().await.map_err(map_error)
    }

    async fn get_building_equipment(&self, building_id: i64) -> OnboardResult<Vec<Equipment>> {
        self.building_equipment(building_id).await.map_err(map_error)
    }

    async fn select_points(&self, selector: &PointSelector) -> OnboardResult<PointSelection> {
        Self::select_points(self, selector).await.map_err(map_error)
    }

    async fn get_all_points(&self) -> OnboardResult<Vec<i64>> {
        self.all_points().await.map_err(map_error)
    }

    async fn get_points_by_ids(&self, point_ids: &[i64]) -> OnboardResult<Vec<Point>> {
        self.points_by_ids(point_ids).await.map_err(map_error)
    }

    async fn get_points_by_datasource(
        &self,
        datasource_hashes: &[String],
    ) -> OnboardResult<Vec<Point>> {
        self.points_by_datasource(datasource_hashes)
            .await
            .map_err(map_error)
    }

    async fn get_all_point_types(&self) -> OnboardResult<Vec<Record>> {
        self.point_types().await.map_err(map_error)
    }

    async fn get_all_measurements(&self) -> OnboardResult<Vec<Record>> {
        self.measurements().await.map_err(map_error)
    }

    async fn get_all_units(&self) -> OnboardResult<Vec<Record>> {
        self.units().await.map_err(map_error)
    }

    async fn query_point_timeseries(
        &self,
        point_ids: &[i64],
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> OnboardResult<Vec<TimeseriesResult>> {
        self.query_timeseries(point_ids, start_time, end_time)
            .await
            .map_err(map_error)
    }

    async fn update_point_data(&self, updates: &[PointDataUpdate]) -> OnboardResult<usize> {
        Self::update_point_data(self, updates)
            .await
            .map_err(map_error)
    }

    async fn send_ingest_stats(&self, stats: &IngestStats) -> OnboardResult<()> {
        Self::send_ingest_stats(self, stats).await.map_err(map_error)
    }

    async fn get_ingest_stats(&self) -> OnboardResult<Vec<Record>> {
        self.ingest_stats().await.map_err(map_error)
    }

    async fn get_alerts(&self) -> OnboardResult<Vec<Record>> {
        self.alerts().await.map_err(map_error)
    }

    async fn copy_point_data(
        &self,
        point_id_map: &PointIdMap,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> OnboardResult<String> {
        Self::copy_point_data(self, point_id_map, start_time, end_time)
            .await
            .map_err(map_error)
    }
}
