//! Timeseries reads, point data writes and ingest diagnostics.

use chrono::{DateTime, Utc};
use onboard_core::{
    IngestStats, PointDataUpdate, PointIdMap, Record, TimeseriesResult, UPDATE_BATCH_SIZE,
    divide_chunks,
};
use tracing::{debug, info};

use crate::error::{ClientError, ClientResult};
use crate::http::HttpBackend;
use crate::models::{PointDataCopy, TimeseriesQuery};
use crate::url::paths;

use super::OnboardClient;

/// Reject windows that end before they start; the server answers those
/// with an empty result, which hides the mistake.
fn check_window(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> ClientResult<()> {
    if end_time < start_time {
        return Err(ClientError::InvalidRequest {
            message: format!("time window ends ({end_time}) before it starts ({start_time})"),
        });
    }
    Ok(())
}

impl<B: HttpBackend> OnboardClient<B> {
    /// Timeseries for a set of points over a time window.
    pub(crate) async fn query_timeseries(
        &self,
        point_ids: &[i64],
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> ClientResult<Vec<TimeseriesResult>> {
        check_window(start_time, end_time)?;
        if point_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = TimeseriesQuery {
            point_ids,
            start_time,
            end_time,
        };
        self.post(paths::QUERY, &query).await
    }

    /// Push latest point values in batches. Returns the number sent.
    pub(crate) async fn update_point_data(
        &self,
        updates: &[PointDataUpdate],
    ) -> ClientResult<usize> {
        let mut sent = 0;

        for batch in divide_chunks(updates, UPDATE_BATCH_SIZE) {
            self.post_unit(paths::POINTS_UPDATE, batch).await?;
            sent += batch.len();
            debug!(batch = batch.len(), sent, "Sent point data batch");
        }

        Ok(sent)
    }

    pub(crate) async fn send_ingest_stats(&self, stats: &IngestStats) -> ClientResult<()> {
        self.post_unit(paths::INGEST_STATS, stats).await
    }

    pub(crate) async fn ingest_stats(&self) -> ClientResult<Vec<Record>> {
        self.get(paths::INGEST_STATS).await
    }

    pub(crate) async fn alerts(&self) -> ClientResult<Vec<Record>> {
        self.get(paths::ALERTS).await
    }

    /// Copy data from source to destination points over a time window.
    pub(crate) async fn copy_point_data(
        &self,
        point_id_map: &PointIdMap,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> ClientResult<String> {
        check_window(start_time, end_time)?;

        let command = PointDataCopy {
            point_id_map,
            start_time,
            end_time,
        };
        let description: String = self.post(paths::POINT_DATA_COPY, &command).await?;
        info!(points = point_id_map.len(), %description, "Requested point data copy");
        Ok(description)
    }
}
