//! Point lookup and selection.

use onboard_core::{
    DATASOURCE_CHUNK_SIZE, POINT_ID_CHUNK_SIZE, Point, PointSelection, PointSelector,
    divide_chunks,
};
use tracing::debug;

use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::url::{paths, points_by_datasource_endpoint, points_by_ids_endpoint};

use super::OnboardClient;

impl<B: HttpBackend> OnboardClient<B> {
    /// Resolve a selector to the ids of matching entities.
    pub(crate) async fn select_points(
        &self,
        selector: &PointSelector,
    ) -> ClientResult<PointSelection> {
        self.post(paths::POINTS_SELECT, selector).await
    }

    /// Every point id visible to the account.
    ///
    /// Walks each building's equipment; ids come out grouped by building,
    /// then by equipment, in server order.
    pub(crate) async fn all_points(&self) -> ClientResult<Vec<i64>> {
        let buildings = self.buildings().await?;
        let mut point_ids = Vec::new();

        for building in &buildings {
            let equipment = self.building_equipment(building.id).await?;
            for e in equipment {
                point_ids.extend(e.points);
            }
        }

        debug!(
            buildings = buildings.len(),
            points = point_ids.len(),
            "Collected all point ids"
        );
        Ok(point_ids)
    }

    /// Point records by id, fetched in chunks.
    pub(crate) async fn points_by_ids(&self, point_ids: &[i64]) -> ClientResult<Vec<Point>> {
        let mut points = Vec::with_capacity(point_ids.len());

        for chunk in divide_chunks(point_ids, POINT_ID_CHUNK_SIZE) {
            let batch: Vec<Point> = self.get(&points_by_ids_endpoint(chunk)).await?;
            points.extend(batch);
        }

        Ok(points)
    }

    /// Point records by datasource hash, fetched in chunks.
    pub(crate) async fn points_by_datasource(
        &self,
        datasource_hashes: &[String],
    ) -> ClientResult<Vec<Point>> {
        let mut points = Vec::with_capacity(datasource_hashes.len());

        for chunk in divide_chunks(datasource_hashes, DATASOURCE_CHUNK_SIZE) {
            let batch: Vec<Point> = self.get(&points_by_datasource_endpoint(chunk)).await?;
            points.extend(batch);
        }

        Ok(points)
    }
}
