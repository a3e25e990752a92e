//! Buildings, equipment and reference data.

use onboard_core::{Building, Equipment, Record};

use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::url::{building_equipment_endpoint, paths};

use super::OnboardClient;

impl<B: HttpBackend> OnboardClient<B> {
    pub(crate) async fn buildings(&self) -> ClientResult<Vec<Building>> {
        self.get(paths::BUILDINGS).await
    }

    /// Equipment in a building, with the ids of each piece's points.
    pub(crate) async fn building_equipment(
        &self,
        building_id: i64,
    ) -> ClientResult<Vec<Equipment>> {
        self.get(&building_equipment_endpoint(building_id)).await
    }

    pub(crate) async fn tags(&self) -> ClientResult<Vec<Record>> {
        self.get(paths::TAGS).await
    }

    pub(crate) async fn equipment_types(&self) -> ClientResult<Vec<Record>> {
        self.get(paths::EQUIPMENT_TYPES).await
    }

    pub(crate) async fn point_types(&self) -> ClientResult<Vec<Record>> {
        self.get(paths::POINT_TYPES).await
    }

    pub(crate) async fn measurements(&self) -> ClientResult<Vec<Record>> {
        self.get(paths::MEASUREMENTS).await
    }

    pub(crate) async fn units(&self) -> ClientResult<Vec<Record>> {
        self.get(paths::UNITS).await
    }
}
