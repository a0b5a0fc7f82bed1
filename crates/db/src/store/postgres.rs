use async_trait::async_trait;
use layoutsmith_core::types::DbId;

use super::{LayoutStore, StoreError};
use crate::models::layout::{CreateLayout, Layout, UpdateLayout};
use crate::models::layout_version::{CreateLayoutVersion, LayoutVersion, LayoutVersionSummary};
use crate::repositories::{LayoutRepo, LayoutVersionRepo};
use crate::DbPool;

/// [`LayoutStore`] backed by PostgreSQL through the repository layer.
#[derive(Clone)]
pub struct PgLayoutStore {
    pool: DbPool,
}

impl PgLayoutStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LayoutStore for PgLayoutStore {
    async fn insert_layout(&self, input: &CreateLayout) -> Result<Layout, StoreError> {
        Ok(LayoutRepo::create(&self.pool, input).await?)
    }

    async fn find_layout(&self, id: DbId) -> Result<Option<Layout>, StoreError> {
        Ok(LayoutRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update_layout(
        &self,
        id: DbId,
        input: &UpdateLayout,
    ) -> Result<Option<Layout>, StoreError> {
        Ok(LayoutRepo::update(&self.pool, id, input).await?)
    }

    async fn insert_version(
        &self,
        input: &CreateLayoutVersion,
    ) -> Result<LayoutVersion, StoreError> {
        Ok(LayoutVersionRepo::create(&self.pool, input).await?)
    }

    async fn find_version(
        &self,
        layout_id: DbId,
        version_id: DbId,
    ) -> Result<Option<LayoutVersion>, StoreError> {
        Ok(LayoutVersionRepo::find_for_layout(&self.pool, layout_id, version_id).await?)
    }

    async fn list_versions(
        &self,
        layout_id: DbId,
        limit: Option<i64>,
        offset: i64,
    ) -> Result<Vec<LayoutVersionSummary>, StoreError> {
        Ok(LayoutVersionRepo::list_for_layout(&self.pool, layout_id, limit, offset).await?)
    }

    async fn delete_versions(&self, ids: &[DbId]) -> Result<u64, StoreError> {
        Ok(LayoutVersionRepo::delete_by_ids(&self.pool, ids).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
