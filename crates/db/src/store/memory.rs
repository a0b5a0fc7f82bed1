use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use layoutsmith_core::types::DbId;
use sqlx::types::Json;
use tokio::sync::RwLock;

use super::{LayoutStore, StoreError};
use crate::models::layout::{CreateLayout, Layout, UpdateLayout};
use crate::models::layout_version::{CreateLayoutVersion, LayoutVersion, LayoutVersionSummary};

/// In-process [`LayoutStore`]. Ids are assigned sequentially from 1, like
/// BIGSERIAL columns. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryLayoutStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    layouts: BTreeMap<DbId, Layout>,
    versions: BTreeMap<DbId, LayoutVersion>,
    last_layout_id: DbId,
    last_version_id: DbId,
}

impl MemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LayoutStore for MemoryLayoutStore {
    async fn insert_layout(&self, input: &CreateLayout) -> Result<Layout, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_layout_id += 1;
        let now = Utc::now();
        let layout = Layout {
            id: inner.last_layout_id,
            content: input.content.clone(),
            theme: input.theme.map(Json),
            created_at: now,
            updated_at: now,
        };
        inner.layouts.insert(layout.id, layout.clone());
        Ok(layout)
    }

    async fn find_layout(&self, id: DbId) -> Result<Option<Layout>, StoreError> {
        Ok(self.inner.read().await.layouts.get(&id).cloned())
    }

    async fn update_layout(
        &self,
        id: DbId,
        input: &UpdateLayout,
    ) -> Result<Option<Layout>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(layout) = inner.layouts.get_mut(&id) else {
            return Ok(None);
        };
        layout.content = input.content.clone();
        if let Some(theme) = input.theme {
            layout.theme = Some(Json(theme));
        }
        layout.updated_at = Utc::now();
        Ok(Some(layout.clone()))
    }

    async fn insert_version(
        &self,
        input: &CreateLayoutVersion,
    ) -> Result<LayoutVersion, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_version_id += 1;
        let version = LayoutVersion {
            id: inner.last_version_id,
            layout_id: input.layout_id,
            content: input.content.clone(),
            reason: input.reason.clone(),
            created_at: Utc::now(),
        };
        inner.versions.insert(version.id, version.clone());
        Ok(version)
    }

    async fn find_version(
        &self,
        layout_id: DbId,
        version_id: DbId,
    ) -> Result<Option<LayoutVersion>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .versions
            .get(&version_id)
            .filter(|v| v.layout_id == layout_id)
            .cloned())
    }

    async fn list_versions(
        &self,
        layout_id: DbId,
        limit: Option<i64>,
        offset: i64,
    ) -> Result<Vec<LayoutVersionSummary>, StoreError> {
        let inner = self.inner.read().await;
        let mut versions: Vec<&LayoutVersion> = inner
            .versions
            .values()
            .filter(|v| v.layout_id == layout_id)
            .collect();
        versions.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = limit
            .and_then(|l| usize::try_from(l).ok())
            .unwrap_or(usize::MAX);
        Ok(versions
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(LayoutVersionSummary::from)
            .collect())
    }

    async fn delete_versions(&self, ids: &[DbId]) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let removed = ids
            .iter()
            .filter(|id| inner.versions.remove(*id).is_some())
            .count();
        Ok(removed as u64)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
