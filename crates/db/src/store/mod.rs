//! The persistence seam used by handlers and the history orchestration.
//!
//! [`LayoutStore`] mirrors the small set of document-store operations the
//! service needs. [`PgLayoutStore`] backs it with the sqlx repositories;
//! [`MemoryLayoutStore`] keeps everything in process for local development
//! and tests.

mod memory;
mod postgres;

use async_trait::async_trait;
use layoutsmith_core::types::DbId;

use crate::models::layout::{CreateLayout, Layout, UpdateLayout};
use crate::models::layout_version::{CreateLayoutVersion, LayoutVersion, LayoutVersionSummary};

pub use memory::MemoryLayoutStore;
pub use postgres::PgLayoutStore;

/// Errors from a [`LayoutStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait LayoutStore: Send + Sync {
    async fn insert_layout(&self, input: &CreateLayout) -> Result<Layout, StoreError>;

    async fn find_layout(&self, id: DbId) -> Result<Option<Layout>, StoreError>;

    /// Returns `None` if the layout does not exist.
    async fn update_layout(
        &self,
        id: DbId,
        input: &UpdateLayout,
    ) -> Result<Option<Layout>, StoreError>;

    async fn insert_version(
        &self,
        input: &CreateLayoutVersion,
    ) -> Result<LayoutVersion, StoreError>;

    /// Find a version only if it belongs to `layout_id`.
    async fn find_version(
        &self,
        layout_id: DbId,
        version_id: DbId,
    ) -> Result<Option<LayoutVersion>, StoreError>;

    /// Version summaries for a layout, newest first. `limit: None` means all.
    async fn list_versions(
        &self,
        layout_id: DbId,
        limit: Option<i64>,
        offset: i64,
    ) -> Result<Vec<LayoutVersionSummary>, StoreError>;

    /// Delete versions by id, returning how many were removed.
    async fn delete_versions(&self, ids: &[DbId]) -> Result<u64, StoreError>;

    /// Confirm the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
