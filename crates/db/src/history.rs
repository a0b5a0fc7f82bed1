//! Snapshot-before-mutate orchestration for layouts.
//!
//! Every operation that changes a layout's content first writes the content
//! being superseded as a new version, then prunes the layout's history to the
//! newest [`MAX_RETAINED_VERSIONS`]. That pre-image is what makes restore and
//! undo possible.
//!
//! No lock is taken around the fetch, snapshot and overwrite sequence.
//! Concurrent updates to the same layout race and the last write wins.

use layoutsmith_core::types::DbId;
use layoutsmith_core::versioning::{
    versions_to_prune, MAX_RETAINED_VERSIONS, REASON_INITIAL_CREATE, REASON_RESTORE_SNAPSHOT,
};

use crate::models::layout::{CreateLayout, Layout, UpdateLayout};
use crate::models::layout_version::{CreateLayoutVersion, LayoutVersion, LayoutVersionSummary};
use crate::store::{LayoutStore, StoreError};

/// Outcome of an operation addressing a version inside a layout.
#[derive(Debug)]
pub enum VersionLookup<T> {
    Found(T),
    LayoutNotFound,
    /// The version does not exist or belongs to a different layout.
    VersionNotFound,
}

// ---------------------------------------------------------------------------
// Snapshot manager
// ---------------------------------------------------------------------------

/// Write a snapshot of `prior_content` for `layout_id`, then prune the
/// layout's history to the newest [`MAX_RETAINED_VERSIONS`].
///
/// An insert failure is returned. A prune failure is logged and swallowed:
/// the snapshot itself already succeeded and the excess rows will be caught
/// by the next prune.
pub async fn snapshot(
    store: &dyn LayoutStore,
    layout_id: DbId,
    prior_content: &str,
    reason: &str,
) -> Result<LayoutVersion, StoreError> {
    let version = store
        .insert_version(&CreateLayoutVersion {
            layout_id,
            content: prior_content.to_string(),
            reason: reason.to_string(),
        })
        .await?;

    match prune_versions(store, layout_id).await {
        Ok(0) => {}
        Ok(pruned) => {
            tracing::debug!(layout_id, pruned, "Pruned old layout versions");
        }
        Err(e) => {
            tracing::warn!(layout_id, error = %e, "Failed to prune layout versions");
        }
    }

    Ok(version)
}

async fn prune_versions(store: &dyn LayoutStore, layout_id: DbId) -> Result<u64, StoreError> {
    let ids: Vec<DbId> = store
        .list_versions(layout_id, None, 0)
        .await?
        .iter()
        .map(|v| v.id)
        .collect();
    let excess = versions_to_prune(&ids, MAX_RETAINED_VERSIONS);
    if excess.is_empty() {
        return Ok(0);
    }
    store.delete_versions(&excess).await
}

// ---------------------------------------------------------------------------
// Layout operations
// ---------------------------------------------------------------------------

/// Create a layout and snapshot its initial content, so the original stays
/// restorable after the first edit.
pub async fn create_layout(
    store: &dyn LayoutStore,
    input: &CreateLayout,
) -> Result<Layout, StoreError> {
    let layout = store.insert_layout(input).await?;
    snapshot(store, layout.id, &layout.content, REASON_INITIAL_CREATE).await?;
    Ok(layout)
}

/// Snapshot the current content under `reason`, then overwrite it.
///
/// Returns `None` if the layout does not exist.
pub async fn update_layout(
    store: &dyn LayoutStore,
    id: DbId,
    input: &UpdateLayout,
    reason: &str,
) -> Result<Option<Layout>, StoreError> {
    let Some(current) = store.find_layout(id).await? else {
        return Ok(None);
    };
    snapshot(store, id, &current.content, reason).await?;
    store.update_layout(id, input).await
}

/// Newest-first version summaries for a layout, or `None` if it is absent.
pub async fn list_versions(
    store: &dyn LayoutStore,
    id: DbId,
    limit: i64,
) -> Result<Option<Vec<LayoutVersionSummary>>, StoreError> {
    if store.find_layout(id).await?.is_none() {
        return Ok(None);
    }
    store.list_versions(id, Some(limit), 0).await.map(Some)
}

/// Fetch one version with its content, scoped to the layout.
pub async fn get_version(
    store: &dyn LayoutStore,
    id: DbId,
    version_id: DbId,
) -> Result<VersionLookup<LayoutVersion>, StoreError> {
    if store.find_layout(id).await?.is_none() {
        return Ok(VersionLookup::LayoutNotFound);
    }
    Ok(match store.find_version(id, version_id).await? {
        Some(version) => VersionLookup::Found(version),
        None => VersionLookup::VersionNotFound,
    })
}

/// Replace a layout's content with a stored version's content.
///
/// The current content is snapshotted first under `restore_snapshot`, so a
/// restore can itself be undone. The theme is left unchanged. The version's
/// content is read before the snapshot, so restoring the oldest retained
/// version still works even if that snapshot prunes it.
pub async fn restore_version(
    store: &dyn LayoutStore,
    id: DbId,
    version_id: DbId,
) -> Result<VersionLookup<Layout>, StoreError> {
    let Some(current) = store.find_layout(id).await? else {
        return Ok(VersionLookup::LayoutNotFound);
    };
    let Some(version) = store.find_version(id, version_id).await? else {
        return Ok(VersionLookup::VersionNotFound);
    };

    snapshot(store, id, &current.content, REASON_RESTORE_SNAPSHOT).await?;

    let restored = store
        .update_layout(
            id,
            &UpdateLayout {
                content: version.content,
                theme: None,
            },
        )
        .await?;

    Ok(match restored {
        Some(layout) => VersionLookup::Found(layout),
        None => VersionLookup::LayoutNotFound,
    })
}
