//! Layout version (snapshot) models and DTOs.

use layoutsmith_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `layout_versions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LayoutVersion {
    pub id: DbId,
    pub layout_id: DbId,
    /// Content of the layout before the mutation that produced this row.
    pub content: String,
    pub reason: String,
    pub created_at: Timestamp,
}

/// A version without its content payload, for listings.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct LayoutVersionSummary {
    pub id: DbId,
    pub created_at: Timestamp,
    pub reason: String,
}

impl From<&LayoutVersion> for LayoutVersionSummary {
    fn from(version: &LayoutVersion) -> Self {
        Self {
            id: version.id,
            created_at: version.created_at,
            reason: version.reason.clone(),
        }
    }
}

/// Input for writing a new snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLayoutVersion {
    pub layout_id: DbId,
    pub content: String,
    pub reason: String,
}
