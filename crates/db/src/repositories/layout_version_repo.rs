//! Repository for the `layout_versions` table.
//!
//! Versions are ordered by `created_at DESC, id DESC`; the id breaks
//! timestamp ties in insertion order.

use layoutsmith_core::types::DbId;
use sqlx::PgPool;

use crate::models::layout_version::{CreateLayoutVersion, LayoutVersion, LayoutVersionSummary};

/// Column list for full `layout_versions` queries.
const COLUMNS: &str = "id, layout_id, content, reason, created_at";

/// Column list for summary queries (no content payload).
const SUMMARY_COLUMNS: &str = "id, created_at, reason";

/// Provides insert, lookup, listing and pruning for layout versions.
pub struct LayoutVersionRepo;

impl LayoutVersionRepo {
    /// Insert a new snapshot timestamped now.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLayoutVersion,
    ) -> Result<LayoutVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO layout_versions (layout_id, content, reason) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LayoutVersion>(&query)
            .bind(input.layout_id)
            .bind(&input.content)
            .bind(&input.reason)
            .fetch_one(pool)
            .await
    }

    /// Find a version by ID, scoped to the layout it must belong to.
    pub async fn find_for_layout(
        pool: &PgPool,
        layout_id: DbId,
        version_id: DbId,
    ) -> Result<Option<LayoutVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM layout_versions \
             WHERE id = $1 AND layout_id = $2"
        );
        sqlx::query_as::<_, LayoutVersion>(&query)
            .bind(version_id)
            .bind(layout_id)
            .fetch_optional(pool)
            .await
    }

    /// List version summaries for a layout, newest first.
    ///
    /// A `limit` of `None` binds SQL `NULL`, which PostgreSQL treats as
    /// `LIMIT ALL`.
    pub async fn list_for_layout(
        pool: &PgPool,
        layout_id: DbId,
        limit: Option<i64>,
        offset: i64,
    ) -> Result<Vec<LayoutVersionSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM layout_versions \
             WHERE layout_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, LayoutVersionSummary>(&query)
            .bind(layout_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete a set of versions by ID. Returns the number of rows removed.
    pub async fn delete_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM layout_versions WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Count versions for a given layout.
    pub async fn count_for_layout(pool: &PgPool, layout_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM layout_versions WHERE layout_id = $1")
                .bind(layout_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
