//! Repository for the `layouts` table.

use layoutsmith_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::layout::{CreateLayout, Layout, UpdateLayout};

/// Column list for `layouts` queries.
const COLUMNS: &str = "id, content, theme, created_at, updated_at";

/// Provides CRUD operations for layouts. Layouts are never deleted.
pub struct LayoutRepo;

impl LayoutRepo {
    /// Insert a new layout, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLayout) -> Result<Layout, sqlx::Error> {
        let query = format!(
            "INSERT INTO layouts (content, theme) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Layout>(&query)
            .bind(&input.content)
            .bind(input.theme.map(Json))
            .fetch_one(pool)
            .await
    }

    /// Find a layout by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Layout>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM layouts WHERE id = $1");
        sqlx::query_as::<_, Layout>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a layout's content and refresh `updated_at`.
    ///
    /// Uses `COALESCE` so the theme only changes when one is provided.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLayout,
    ) -> Result<Option<Layout>, sqlx::Error> {
        let query = format!(
            "UPDATE layouts SET \
                 content    = $2, \
                 theme      = COALESCE($3, theme), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Layout>(&query)
            .bind(id)
            .bind(&input.content)
            .bind(input.theme.map(Json))
            .fetch_optional(pool)
            .await
    }
}
