//! Layout models and DTOs.

use layoutsmith_core::theme::Theme;
use layoutsmith_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `layouts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Layout {
    pub id: DbId,
    pub content: String,
    pub theme: Option<Json<Theme>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Input for creating a new layout. The theme has already been validated.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLayout {
    pub content: String,
    pub theme: Option<Theme>,
}

/// Input for overwriting a layout's content.
///
/// `theme: None` leaves the stored theme unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLayout {
    pub content: String,
    pub theme: Option<Theme>,
}
