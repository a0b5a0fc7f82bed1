//! Handlers for layout CRUD, version listing and restore.
//!
//! Layouts are addressed only by id; there is no ownership check. Every
//! mutation goes through `layoutsmith_db::history`, which snapshots the
//! content being replaced before writing.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use layoutsmith_core::error::CoreError;
use layoutsmith_core::limits::{validate_content, validate_reason};
use layoutsmith_core::theme::Theme;
use layoutsmith_core::types::{parse_db_id, DbId};
use layoutsmith_core::versioning::{resolve_version_limit, update_reason};
use layoutsmith_db::history::{self, VersionLookup};
use layoutsmith_db::models::layout::{CreateLayout, UpdateLayout};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::VersionListParams;
use crate::response::DataResponse;
use crate::state::AppState;

const LAYOUT: &str = "Layout";
const LAYOUT_VERSION: &str = "LayoutVersion";

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Request body for `POST /layouts`.
#[derive(Debug, Deserialize)]
pub struct CreateLayoutRequest {
    pub content: String,
    /// Validated with [`Theme::from_value`] so errors name the bad field.
    pub theme: Option<Value>,
}

/// Request body for `PATCH /layouts/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateLayoutRequest {
    pub content: String,
    pub reason: Option<String>,
    /// Absent or `null` keeps the stored theme.
    pub theme: Option<Value>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_theme(raw: Option<&Value>) -> Result<Option<Theme>, CoreError> {
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Theme::from_value(value)
            .map(Some)
            .map_err(|e| CoreError::Validation(format!("Invalid theme: {e}"))),
    }
}

fn layout_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: LAYOUT, id })
}

fn version_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: LAYOUT_VERSION,
        id,
    })
}

// ---------------------------------------------------------------------------
// Layout endpoints
// ---------------------------------------------------------------------------

/// POST /layouts
///
/// Create a layout. Its initial content is snapshotted as `initial_create`.
pub async fn create_layout(
    State(state): State<AppState>,
    Json(input): Json<CreateLayoutRequest>,
) -> AppResult<impl IntoResponse> {
    validate_content(&input.content)?;
    let theme = parse_theme(input.theme.as_ref())?;

    let layout = history::create_layout(
        state.store.as_ref(),
        &CreateLayout {
            content: input.content,
            theme,
        },
    )
    .await?;

    tracing::info!(layout_id = layout.id, "Layout created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: layout })))
}

/// GET /layouts/{id}
pub async fn get_layout(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_db_id(LAYOUT, &raw_id)?;
    let layout = state
        .store
        .find_layout(id)
        .await?
        .ok_or_else(|| layout_not_found(id))?;

    Ok(Json(DataResponse { data: layout }))
}

/// PATCH /layouts/{id}
///
/// Snapshot the current content under the supplied reason (default
/// `manual_update`), then overwrite content and, if given, theme.
pub async fn update_layout(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateLayoutRequest>,
) -> AppResult<impl IntoResponse> {
    let id = parse_db_id(LAYOUT, &raw_id)?;
    validate_content(&input.content)?;
    if let Some(reason) = &input.reason {
        validate_reason(reason)?;
    }
    let theme = parse_theme(input.theme.as_ref())?;
    let reason = update_reason(input.reason.as_deref());

    let layout = history::update_layout(
        state.store.as_ref(),
        id,
        &UpdateLayout {
            content: input.content,
            theme,
        },
        reason,
    )
    .await?
    .ok_or_else(|| layout_not_found(id))?;

    tracing::info!(layout_id = id, reason, "Layout updated");

    Ok(Json(DataResponse { data: layout }))
}

// ---------------------------------------------------------------------------
// Version endpoints
// ---------------------------------------------------------------------------

/// GET /layouts/{id}/versions?limit=
///
/// Newest-first version summaries (no content). `limit` defaults to 4 and
/// must be within 1..=10.
pub async fn list_versions(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    params: Result<Query<VersionListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_db_id(LAYOUT, &raw_id)?;
    let Query(params) =
        params.map_err(|e| CoreError::Validation(format!("Invalid query: {}", e.body_text())))?;
    let limit = resolve_version_limit(params.limit)?;

    let versions = history::list_versions(state.store.as_ref(), id, limit)
        .await?
        .ok_or_else(|| layout_not_found(id))?;

    Ok(Json(DataResponse { data: versions }))
}

/// GET /layouts/{id}/versions/{version_id}
///
/// A single version including its stored content.
pub async fn get_version(
    State(state): State<AppState>,
    Path((raw_id, raw_version_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let id = parse_db_id(LAYOUT, &raw_id)?;
    let version_id = parse_db_id(LAYOUT_VERSION, &raw_version_id)?;

    match history::get_version(state.store.as_ref(), id, version_id).await? {
        VersionLookup::Found(version) => Ok(Json(DataResponse { data: version })),
        VersionLookup::LayoutNotFound => Err(layout_not_found(id)),
        VersionLookup::VersionNotFound => Err(version_not_found(version_id)),
    }
}

/// POST /layouts/{id}/versions/{version_id}/restore
///
/// Replace the layout's content with the version's. The version must belong
/// to this layout; a version of another layout is reported as not found.
pub async fn restore_version(
    State(state): State<AppState>,
    Path((raw_id, raw_version_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let id = parse_db_id(LAYOUT, &raw_id)?;
    let version_id = parse_db_id(LAYOUT_VERSION, &raw_version_id)?;

    match history::restore_version(state.store.as_ref(), id, version_id).await? {
        VersionLookup::Found(layout) => {
            tracing::info!(layout_id = id, version_id, "Layout restored from version");
            Ok(Json(DataResponse { data: layout }))
        }
        VersionLookup::LayoutNotFound => Err(layout_not_found(id)),
        VersionLookup::VersionNotFound => Err(version_not_found(version_id)),
    }
}
