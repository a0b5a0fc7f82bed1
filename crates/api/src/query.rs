//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for version listings (`?limit=`).
///
/// Bounds are enforced by `layoutsmith_core::versioning::resolve_version_limit`;
/// out-of-range values are rejected rather than clamped.
#[derive(Debug, Deserialize)]
pub struct VersionListParams {
    pub limit: Option<i64>,
}
