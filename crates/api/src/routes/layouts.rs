//! Route definitions for layouts and their version history.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::layouts;
use crate::state::AppState;

/// Layout routes.
///
/// Paths are declared in full rather than nested so `/layouts` matches
/// without a trailing slash.
///
/// ```text
/// POST   /layouts                                         -> create_layout
/// GET    /layouts/{id}                                    -> get_layout
/// PATCH  /layouts/{id}                                    -> update_layout
/// GET    /layouts/{id}/versions                           -> list_versions
/// GET    /layouts/{id}/versions/{version_id}              -> get_version
/// POST   /layouts/{id}/versions/{version_id}/restore      -> restore_version
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/layouts", post(layouts::create_layout))
        .route(
            "/layouts/{id}",
            get(layouts::get_layout).patch(layouts::update_layout),
        )
        .route("/layouts/{id}/versions", get(layouts::list_versions))
        .route(
            "/layouts/{id}/versions/{version_id}",
            get(layouts::get_version),
        )
        .route(
            "/layouts/{id}/versions/{version_id}/restore",
            post(layouts::restore_version),
        )
}
