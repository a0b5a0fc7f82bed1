pub mod chat;
pub mod health;
pub mod layouts;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /chat                                              suggest edit (POST)
///
/// /layouts                                           create (POST)
/// /layouts/{id}                                      get, update (GET, PATCH)
/// /layouts/{id}/versions                             list summaries (GET, ?limit=)
/// /layouts/{id}/versions/{version_id}                get with content (GET)
/// /layouts/{id}/versions/{version_id}/restore        restore (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // LLM edit suggestions.
        .merge(chat::router())
        // Layout CRUD and version history.
        .merge(layouts::router())
}
