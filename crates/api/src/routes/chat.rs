use axum::routing::post;
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// Chat routes.
///
/// ```text
/// POST   /chat  -> suggest_edit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat::suggest_edit))
}
