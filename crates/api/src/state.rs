use std::sync::Arc;

use layoutsmith_db::store::LayoutStore;
use layoutsmith_llm::LlmClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once at startup. Cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Layout and version persistence.
    pub store: Arc<dyn LayoutStore>,
    /// Text-generation client for edit suggestions.
    pub llm: Arc<dyn LlmClient>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
