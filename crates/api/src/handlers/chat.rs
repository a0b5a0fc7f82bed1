//! Handler for LLM-backed edit suggestions.
//!
//! This is the only place model output enters the service. It is treated as
//! untrusted: every response goes through the full validator, and a
//! validation failure is reported to the caller rather than retried.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use layoutsmith_core::actions::EditAction;
use layoutsmith_core::limits::{validate_current_content, validate_prompt};
use layoutsmith_core::prompt::build_edit_prompt;
use layoutsmith_core::suggestion::parse_suggestion;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    #[serde(rename = "currentContent", alias = "current_content", default)]
    pub current_content: String,
}

/// POST /chat
///
/// Ask the model for an edit to `currentContent` following `prompt`, and
/// return the validated `{reason, changes, theme}` suggestion.
pub async fn suggest_edit(
    State(state): State<AppState>,
    Json(input): Json<ChatRequest>,
) -> AppResult<impl IntoResponse> {
    validate_prompt(&input.prompt)?;
    validate_current_content(&input.current_content)?;

    let prompt = build_edit_prompt(&input.prompt, &input.current_content);
    let model = &state.config.llm.model;
    let raw = state.llm.generate(model, &prompt).await?;

    let suggestion = parse_suggestion(&raw).inspect_err(|e| {
        tracing::warn!(model = %model, error = %e, "Rejected model output");
    })?;

    tracing::info!(
        model = %model,
        changes = suggestion.changes.len(),
        actions = ?suggestion.changes.iter().map(EditAction::kind).collect::<Vec<_>>(),
        theme_changed = suggestion.theme.is_some(),
        "Edit suggestion produced",
    );

    Ok(Json(DataResponse { data: suggestion }))
}
