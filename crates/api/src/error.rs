use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use layoutsmith_core::error::CoreError;
use layoutsmith_core::suggestion::SuggestionError;
use layoutsmith_db::store::StoreError;
use layoutsmith_llm::LlmError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps the error types of each crate and implements [`IntoResponse`] to
/// produce consistent `{ "error", "code" }` JSON bodies. Every failure kind
/// keeps its own code so clients can tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `layoutsmith_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The model's output failed validation.
    #[error(transparent)]
    Suggestion(#[from] SuggestionError),

    /// The model call itself failed or is not configured.
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// A persistence error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::InvalidId { .. } => {
                    (StatusCode::BAD_REQUEST, "INVALID_ID", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::PayloadTooLarge { .. } => (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "PAYLOAD_TOO_LARGE",
                    core.to_string(),
                ),
            },

            // --- Model output validation ---
            AppError::Suggestion(err) => {
                let code = match err {
                    SuggestionError::MalformedOutput(_) => "MALFORMED_OUTPUT",
                    SuggestionError::SchemaViolation { .. } => "SCHEMA_VIOLATION",
                    SuggestionError::InvalidTheme { .. } => "INVALID_THEME",
                    SuggestionError::PayloadTooLarge { .. } => "OUTPUT_TOO_LARGE",
                };
                (StatusCode::BAD_GATEWAY, code, err.to_string())
            }

            // --- Model call ---
            AppError::Llm(err) => match err {
                LlmError::ConfigMissing(_) => {
                    tracing::error!(error = %err, "LLM is not configured");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "CONFIG_MISSING",
                        err.to_string(),
                    )
                }
                _ => {
                    tracing::error!(error = %err, "LLM request failed");
                    (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_FAILURE",
                        "The language model request failed".to_string(),
                    )
                }
            },

            // --- Persistence ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
