use std::time::Duration;

/// LLM client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Gemini API key. Absence is reported on first use, not at startup.
    pub api_key: Option<String>,
    /// Model identifier passed on every request.
    pub model: String,
    /// Base URL of the Gemini REST API.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl LlmConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                                        |
    /// |--------------------|------------------------------------------------|
    /// | `GEMINI_API_KEY`   | (none)                                         |
    /// | `LLM_MODEL`        | `gemini-3-pro-preview`                         |
    /// | `LLM_BASE_URL`     | `https://generativelanguage.googleapis.com`    |
    /// | `LLM_TIMEOUT_SECS` | `120`                                          |
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let model =
            std::env::var("LLM_MODEL").unwrap_or_else(|_| "gemini-3-pro-preview".into());

        let base_url = std::env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = std::env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("LLM_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
