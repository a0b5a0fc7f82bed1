//! Size limits for client input and model output.
//!
//! Lengths are counted in characters, not bytes. Oversize input is always
//! rejected, never truncated.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of layout content (and of model-proposed changes).
pub const MAX_CONTENT_CHARS: usize = 1_000_000;

/// Maximum length of a chat instruction.
pub const MAX_PROMPT_CHARS: usize = 50_000;

/// Maximum length of a version reason.
pub const MAX_REASON_CHARS: usize = 2_000;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Count the characters in `text`, stopping early once `max` is exceeded.
///
/// Returns `None` when the text fits, or `Some(count)` with the full count
/// when it does not.
pub fn chars_over_limit(text: &str, max: usize) -> Option<usize> {
    // A string can never hold more chars than bytes.
    if text.len() <= max {
        return None;
    }
    let count = text.chars().count();
    (count > max).then_some(count)
}

fn check_length(field: &'static str, text: &str, max: usize) -> Result<(), CoreError> {
    match chars_over_limit(text, max) {
        Some(actual) => Err(CoreError::PayloadTooLarge { field, max, actual }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate layout content: length check only (content may be empty).
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    check_length("content", content, MAX_CONTENT_CHARS)
}

/// Validate a chat instruction: must be non-blank and within length limit.
pub fn validate_prompt(prompt: &str) -> Result<(), CoreError> {
    if prompt.trim().is_empty() {
        return Err(CoreError::Validation(
            "prompt must not be empty".to_string(),
        ));
    }
    check_length("prompt", prompt, MAX_PROMPT_CHARS)
}

/// Validate the content sent along with a chat instruction.
pub fn validate_current_content(content: &str) -> Result<(), CoreError> {
    check_length("currentContent", content, MAX_CONTENT_CHARS)
}

/// Validate a caller-supplied version reason.
pub fn validate_reason(reason: &str) -> Result<(), CoreError> {
    check_length("reason", reason, MAX_REASON_CHARS)
}
