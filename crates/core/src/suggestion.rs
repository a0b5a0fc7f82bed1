//! Validation of raw model output into an [`EditSuggestion`].
//!
//! Model output is untrusted. It is expected to hold one JSON object, often
//! wrapped in prose or code fences. [`parse_suggestion`] locates the object,
//! checks every field against the action and theme schema, and returns either
//! a typed suggestion or a [`SuggestionError`] saying exactly what was wrong.
//! It has no side effects.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::actions::{ComponentId, EditAction, ACTION_TYPES};
use crate::limits::{chars_over_limit, MAX_CONTENT_CHARS};
use crate::theme::{Theme, ThemeError};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A validated edit proposal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditSuggestion {
    pub reason: String,
    pub changes: Vec<EditAction>,
    pub theme: Option<Theme>,
}

/// Why model output was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuggestionError {
    /// No JSON object could be located or parsed.
    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    /// The object is missing a required field or a field has the wrong shape.
    #[error("Schema violation at '{field}': {detail}")]
    SchemaViolation { field: String, detail: String },

    /// A theme was present but invalid.
    #[error("Invalid theme at '{field}': {detail}")]
    InvalidTheme { field: String, detail: String },

    #[error("Model output exceeds maximum length of {max} characters (got {actual})")]
    PayloadTooLarge { max: usize, actual: usize },
}

impl SuggestionError {
    fn schema(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::SchemaViolation {
            field: field.into(),
            detail: detail.into(),
        }
    }

    fn theme(prefix: &str, err: &ThemeError) -> Self {
        let field = match err.field() {
            sub if sub.is_empty() => prefix.to_string(),
            sub => format!("{prefix}.{sub}"),
        };
        Self::InvalidTheme {
            field,
            detail: err.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Return the span from the first `{` to the last `}` (inclusive).
///
/// This is deliberately the naive heuristic: it tolerates prose and code
/// fences around the object, but brace characters outside the object will
/// widen the span and usually make it fail to parse.
pub fn extract_json_span(raw: &str) -> Result<&str, SuggestionError> {
    let trimmed = raw.trim();
    let start = trimmed
        .find('{')
        .ok_or_else(|| SuggestionError::MalformedOutput("no '{' found".to_string()))?;
    let end = trimmed
        .rfind('}')
        .ok_or_else(|| SuggestionError::MalformedOutput("no '}' found".to_string()))?;
    if start >= end {
        return Err(SuggestionError::MalformedOutput(
            "no '{' precedes the last '}'".to_string(),
        ));
    }
    Ok(&trimmed[start..=end])
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate raw model output into an [`EditSuggestion`].
///
/// The raw text is bounded before anything is parsed, and the `changes`
/// payload is bounded again as it re-serializes, since number formatting can
/// make it longer than its source.
pub fn parse_suggestion(raw: &str) -> Result<EditSuggestion, SuggestionError> {
    if let Some(actual) = chars_over_limit(raw, MAX_CONTENT_CHARS) {
        return Err(SuggestionError::PayloadTooLarge {
            max: MAX_CONTENT_CHARS,
            actual,
        });
    }

    let span = extract_json_span(raw)?;
    let value: Value = serde_json::from_str(span)
        .map_err(|e| SuggestionError::MalformedOutput(format!("invalid JSON: {e}")))?;
    let obj = value.as_object().ok_or_else(|| {
        SuggestionError::MalformedOutput("top-level JSON value is not an object".to_string())
    })?;

    let reason = match obj.get("reason") {
        None => return Err(SuggestionError::schema("reason", "missing required field")),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(SuggestionError::schema(
                "reason",
                format!("expected a string, got {}", json_kind(other)),
            ))
        }
    };

    let raw_changes = match obj.get("changes") {
        None => return Err(SuggestionError::schema("changes", "missing required field")),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(SuggestionError::schema(
                "changes",
                format!("expected an array of actions, got {}", json_kind(other)),
            ))
        }
    };

    let changes = raw_changes
        .iter()
        .enumerate()
        .map(|(index, item)| parse_action(index, item))
        .collect::<Result<Vec<_>, _>>()?;
    check_changes_size(&changes)?;

    let theme = match obj.get("theme") {
        None | Some(Value::Null) => None,
        Some(raw_theme) => {
            Some(Theme::from_value(raw_theme).map_err(|e| SuggestionError::theme("theme", &e))?)
        }
    };

    Ok(EditSuggestion {
        reason,
        changes,
        theme,
    })
}

fn check_changes_size(changes: &[EditAction]) -> Result<(), SuggestionError> {
    let serialized = serde_json::to_string(changes)
        .map_err(|e| SuggestionError::MalformedOutput(format!("unserializable changes: {e}")))?;
    match chars_over_limit(&serialized, MAX_CONTENT_CHARS) {
        Some(actual) => Err(SuggestionError::PayloadTooLarge {
            max: MAX_CONTENT_CHARS,
            actual,
        }),
        None => Ok(()),
    }
}

/// Validate one element of the `changes` array.
fn parse_action(index: usize, item: &Value) -> Result<EditAction, SuggestionError> {
    let at = |field: &str| format!("changes[{index}].{field}");

    let obj = item.as_object().ok_or_else(|| {
        SuggestionError::schema(
            format!("changes[{index}]"),
            format!("expected an object, got {}", json_kind(item)),
        )
    })?;

    let kind = match obj.get("type") {
        None => return Err(SuggestionError::schema(at("type"), "missing required field")),
        Some(Value::String(kind)) => kind.as_str(),
        Some(other) => {
            return Err(SuggestionError::schema(
                at("type"),
                format!("expected a string, got {}", json_kind(other)),
            ))
        }
    };

    match kind {
        "move" => Ok(EditAction::Move {
            component: component_field(obj, &at)?,
            position: position_field(obj, &at)?,
        }),
        "remove" => Ok(EditAction::Remove {
            component: component_field(obj, &at)?,
        }),
        "toggle_visibility" => Ok(EditAction::ToggleVisibility {
            component: component_field(obj, &at)?,
        }),
        "update_props" => Ok(EditAction::UpdateProps {
            component: component_field(obj, &at)?,
            props: props_field(obj, &at)?,
        }),
        "update_theme" => {
            let raw_theme = obj
                .get("theme")
                .ok_or_else(|| SuggestionError::schema(at("theme"), "missing required field"))?;
            let theme = Theme::from_value(raw_theme)
                .map_err(|e| SuggestionError::theme(&at("theme"), &e))?;
            Ok(EditAction::UpdateTheme { theme })
        }
        other => Err(SuggestionError::schema(
            at("type"),
            format!(
                "unknown action type '{other}' (expected one of: {})",
                ACTION_TYPES.join(", ")
            ),
        )),
    }
}

fn component_field(
    obj: &Map<String, Value>,
    at: &dyn Fn(&str) -> String,
) -> Result<ComponentId, SuggestionError> {
    let raw = obj
        .get("component")
        .ok_or_else(|| SuggestionError::schema(at("component"), "missing required field"))?;
    raw.as_str().and_then(ComponentId::parse).ok_or_else(|| {
        let expected: Vec<_> = ComponentId::ALL.iter().map(|c| c.as_str()).collect();
        SuggestionError::schema(
            at("component"),
            format!(
                "unknown component {raw} (expected one of: {})",
                expected.join(", ")
            ),
        )
    })
}

fn position_field(
    obj: &Map<String, Value>,
    at: &dyn Fn(&str) -> String,
) -> Result<u32, SuggestionError> {
    let raw = obj
        .get("position")
        .ok_or_else(|| SuggestionError::schema(at("position"), "missing required field"))?;
    raw.as_u64()
        .and_then(|p| u32::try_from(p).ok())
        .ok_or_else(|| {
            SuggestionError::schema(
                at("position"),
                format!("expected a non-negative integer, got {raw}"),
            )
        })
}

fn props_field(
    obj: &Map<String, Value>,
    at: &dyn Fn(&str) -> String,
) -> Result<Map<String, Value>, SuggestionError> {
    match obj.get("props") {
        None => Err(SuggestionError::schema(at("props"), "missing required field")),
        Some(Value::Object(props)) => Ok(props.clone()),
        Some(other) => Err(SuggestionError::schema(
            at("props"),
            format!("expected an object, got {}", json_kind(other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::theme::{PrimaryColor, Spacing, ThemeMode};

    fn wrap(value: Value) -> String {
        format!("Sure! Here is the edit:\n```json\n{value}\n```\nLet me know.")
    }

    // -- extract_json_span --

    #[test]
    fn span_strips_surrounding_prose() {
        assert_eq!(extract_json_span("  note: {\"a\":1} done ").unwrap(), "{\"a\":1}");
    }

    #[test]
    fn text_without_braces_is_malformed() {
        assert_matches!(
            parse_suggestion("I could not think of a change."),
            Err(SuggestionError::MalformedOutput(_))
        );
    }

    #[test]
    fn reversed_braces_are_malformed() {
        assert_matches!(
            extract_json_span("} oops {"),
            Err(SuggestionError::MalformedOutput(_))
        );
    }

    #[test]
    fn unparseable_span_is_malformed() {
        let err = parse_suggestion("{ reason: unquoted }").unwrap_err();
        assert_matches!(err, SuggestionError::MalformedOutput(ref msg) if msg.contains("invalid JSON"));
    }

    #[test]
    fn braces_in_trailing_prose_widen_the_span() {
        // Known limitation of the first/last brace heuristic.
        let raw = format!("{} (see {{docs}})", json!({ "reason": "r", "changes": [] }));
        assert_matches!(parse_suggestion(&raw), Err(SuggestionError::MalformedOutput(_)));
    }

    // -- required fields --

    #[test]
    fn missing_reason_is_schema_violation() {
        let err = parse_suggestion(&wrap(json!({ "changes": [] }))).unwrap_err();
        assert_matches!(err, SuggestionError::SchemaViolation { ref field, .. } if field == "reason");
    }

    #[test]
    fn missing_changes_is_schema_violation() {
        let err = parse_suggestion(&wrap(json!({ "reason": "r" }))).unwrap_err();
        assert_matches!(err, SuggestionError::SchemaViolation { ref field, .. } if field == "changes");
    }

    #[test]
    fn non_string_reason_rejected() {
        let err = parse_suggestion(&wrap(json!({ "reason": 5, "changes": [] }))).unwrap_err();
        assert_matches!(err, SuggestionError::SchemaViolation { ref field, .. } if field == "reason");
    }

    #[test]
    fn legacy_markup_changes_rejected() {
        let err = parse_suggestion(&wrap(json!({
            "reason": "r",
            "changes": "<div>new markup</div>",
        })))
        .unwrap_err();
        assert_matches!(
            err,
            SuggestionError::SchemaViolation { ref field, ref detail }
                if field == "changes" && detail.contains("a string")
        );
    }

    // -- actions --

    #[test]
    fn bogus_action_type_is_named() {
        let err = parse_suggestion(&wrap(json!({
            "reason": "r",
            "changes": [{ "type": "bogus", "component": "hero" }],
        })))
        .unwrap_err();
        assert_matches!(
            err,
            SuggestionError::SchemaViolation { ref field, ref detail }
                if field == "changes[0].type" && detail.contains("'bogus'")
        );
    }

    #[test]
    fn non_object_action_rejected() {
        let err = parse_suggestion(&wrap(json!({ "reason": "r", "changes": ["move"] }))).unwrap_err();
        assert_matches!(err, SuggestionError::SchemaViolation { ref field, .. } if field == "changes[0]");
    }

    #[test]
    fn unknown_component_rejected() {
        let err = parse_suggestion(&wrap(json!({
            "reason": "r",
            "changes": [
                { "type": "remove", "component": "footer" },
                { "type": "remove", "component": "sidebar" },
            ],
        })))
        .unwrap_err();
        assert_matches!(
            err,
            SuggestionError::SchemaViolation { ref field, .. } if field == "changes[1].component"
        );
    }

    #[test]
    fn negative_position_rejected() {
        let err = parse_suggestion(&wrap(json!({
            "reason": "r",
            "changes": [{ "type": "move", "component": "hero", "position": -1 }],
        })))
        .unwrap_err();
        assert_matches!(
            err,
            SuggestionError::SchemaViolation { ref field, .. } if field == "changes[0].position"
        );
    }

    #[test]
    fn props_must_be_object() {
        let err = parse_suggestion(&wrap(json!({
            "reason": "r",
            "changes": [{ "type": "update_props", "component": "hero", "props": "big" }],
        })))
        .unwrap_err();
        assert_matches!(
            err,
            SuggestionError::SchemaViolation { ref field, .. } if field == "changes[0].props"
        );
    }

    #[test]
    fn full_suggestion_parses() {
        let raw = wrap(json!({
            "reason": "Lead with products and darken the page.",
            "changes": [
                { "type": "move", "component": "featured-products", "position": 0 },
                { "type": "toggle_visibility", "component": "newsletter" },
                { "type": "update_props", "component": "hero", "props": { "headline": "Hi" } },
                { "type": "update_theme", "theme": { "primary_color": "indigo", "spacing": "compact", "mode": "dark" } },
                { "type": "remove", "component": "testimonials", "note": "ignored" },
            ],
            "theme": { "primary_color": "indigo", "spacing": "compact", "mode": "dark" },
        }));
        let suggestion = parse_suggestion(&raw).unwrap();

        assert_eq!(suggestion.reason, "Lead with products and darken the page.");
        assert_eq!(suggestion.changes.len(), 5);
        assert_eq!(
            suggestion.changes[0],
            EditAction::Move {
                component: ComponentId::FeaturedProducts,
                position: 0,
            }
        );
        assert_eq!(
            suggestion.theme,
            Some(Theme {
                primary_color: PrimaryColor::Indigo,
                spacing: Spacing::Compact,
                mode: ThemeMode::Dark,
            })
        );
    }

    #[test]
    fn empty_changes_are_allowed() {
        let suggestion = parse_suggestion(&json!({ "reason": "Nothing to do", "changes": [] }).to_string()).unwrap();
        assert!(suggestion.changes.is_empty());
        assert_eq!(suggestion.theme, None);
    }

    // -- theme --

    #[test]
    fn null_theme_is_tolerated() {
        let suggestion =
            parse_suggestion(&wrap(json!({ "reason": "r", "changes": [], "theme": null }))).unwrap();
        assert_eq!(suggestion.theme, None);
    }

    #[test]
    fn neon_mode_is_invalid_theme() {
        let err = parse_suggestion(&wrap(json!({
            "reason": "r",
            "changes": [],
            "theme": { "primary_color": "rose", "spacing": "compact", "mode": "neon" },
        })))
        .unwrap_err();
        assert_matches!(err, SuggestionError::InvalidTheme { ref field, .. } if field == "theme.mode");
    }

    #[test]
    fn legacy_theme_tag_is_invalid_theme() {
        let err = parse_suggestion(&wrap(json!({ "reason": "r", "changes": [], "theme": "Indigo" })))
            .unwrap_err();
        assert_matches!(err, SuggestionError::InvalidTheme { ref field, .. } if field == "theme");
    }

    #[test]
    fn invalid_theme_inside_action_is_invalid_theme() {
        let err = parse_suggestion(&wrap(json!({
            "reason": "r",
            "changes": [{ "type": "update_theme", "theme": { "primary_color": "teal", "spacing": "compact", "mode": "light" } }],
        })))
        .unwrap_err();
        assert_matches!(
            err,
            SuggestionError::InvalidTheme { ref field, .. } if field == "changes[0].theme.primary_color"
        );
    }

    // -- size --

    #[test]
    fn oversize_output_rejected_before_parsing() {
        let raw = "x".repeat(MAX_CONTENT_CHARS + 1);
        assert_matches!(
            parse_suggestion(&raw),
            Err(SuggestionError::PayloadTooLarge { max: MAX_CONTENT_CHARS, .. })
        );
    }

    #[test]
    fn changes_longer_once_reserialized_are_rejected() {
        // `1e15` is 4 characters in the source but 18 once written back out.
        let numbers = vec!["1e15"; 60_000].join(",");
        let raw = format!(
            r#"{{"reason":"r","changes":[{{"type":"update_props","component":"hero","props":{{"a":[{numbers}]}}}}]}}"#
        );
        assert!(raw.chars().count() < MAX_CONTENT_CHARS);

        assert_matches!(
            parse_suggestion(&raw),
            Err(SuggestionError::PayloadTooLarge { max: MAX_CONTENT_CHARS, actual })
                if actual > MAX_CONTENT_CHARS
        );
    }
}
