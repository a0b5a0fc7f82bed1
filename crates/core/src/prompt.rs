//! Instruction prompt sent to the model for edit suggestions.

use crate::actions::{ComponentId, ACTION_TYPES};
use crate::theme::{PrimaryColor, Spacing, ThemeMode};

/// Build the full prompt for one edit request.
///
/// The prompt describes the required output object, the permitted action
/// vocabulary, and every enumeration the validator will enforce, followed by
/// the user's instruction and the current page content.
pub fn build_edit_prompt(instruction: &str, current_content: &str) -> String {
    let components = join(ComponentId::ALL.map(ComponentId::as_str));
    let colors = join(PrimaryColor::ALL.map(PrimaryColor::as_str));
    let spacings = join(Spacing::ALL.map(Spacing::as_str));
    let modes = join(ThemeMode::ALL.map(ThemeMode::as_str));
    let actions = join(ACTION_TYPES.iter().copied());

    format!(
        r#"You are a web designer editing a storefront page. You are given the
page's current content and an instruction from its owner. Propose the smallest
set of edits that satisfies the instruction.

Respond with ONLY one JSON object, no prose and no code fences:
{{
  "reason": "<one paragraph explaining the change>",
  "changes": [<edit actions, in the order they should be applied>],
  "theme": {{ "primary_color": <color>, "spacing": <spacing>, "mode": <mode> }}
}}

"theme" may be omitted when the theme should not change.

Each edit action is an object whose "type" is one of: {actions}.
  {{ "type": "move", "component": <component>, "position": <zero-based index> }}
  {{ "type": "remove", "component": <component> }}
  {{ "type": "toggle_visibility", "component": <component> }}
  {{ "type": "update_props", "component": <component>, "props": {{ <property>: <value> }} }}
  {{ "type": "update_theme", "theme": <theme object as above> }}

Allowed values:
  component: {components}
  color: {colors}
  spacing: {spacings}
  mode: {modes}

Instruction:
{instruction}

Current content:
{current_content}
"#
    )
}

fn join<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
