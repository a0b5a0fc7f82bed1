//! Edit-action vocabulary understood by the client-side renderer.
//!
//! Actions are ephemeral: the backend validates them and hands them to the
//! client, which applies them. They are never persisted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::theme::Theme;

/// Wire names of every permitted action type.
pub const ACTION_TYPES: &[&str] = &[
    "move",
    "remove",
    "toggle_visibility",
    "update_props",
    "update_theme",
];

/// Page components the renderer knows how to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentId {
    Hero,
    FeaturedProducts,
    Testimonials,
    Newsletter,
    Footer,
}

impl ComponentId {
    pub const ALL: [ComponentId; 5] = [
        Self::Hero,
        Self::FeaturedProducts,
        Self::Testimonials,
        Self::Newsletter,
        Self::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::FeaturedProducts => "featured-products",
            Self::Testimonials => "testimonials",
            Self::Newsletter => "newsletter",
            Self::Footer => "footer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// One structured edit instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditAction {
    /// Move a component to a zero-based position in the page order.
    Move { component: ComponentId, position: u32 },
    Remove { component: ComponentId },
    ToggleVisibility { component: ComponentId },
    /// Merge `props` into the component's properties.
    UpdateProps {
        component: ComponentId,
        props: Map<String, Value>,
    },
    UpdateTheme { theme: Theme },
}

impl EditAction {
    /// Wire name of this action's type tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Move { .. } => "move",
            Self::Remove { .. } => "remove",
            Self::ToggleVisibility { .. } => "toggle_visibility",
            Self::UpdateProps { .. } => "update_props",
            Self::UpdateTheme { .. } => "update_theme",
        }
    }
}
