//! Structured theme descriptor.
//!
//! A theme is the triple `{primary_color, spacing, mode}`, each drawn from a
//! closed enumeration. Themes arrive from two untrusted sources (client
//! request bodies and model output), so [`Theme::from_value`] validates a raw
//! JSON value field by field and reports exactly which field is wrong.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Accepted top-level keys of a theme object.
pub const THEME_FIELDS: &[&str] = &["primary_color", "spacing", "mode"];

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryColor {
    Indigo,
    Emerald,
    Rose,
    Cyan,
    Amber,
    Violet,
}

impl PrimaryColor {
    pub const ALL: [PrimaryColor; 6] = [
        Self::Indigo,
        Self::Emerald,
        Self::Rose,
        Self::Cyan,
        Self::Amber,
        Self::Violet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Indigo => "indigo",
            Self::Emerald => "emerald",
            Self::Rose => "rose",
            Self::Cyan => "cyan",
            Self::Amber => "amber",
            Self::Violet => "violet",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    Comfortable,
}

impl Spacing {
    pub const ALL: [Spacing; 2] = [Self::Compact, Self::Comfortable];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Comfortable => "comfortable",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [Self::Light, Self::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A validated theme descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary_color: PrimaryColor,
    pub spacing: Spacing,
    pub mode: ThemeMode,
}

/// Why a raw value failed theme validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("theme must be a JSON object")]
    NotAnObject,

    #[error("theme is missing '{0}'")]
    MissingField(&'static str),

    #[error("theme has unknown field '{0}'")]
    UnknownField(String),

    #[error("theme.{field} has invalid value {value} (expected one of: {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl ThemeError {
    /// Dotted path of the offending field, relative to the theme object.
    pub fn field(&self) -> String {
        match self {
            Self::NotAnObject => String::new(),
            Self::MissingField(field) => (*field).to_string(),
            Self::UnknownField(field) => field.clone(),
            Self::InvalidValue { field, .. } => (*field).to_string(),
        }
    }
}

impl Theme {
    /// Validate an untrusted JSON value as a theme.
    pub fn from_value(value: &Value) -> Result<Self, ThemeError> {
        let obj = value.as_object().ok_or(ThemeError::NotAnObject)?;

        if let Some(unknown) = obj.keys().find(|k| !THEME_FIELDS.contains(&k.as_str())) {
            return Err(ThemeError::UnknownField(unknown.clone()));
        }

        let primary_color = enum_field(
            obj,
            "primary_color",
            PrimaryColor::parse,
            &PrimaryColor::ALL.map(PrimaryColor::as_str),
        )?;
        let spacing = enum_field(obj, "spacing", Spacing::parse, &Spacing::ALL.map(Spacing::as_str))?;
        let mode = enum_field(obj, "mode", ThemeMode::parse, &ThemeMode::ALL.map(ThemeMode::as_str))?;

        Ok(Self {
            primary_color,
            spacing,
            mode,
        })
    }
}

fn enum_field<T>(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
    expected: &[&str],
) -> Result<T, ThemeError> {
    let raw = obj.get(field).ok_or(ThemeError::MissingField(field))?;
    raw.as_str()
        .and_then(parse)
        .ok_or_else(|| ThemeError::InvalidValue {
            field,
            value: raw.to_string(),
            expected: expected.join(", "),
        })
}
