//! Menu property bags.
//!
//! A property bag carries at most the four recognized keys `url`, `icon`,
//! `priority` and `title`. Bags arrive either as deserialized config
//! (`deny_unknown_fields` rejects extra keys) or as plain key/value pairs
//! validated by [`MenuProperties::from_pairs`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::{MenuError, MenuResult};

/// Keys accepted in a property bag.
pub const PROPERTY_KEYS: [&str; 4] = ["url", "icon", "priority", "title"];

/// Priority assumed for nodes that never had one set.
pub const DEFAULT_PRIORITY: i64 = 100;

/// Scalar value of a single property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Integer(n) => write!(f, "{}", n),
            PropertyValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Integer(i64::from(value))
    }
}

/// Sparse set of menu properties; `None` means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MenuProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag from plain key/value pairs.
    ///
    /// Keys are matched case-insensitively against [`PROPERTY_KEYS`]; any
    /// other key fails with [`MenuError::UnknownProperty`] naming it. A
    /// `priority` given as text must parse as an integer. Later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> MenuResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<PropertyValue>,
    {
        let mut props = Self::new();
        for (key, value) in pairs {
            props.set(key.as_ref(), value.into())?;
        }
        Ok(props)
    }

    /// Set a single property by key.
    ///
    /// `key` must match one of [`PROPERTY_KEYS`], ignoring case. A text
    /// `priority` that does not parse as an integer fails with
    /// [`MenuError::InvalidPropertyValue`] rather than being coerced to a
    /// number, so a typo in a config file never silently reorders the menu.
    pub fn set(&mut self, key: &str, value: PropertyValue) -> MenuResult<()> {
        let known = PROPERTY_KEYS
            .iter()
            .copied()
            .find(|known| known.eq_ignore_ascii_case(key))
            .ok_or_else(|| MenuError::UnknownProperty {
                key: key.to_string(),
            })?;

        match known {
            "url" => self.url = Some(value.to_string()),
            "icon" => self.icon = Some(value.to_string()),
            "title" => self.title = Some(value.to_string()),
            _ => self.priority = Some(parse_priority(key, value)?),
        }
        Ok(())
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Copy every field set in `other` over `self`, keeping the rest.
    pub fn overlay(&mut self, other: &MenuProperties) {
        if let Some(url) = &other.url {
            self.url = Some(url.clone());
        }
        if let Some(icon) = &other.icon {
            self.icon = Some(icon.clone());
        }
        if let Some(priority) = other.priority {
            self.priority = Some(priority);
        }
        if let Some(title) = &other.title {
            self.title = Some(title.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.icon.is_none() && self.priority.is_none() && self.title.is_none()
    }
}

fn parse_priority(key: &str, value: PropertyValue) -> MenuResult<i64> {
    match value {
        PropertyValue::Integer(n) => Ok(n),
        PropertyValue::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| MenuError::InvalidPropertyValue {
                key: key.to_string(),
                value: s,
            }),
    }
}
