//! Structured property values and path navigation.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as JsonValue};
use std::collections::BTreeMap;
use std::fmt;

/// A JSON-like property value as declared on a resource.
///
/// `get` is the single controlled access point into nested values: a missing key, an index out
/// of range, or a scalar met mid-path all yield `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "JsonValue", into = "JsonValue")]
pub enum PropertyValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<PropertyValue>),
    Mapping(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Navigate below this value. An empty path yields `None`.
    pub fn get(&self, path: impl Into<PropertyPath>) -> Option<&PropertyValue> {
        let path = path.into();
        if path.is_empty() {
            return None;
        }
        self.descend(path.segments())
    }

    pub(crate) fn descend(&self, segments: &[String]) -> Option<&PropertyValue> {
        let mut current = self;
        for segment in segments {
            current = match current {
                PropertyValue::Mapping(map) => map.get(segment)?,
                PropertyValue::Sequence(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Truthiness as used by policy predicates.
    ///
    /// Falsy: `null`, `false`, zero, `""`, empty sequence, empty mapping.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyValue::Null => false,
            PropertyValue::Bool(b) => *b,
            PropertyValue::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            PropertyValue::String(s) => !s.is_empty(),
            PropertyValue::Sequence(items) => !items.is_empty(),
            PropertyValue::Mapping(map) => !map.is_empty(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[PropertyValue]> {
        match self {
            PropertyValue::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, PropertyValue>> {
        match self {
            PropertyValue::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl From<JsonValue> for PropertyValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => PropertyValue::Null,
            JsonValue::Bool(b) => PropertyValue::Bool(b),
            JsonValue::Number(n) => PropertyValue::Number(n),
            JsonValue::String(s) => PropertyValue::String(s),
            JsonValue::Array(items) => {
                PropertyValue::Sequence(items.into_iter().map(PropertyValue::from).collect())
            }
            JsonValue::Object(map) => PropertyValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, PropertyValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<PropertyValue> for JsonValue {
    fn from(value: PropertyValue) -> Self {
        match value {
            PropertyValue::Null => JsonValue::Null,
            PropertyValue::Bool(b) => JsonValue::Bool(b),
            PropertyValue::Number(n) => JsonValue::Number(n),
            PropertyValue::String(s) => JsonValue::String(s),
            PropertyValue::Sequence(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            PropertyValue::Mapping(map) => JsonValue::Object(
                map.into_iter().map(|(k, v)| (k, JsonValue::from(v))).collect(),
            ),
        }
    }
}

/// A segmented path into nested properties.
///
/// Built from a dotted string (`"ingress.0.cidrBlocks"`) or from explicit segments. A segment
/// addresses a sequence element when it parses as an index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PropertyPath(Vec<String>);

impl PropertyPath {
    pub fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::default();
        }
        Self(dotted.split('.').map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl From<&str> for PropertyPath {
    fn from(value: &str) -> Self {
        PropertyPath::parse(value)
    }
}

impl From<&PropertyPath> for PropertyPath {
    fn from(value: &PropertyPath) -> Self {
        value.clone()
    }
}

impl From<Vec<String>> for PropertyPath {
    fn from(value: Vec<String>) -> Self {
        PropertyPath(value)
    }
}

impl From<&[&str]> for PropertyPath {
    fn from(value: &[&str]) -> Self {
        PropertyPath(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PropertyPath {
    fn from(value: [&str; N]) -> Self {
        PropertyPath(value.iter().map(|s| s.to_string()).collect())
    }
}
