use crate::value::{PropertyPath, PropertyValue};
use std::collections::BTreeMap;
use thiserror::Error;

/// Property bag of a declared resource.
pub type Properties = BTreeMap<String, PropertyValue>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("resource kind must not be empty")]
    EmptyKind,
    #[error("resource name must not be empty (kind {kind})")]
    EmptyName { kind: String },
}

/// A declared infrastructure object: kind + name + properties.
///
/// Immutable once constructed. Properties are stored as given; their schema is the provider's
/// concern.
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    kind: String,
    name: String,
    urn: Option<String>,
    properties: Properties,
}

impl Resource {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        properties: Properties,
    ) -> Result<Self, ResourceError> {
        let kind = kind.into();
        let name = name.into();
        if kind.is_empty() {
            return Err(ResourceError::EmptyKind);
        }
        if name.is_empty() {
            return Err(ResourceError::EmptyName { kind });
        }
        Ok(Self {
            kind,
            name,
            urn: None,
            properties,
        })
    }

    /// Attach the stack URN the resource was exported under.
    pub fn with_urn(mut self, urn: impl Into<String>) -> Self {
        self.urn = Some(urn.into());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn urn(&self) -> Option<&str> {
        self.urn.as_deref()
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Look up a nested property. Never fails: absence or a wrong shape anywhere along the path
    /// yields `None`.
    pub fn get(&self, path: impl Into<PropertyPath>) -> Option<&PropertyValue> {
        let path = path.into();
        let (first, rest) = path.segments().split_first()?;
        self.properties.get(first)?.descend(rest)
    }
}
