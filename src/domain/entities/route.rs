//! Route metadata consulted by parameter converters.

use std::collections::{BTreeMap, HashMap};

/// Raw values of a matched route, keyed by parameter name.
pub type RouteDefaults = HashMap<String, String>;

/// Describes how one URL segment of a route should be interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamDefinition {
    /// Reserved type tag, e.g. `draft_preview`.
    pub type_tag: Option<String>,
    /// Id of the converter bound while the route table was built.
    pub converter: Option<String>,
}

impl ParamDefinition {
    /// A definition carrying the given type tag.
    pub fn typed(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: Some(type_tag.into()),
            converter: None,
        }
    }

    /// A definition with no type tag.
    pub fn untyped() -> Self {
        Self::default()
    }

    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }
}

/// A named route and the definitions of its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    pub name: String,
    pub path: String,
    pub parameters: BTreeMap<String, ParamDefinition>,
}

impl RouteInfo {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) a parameter definition.
    pub fn with_parameter(mut self, name: impl Into<String>, definition: ParamDefinition) -> Self {
        self.parameters.insert(name.into(), definition);
        self
    }
}
