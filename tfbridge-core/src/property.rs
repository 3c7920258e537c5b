//! Property - Configuration snapshots handed to provider hooks
//!
//! The pre-configure hook receives the provider configuration as a
//! property-keyed map of plain values plus an opaque handle over the raw
//! native configuration. Neither is interpreted by the bridge itself.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single configuration property value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Int(i64),
    Bool(bool),
    List(Vec<PropertyValue>),
    Map(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Property-keyed configuration snapshot
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// Get a string value from a property map if present, else ""
///
/// Hook implementations use this to read credential and connection
/// properties, e.g. `string_value(vars, "endpoint")`.
pub fn string_value<'a>(vars: &'a PropertyMap, key: &str) -> &'a str {
    vars.get(key).and_then(PropertyValue::as_str).unwrap_or("")
}

/// Opaque handle over the native provider's raw resource configuration
///
/// Passed through to the pre-configure hook untouched; concrete hook
/// implementations may inspect it, the bridge core never does.
#[derive(Debug, Clone, Default)]
pub struct ResourceConfig {
    raw: BTreeMap<String, serde_json::Value>,
}

impl ResourceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.raw.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.raw.get(key)
    }
}
