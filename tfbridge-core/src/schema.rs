//! Schema - Native provider schema model
//!
//! A read-only view of the underlying provider's declared schema: per
//! resource name, a table of field descriptors carrying at least the
//! optional/required flags. The bridge never validates this schema; it only
//! inspects it during the auto-name pass.

use std::collections::BTreeMap;

/// Native field type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Int,
    Bool,
    List,
    Map,
    Set,
}

/// A single field descriptor in a native resource schema
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub field_type: FieldType,
    pub optional: bool,
    pub required: bool,
}

impl FieldSchema {
    /// A computed-only field: neither settable nor required
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            optional: false,
            required: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether the field accepts input (optional or required)
    pub fn is_input(&self) -> bool {
        self.optional || self.required
    }
}

/// Field table for one native resource
#[derive(Debug, Clone, Default)]
pub struct ResourceSchema {
    fields: BTreeMap<String, FieldSchema>,
}

impl ResourceSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        self.fields.insert(name.into(), schema);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Resource-name-keyed schema table for a whole native provider
#[derive(Debug, Clone, Default)]
pub struct ProviderSchema {
    resources: BTreeMap<String, ResourceSchema>,
}

impl ProviderSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resource(mut self, name: impl Into<String>, schema: ResourceSchema) -> Self {
        self.resources.insert(name.into(), schema);
        self
    }

    /// Look up a native resource schema by name. Absent names return `None`;
    /// callers are expected to skip rather than fail, so a mapping entry
    /// with no native counterpart is benign.
    pub fn get(&self, name: &str) -> Option<&ResourceSchema> {
        self.resources.get(name)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
