//! Info - Provider descriptor consumed by the bridge generator
//!
//! A `ProviderInfo` aggregates everything the generator needs to expose a
//! native provider under bridged tokens: package metadata, the
//! configuration-option table, the resource and data-source token tables,
//! and per-target-language packaging blocks. It is assembled once at
//! startup and not mutated after the auto-name pass runs.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::property::{PropertyMap, ResourceConfig};
use crate::schema::ProviderSchema;
use crate::tokens::{MemberToken, TypeToken};

/// Maximum length of a generated resource name
const AUTO_NAME_MAX_LENGTH: usize = 255;

/// Error returned by a pre-configure hook to abort provider initialization
#[derive(Debug, Clone, thiserror::Error)]
#[error("provider configuration rejected: {message}")]
pub struct ConfigureError {
    pub message: String,
}

impl ConfigureError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Hook invoked with the configuration snapshot before the native provider
/// configures itself. An `Err` here aborts initialization before any
/// network call is made; missing or invalid credentials are the only
/// condition that should produce one.
pub type PreConfigureCallback = fn(&PropertyMap, &ResourceConfig) -> Result<(), ConfigureError>;

/// Generated-naming policy for a field
///
/// The generator derives the final value at deployment time from the
/// resource's logical name plus a random suffix; this policy only fixes the
/// field, the separator, and the length bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoNamePolicy {
    pub field: String,
    pub separator: char,
    pub max_length: usize,
}

impl AutoNamePolicy {
    /// Join `base` and `suffix` with the separator, truncating `base` so
    /// the result never exceeds `max_length` characters.
    pub fn apply(&self, base: &str, suffix: &str) -> String {
        let reserved = suffix.chars().count() + 1;
        let keep = self.max_length.saturating_sub(reserved);
        let base: String = base.chars().take(keep).collect();
        format!("{}{}{}", base, self.separator, suffix)
    }
}

/// Standard auto-name override for `field`, bounded to `max_length`
pub fn auto_name(field: impl Into<String>, max_length: usize) -> FieldOverride {
    FieldOverride::new().with_default(DefaultPolicy::AutoName(AutoNamePolicy {
        field: field.into(),
        separator: '-',
        max_length,
    }))
}

/// Default-value policy for a configuration option or resource field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultPolicy {
    /// Environment variables consulted, in order, for the default
    EnvVars(Vec<String>),
    /// A fixed default value
    Value(serde_json::Value),
    /// A generated name (see [`AutoNamePolicy`])
    AutoName(AutoNamePolicy),
}

/// Override metadata for a single schema field
///
/// Used both for entries in the provider configuration table and for
/// per-resource field overrides. Overriding a field absent from the native
/// schema has no effect downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_token: Option<TypeToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultPolicy>,
}

impl FieldOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, token: TypeToken) -> Self {
        self.type_token = Some(token);
        self
    }

    pub fn with_default(mut self, default: DefaultPolicy) -> Self {
        self.default = Some(default);
        self
    }
}

/// Mapping entry exposing one native resource under a bridged type token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceMapping {
    pub token: TypeToken,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, FieldOverride>,
}

impl ResourceMapping {
    pub fn new(token: TypeToken) -> Self {
        Self {
            token,
            fields: BTreeMap::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, spec: FieldOverride) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }
}

/// Mapping entry exposing one native data source under a bridged member token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSourceMapping {
    pub token: MemberToken,
}

impl DataSourceMapping {
    pub fn new(token: MemberToken) -> Self {
        Self { token }
    }
}

/// Node package metadata for the generated JavaScript SDK
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JavaScriptInfo {
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

/// Package metadata for the generated Python SDK
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PythonInfo {
    pub requires: BTreeMap<String, String>,
}

/// Package metadata for the generated .NET SDK
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CSharpInfo {
    pub package_references: BTreeMap<String, String>,
}

/// The assembled provider descriptor
///
/// The resource and data-source tables are the single source of truth for
/// what the bridge exposes: native names absent from them never reach the
/// generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderInfo {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub license: String,
    pub homepage: String,
    pub repository: String,
    pub config: BTreeMap<String, FieldOverride>,
    pub resources: BTreeMap<String, ResourceMapping>,
    pub data_sources: BTreeMap<String, DataSourceMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript: Option<JavaScriptInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<PythonInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csharp: Option<CSharpInfo>,
    #[serde(skip)]
    pub pre_configure: Option<PreConfigureCallback>,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            keywords: Vec::new(),
            license: String::new(),
            homepage: String::new(),
            repository: String::new(),
            config: BTreeMap::new(),
            resources: BTreeMap::new(),
            data_sources: BTreeMap::new(),
            javascript: None,
            python: None,
            csharp: None,
            pre_configure: None,
        }
    }

    /// Inject a generated-naming default onto every mapped resource whose
    /// native schema declares an input field literally named "name".
    ///
    /// Mapping entries with no native counterpart are skipped silently
    /// (tolerant of drift between the table and the native provider), and
    /// entries that already override "name" are left alone, which also
    /// makes the pass idempotent.
    pub fn apply_auto_naming(&mut self, schema: &ProviderSchema) {
        const NAME_FIELD: &str = "name";

        for (resname, mapping) in &mut self.resources {
            let Some(native) = schema.get(resname) else {
                debug!(resource = %resname, "no native schema, skipping auto-name");
                continue;
            };
            if !native.get(NAME_FIELD).is_some_and(|f| f.is_input()) {
                continue;
            }
            if mapping.fields.contains_key(NAME_FIELD) {
                debug!(resource = %resname, "name already overridden, skipping auto-name");
                continue;
            }
            mapping.fields.insert(
                NAME_FIELD.to_string(),
                auto_name(NAME_FIELD, AUTO_NAME_MAX_LENGTH),
            );
            debug!(resource = %resname, "injected auto-name default");
        }
    }
}
