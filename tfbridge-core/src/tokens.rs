//! Tokens - Namespaced identifiers for bridged types
//!
//! The bridge addresses every resource and data source through a token of
//! the form `package:module:name`. Resource and data-source tokens extend
//! the module with a per-type file segment named by lower-casing the first
//! character of the type name.

use std::fmt;

use serde::Serialize;

/// A namespaced module member token (e.g. `nutanix:index/getClusters:getClusters`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MemberToken(String);

impl MemberToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Package segment of the token
    pub fn package(&self) -> &str {
        self.segment(0)
    }

    /// Module segment of the token (including any file segment)
    pub fn module(&self) -> &str {
        self.segment(1)
    }

    /// Member name segment of the token
    pub fn name(&self) -> &str {
        self.segment(2)
    }

    fn segment(&self, index: usize) -> &str {
        self.0.splitn(3, ':').nth(index).unwrap_or("")
    }
}

impl fmt::Display for MemberToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A namespaced type token (e.g. `nutanix:index/virtualMachine:VirtualMachine`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeToken(MemberToken);

impl TypeToken {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn package(&self) -> &str {
        self.0.package()
    }

    pub fn module(&self) -> &str {
        self.0.module()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Token components for a bridged package
///
/// Holds the fixed package prefix and manufactures all tokens from it, so
/// the prefix is explicit configuration handed to the descriptor builder
/// rather than ambient package-level state.
#[derive(Debug, Clone)]
pub struct Tokens {
    package: String,
}

impl Tokens {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Manufacture a member token for the given module and member
    pub fn member(&self, module: &str, member: &str) -> MemberToken {
        MemberToken(format!("{}:{}:{}", self.package, module, member))
    }

    /// Manufacture a type token for the given module and type
    pub fn type_token(&self, module: &str, name: &str) -> TypeToken {
        TypeToken(self.member(module, name))
    }

    /// Manufacture a standard resource token for the given module and
    /// resource name. The module path gains a file segment named by
    /// lower-casing the resource name's first character; the display
    /// segment keeps its original casing.
    pub fn resource(&self, module: &str, name: &str) -> TypeToken {
        self.type_token(&format!("{}/{}", module, lower_first(name)), name)
    }

    /// Manufacture a standard data-source token for the given module and
    /// data-source name, using the same lower-first file segment rule.
    pub fn data_source(&self, module: &str, name: &str) -> MemberToken {
        self.member(&format!("{}/{}", module, lower_first(name)), name)
    }
}

/// Lower-case the first character of a string
/// e.g., "VirtualMachine" -> "virtualMachine"
fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}
