//! TfBridge Core
//!
//! Metadata types for exposing a Terraform provider's resources through a
//! higher-level infrastructure-as-code tool: namespaced tokens, a native
//! schema view, and the provider descriptor handed to the SDK generator.

pub mod info;
pub mod property;
pub mod schema;
pub mod tokens;
