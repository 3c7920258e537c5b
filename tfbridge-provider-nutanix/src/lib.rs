//! TfBridge Nutanix Provider
//!
//! Bridged provider metadata for the Nutanix Terraform provider.
//!
//! ## Module Structure
//!
//! - `schemas` - Native resource schemas inspected by the auto-name pass
//! - `provider` - Descriptor builder (`provider_info`)

pub mod provider;
pub mod schemas;

pub use provider::provider_info;
