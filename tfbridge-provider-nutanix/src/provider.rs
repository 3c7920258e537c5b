//! Bridged descriptor for the Nutanix Terraform provider
//!
//! This module defines:
//! - Token tables mapping native resource and data-source names
//! - The configuration-option table backed by `NUTANIX_*` environment variables
//! - Per-target-language packaging metadata for the generated SDKs

use std::collections::BTreeMap;

use heck::ToUpperCamelCase;
use tfbridge_core::info::{
    CSharpInfo, ConfigureError, DataSourceMapping, DefaultPolicy, FieldOverride, JavaScriptInfo,
    ProviderInfo, PythonInfo, ResourceMapping,
};
use tfbridge_core::property::{PropertyMap, ResourceConfig};
use tfbridge_core::tokens::Tokens;

use crate::schemas;

// all of the token components used below.
const MAIN_PKG: &str = "nutanix";
const MAIN_MOD: &str = "index";

/// Pre-configure hook, called before the native provider configures itself
///
/// Should validate that the provider can be configured and return an
/// actionable error when it cannot. Connection properties can be read from
/// `vars` with `string_value`, e.g. `string_value(vars, "endpoint")`.
/// Currently accepts any configuration.
fn pre_configure(_vars: &PropertyMap, _config: &ResourceConfig) -> Result<(), ConfigureError> {
    Ok(())
}

/// Configuration option whose default comes from an environment variable
fn env_option(tokens: &Tokens, key: &str, env_var: &str) -> FieldOverride {
    FieldOverride::new()
        .with_type(tokens.type_token(key, &key.to_upper_camel_case()))
        .with_default(DefaultPolicy::EnvVars(vec![env_var.to_string()]))
}

fn packages<const N: usize>(pairs: [(&str, &str); N]) -> BTreeMap<String, String> {
    pairs
        .into_iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}

/// Returns the assembled descriptor for the Nutanix provider
///
/// The resource and data-source tables below are the single source of
/// truth for what the bridge exposes: native names not listed here stay
/// invisible to the generator. After the tables are built, the auto-name
/// pass injects a generated default onto every mapped resource with an
/// input field named "name" and no explicit override.
pub fn provider_info() -> ProviderInfo {
    let tokens = Tokens::new(MAIN_PKG);

    let mut info = ProviderInfo::new(MAIN_PKG);
    info.description = "A package for creating and managing Nutanix cloud resources.".to_string();
    info.keywords = vec!["nutanix".to_string(), "virtualization".to_string()];
    info.license = "Apache-2.0".to_string();
    info.homepage = "https://github.com/tfbridge/tfbridge-nutanix".to_string();
    info.repository = "https://github.com/tfbridge/tfbridge-nutanix".to_string();

    info.config = [
        ("username", "NUTANIX_USERNAME"),
        ("password", "NUTANIX_PASSWORD"),
        ("endpoint", "NUTANIX_ENDPOINT"),
        ("port", "NUTANIX_PORT"),
        ("proxy_url", "NUTANIX_PROXY_URL"),
        ("insecure", "NUTANIX_INSECURE"),
        ("wait_timeout", "NUTANIX_WAIT_TIMEOUT"),
    ]
    .into_iter()
    .map(|(key, env_var)| (key.to_string(), env_option(&tokens, key, env_var)))
    .collect();

    info.resources = [
        ("nutanix_virtual_machine", "VirtualMachine"),
        ("nutanix_image", "Image"),
        ("nutanix_subnet", "Subnet"),
        ("nutanix_category_key", "CategoryKey"),
        ("nutanix_category_value", "CategoryValue"),
        ("nutanix_network_security_rule", "NetworkSecurityGroup"),
    ]
    .into_iter()
    .map(|(native, name)| {
        (
            native.to_string(),
            ResourceMapping::new(tokens.resource(MAIN_MOD, name)),
        )
    })
    .collect();

    info.data_sources = [
        ("nutanix_virtual_machine", "getVirtualMachine"),
        ("nutanix_cluster", "getCluster"),
        ("nutanix_clusters", "getClusters"),
        ("nutanix_image", "getImage"),
        ("nutanix_subnet", "getSubnet"),
        ("nutanix_category_key", "getCategoryKey"),
        ("nutanix_network_security_rule", "getNetworkSecurityGroup"),
    ]
    .into_iter()
    .map(|(native, name)| {
        (
            native.to_string(),
            DataSourceMapping::new(tokens.data_source(MAIN_MOD, name)),
        )
    })
    .collect();

    info.javascript = Some(JavaScriptInfo {
        dependencies: packages([("@tfbridge/runtime", "latest")]),
        dev_dependencies: packages([("@types/node", "^8.0.25"), ("@types/mime", "^2.0.0")]),
    });
    info.python = Some(PythonInfo {
        requires: packages([("tfbridge-runtime", ">=1.0.0,<2.0.0")]),
    });
    info.csharp = Some(CSharpInfo {
        package_references: packages([
            ("TfBridge", "1.7.0-preview"),
            ("System.Collections.Immutable", "1.6.0"),
        ]),
    });

    info.pre_configure = Some(pre_configure);

    info.apply_auto_naming(&schemas::provider());
    info
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use tfbridge_core::info::{auto_name, AutoNamePolicy};
    use tfbridge_core::property::PropertyMap;

    #[test]
    fn virtual_machine_resource_token() {
        let info = provider_info();
        assert_eq!(
            info.resources["nutanix_virtual_machine"].token.as_str(),
            "nutanix:index/virtualMachine:VirtualMachine"
        );
    }

    #[test]
    fn clusters_data_source_token() {
        let info = provider_info();
        assert_eq!(
            info.data_sources["nutanix_clusters"].token.as_str(),
            "nutanix:index/getClusters:getClusters"
        );
    }

    #[test]
    fn resource_tokens_are_injective() {
        let info = provider_info();
        let tokens: BTreeSet<&str> = info
            .resources
            .values()
            .map(|mapping| mapping.token.as_str())
            .collect();
        assert_eq!(tokens.len(), info.resources.len());
    }

    #[test]
    fn config_tokens_are_unique_and_namespaced() {
        let info = provider_info();
        let mut seen = BTreeSet::new();
        for (key, option) in &info.config {
            let token = option.type_token.as_ref().unwrap();
            assert_eq!(token.package(), "nutanix");
            assert_eq!(token.module(), key.as_str());
            assert!(seen.insert(token.as_str().to_string()));
        }
        assert_eq!(info.config.len(), 7);
    }

    #[test]
    fn config_options_read_nutanix_env_vars() {
        let info = provider_info();
        let endpoint = &info.config["endpoint"];
        assert_eq!(
            endpoint.default,
            Some(DefaultPolicy::EnvVars(vec!["NUTANIX_ENDPOINT".to_string()]))
        );
        assert_eq!(
            endpoint.type_token.as_ref().unwrap().as_str(),
            "nutanix:endpoint:Endpoint"
        );
        assert_eq!(
            info.config["wait_timeout"].type_token.as_ref().unwrap().as_str(),
            "nutanix:wait_timeout:WaitTimeout"
        );
    }

    #[test]
    fn every_mapped_resource_gets_auto_name() {
        let info = provider_info();
        for (native, mapping) in &info.resources {
            assert_eq!(
                mapping.fields.get("name"),
                Some(&auto_name("name", 255)),
                "{} is missing the auto-name override",
                native
            );
        }
    }

    #[test]
    fn auto_name_default_is_bounded_to_255() {
        let info = provider_info();
        let field = &info.resources["nutanix_image"].fields["name"];
        match &field.default {
            Some(DefaultPolicy::AutoName(AutoNamePolicy { max_length, .. })) => {
                assert_eq!(*max_length, 255);
            }
            other => panic!("expected auto-name policy, got {:?}", other),
        }
    }

    #[test]
    fn exposed_surface_matches_the_tables() {
        let info = provider_info();
        assert_eq!(info.resources.len(), 6);
        assert_eq!(info.data_sources.len(), 7);
        // Listed in the native schema but absent from the tables, so
        // invisible to the bridge.
        assert!(!info.resources.contains_key("nutanix_volume_group"));
    }

    #[test]
    fn pre_configure_accepts_empty_configuration() {
        let info = provider_info();
        let hook = info.pre_configure.unwrap();
        assert!(hook(&PropertyMap::new(), &ResourceConfig::new()).is_ok());
    }

    #[test]
    fn descriptor_serializes_deterministically() {
        let first = serde_json::to_string(&provider_info()).unwrap();
        let second = serde_json::to_string(&provider_info()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rebuilding_and_rerunning_the_pass_changes_nothing() {
        let mut info = provider_info();
        let once = serde_json::to_string(&info).unwrap();
        info.apply_auto_naming(&schemas::provider());
        let twice = serde_json::to_string(&info).unwrap();
        assert_eq!(once, twice);
    }
}
