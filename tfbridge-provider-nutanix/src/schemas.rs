//! Native Nutanix resource schemas
//!
//! Hand-listed field tables for the resources this bridge exposes, limited
//! to the attributes the bridge inspects (input flags on each field). They
//! stand in for the native provider's full schema object; resources the
//! bridge does not map are deliberately not listed.

use tfbridge_core::schema::{FieldSchema, FieldType, ProviderSchema, ResourceSchema};

fn virtual_machine() -> ResourceSchema {
    ResourceSchema::new()
        .field("name", FieldSchema::new(FieldType::String).optional())
        .field("description", FieldSchema::new(FieldType::String).optional())
        .field("cluster_uuid", FieldSchema::new(FieldType::String).required())
        .field("num_vcpus_per_socket", FieldSchema::new(FieldType::Int).optional())
        .field("num_sockets", FieldSchema::new(FieldType::Int).optional())
        .field("memory_size_mib", FieldSchema::new(FieldType::Int).optional())
        .field("power_state", FieldSchema::new(FieldType::String).optional())
        .field("categories", FieldSchema::new(FieldType::Set).optional())
        .field("state", FieldSchema::new(FieldType::String))
}

fn image() -> ResourceSchema {
    ResourceSchema::new()
        .field("name", FieldSchema::new(FieldType::String).required())
        .field("description", FieldSchema::new(FieldType::String).optional())
        .field("source_uri", FieldSchema::new(FieldType::String).optional())
        .field("source_path", FieldSchema::new(FieldType::String).optional())
        .field("image_type", FieldSchema::new(FieldType::String).optional())
        .field("checksum", FieldSchema::new(FieldType::Map).optional())
        .field("size_bytes", FieldSchema::new(FieldType::Int))
}

fn subnet() -> ResourceSchema {
    ResourceSchema::new()
        .field("name", FieldSchema::new(FieldType::String).required())
        .field("description", FieldSchema::new(FieldType::String).optional())
        .field("cluster_uuid", FieldSchema::new(FieldType::String).required())
        .field("vlan_id", FieldSchema::new(FieldType::Int).optional())
        .field("subnet_type", FieldSchema::new(FieldType::String).required())
        .field("subnet_ip", FieldSchema::new(FieldType::String).optional())
        .field("default_gateway_ip", FieldSchema::new(FieldType::String).optional())
        .field("prefix_length", FieldSchema::new(FieldType::Int).optional())
        .field("dhcp_domain_name_server_list", FieldSchema::new(FieldType::List).optional())
}

fn category_key() -> ResourceSchema {
    ResourceSchema::new()
        .field("name", FieldSchema::new(FieldType::String).required())
        .field("description", FieldSchema::new(FieldType::String).optional())
        .field("system_defined", FieldSchema::new(FieldType::Bool))
}

fn category_value() -> ResourceSchema {
    ResourceSchema::new()
        .field("name", FieldSchema::new(FieldType::String).required())
        .field("value", FieldSchema::new(FieldType::String).required())
        .field("description", FieldSchema::new(FieldType::String).optional())
        .field("system_defined", FieldSchema::new(FieldType::Bool))
}

fn network_security_rule() -> ResourceSchema {
    ResourceSchema::new()
        .field("name", FieldSchema::new(FieldType::String).required())
        .field("description", FieldSchema::new(FieldType::String).optional())
        .field("app_rule_action", FieldSchema::new(FieldType::String).optional())
        .field("quarantine_rule_action", FieldSchema::new(FieldType::String).optional())
}

/// Returns the native schema table for every bridged Nutanix resource
pub fn provider() -> ProviderSchema {
    ProviderSchema::new()
        .resource("nutanix_virtual_machine", virtual_machine())
        .resource("nutanix_image", image())
        .resource("nutanix_subnet", subnet())
        .resource("nutanix_category_key", category_key())
        .resource("nutanix_category_value", category_value())
        .resource("nutanix_network_security_rule", network_security_rule())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bridged_resource_declares_an_input_name() {
        let schema = provider();
        for resource in [
            "nutanix_virtual_machine",
            "nutanix_image",
            "nutanix_subnet",
            "nutanix_category_key",
            "nutanix_category_value",
            "nutanix_network_security_rule",
        ] {
            let name = schema
                .get(resource)
                .and_then(|r| r.get("name"))
                .unwrap_or_else(|| panic!("{} has no name field", resource));
            assert!(name.is_input(), "{} name field is not an input", resource);
        }
    }

    #[test]
    fn computed_fields_are_not_inputs() {
        let schema = provider();
        let vm = schema.get("nutanix_virtual_machine").unwrap();
        assert!(!vm.get("state").unwrap().is_input());
    }

    #[test]
    fn unmapped_resources_are_absent() {
        let schema = provider();
        assert_eq!(schema.len(), 6);
        assert!(schema.get("nutanix_volume_group").is_none());
    }
}
