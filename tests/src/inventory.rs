#![cfg(test)]
//! Inventory scenarios driven through serde, the same way the
//! orchestration platform consumes the output.

use aapkit_common::device::DeviceRecord;
use aapkit_core::inventory;
use serde_json::Value;

#[test]
fn injected_payload_end_to_end() {
    let payload = r#"[{"hostname":"fw-x","ip_address":"10.0.0.5","type":"router","environment":"staging","location":"azure"}]"#;

    let records: Vec<DeviceRecord> = serde_json::from_str(payload).unwrap();
    let tree = serde_json::to_value(inventory::build(&records)).unwrap();

    assert_eq!(tree["fortinet"]["hosts"], serde_json::json!(["fw-x"]));
    assert_eq!(tree["routers"]["hosts"], serde_json::json!(["fw-x"]));
    assert_eq!(tree["staging"]["hosts"], serde_json::json!(["fw-x"]));
    assert_eq!(tree["cloud_azure"]["hosts"], serde_json::json!(["fw-x"]));
    assert_eq!(tree["_meta"]["hostvars"]["fw-x"]["ansible_host"], "10.0.0.5");
}

#[test]
fn group_host_lists_always_resolve_to_hostvars() {
    let records = vec![
        DeviceRecord {
            device_type: Some("router".to_string()),
            environment: Some("development".to_string()),
            location: Some("aws".to_string()),
            ..DeviceRecord::named("rt-dev-01")
        },
        DeviceRecord {
            device_type: Some("firewall".to_string()),
            location: Some("dc2".to_string()),
            ..DeviceRecord::named("fw-prod-09")
        },
        DeviceRecord {
            environment: Some("lab".to_string()),
            location: Some("colo".to_string()),
            ..DeviceRecord::named("fw-lab-01")
        },
    ];

    let tree = serde_json::to_value(inventory::build(&records)).unwrap();

    let groups = [
        "fortinet",
        "production",
        "staging",
        "development",
        "firewalls",
        "routers",
        "datacenter_primary",
        "datacenter_secondary",
        "cloud_aws",
        "cloud_azure",
    ];
    for group in groups {
        let hosts = tree[group]["hosts"].as_array().unwrap();
        for host in hosts {
            let name = host.as_str().unwrap();
            assert!(
                tree["_meta"]["hostvars"].get(name).is_some(),
                "{group} lists {name} without a hostvars entry"
            );
        }
    }
}

#[test]
fn hostvars_entries_carry_every_declared_field() {
    let records = vec![DeviceRecord::named("fw-min")];
    let tree = serde_json::to_value(inventory::build(&records)).unwrap();

    let vars = tree["_meta"]["hostvars"]["fw-min"].as_object().unwrap();
    let fields = [
        "ansible_host",
        "device_type",
        "environment",
        "location",
        "vdom",
        "device_model",
        "firmware_version",
    ];
    for field in fields {
        assert!(vars.contains_key(field), "missing {field}");
        assert!(vars[field].is_string());
    }

    let value: Value = tree["fortinet"]["vars"]["ansible_network_os"].clone();
    assert_eq!(value, "fortios");
}
