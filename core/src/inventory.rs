//! # Inventory Builder
//!
//! Builds the complete inventory tree for the fortinet estate.
//!
//! The tree is a typed value assembled by one pure pass over the device
//! records: the fixed group set and the fortinet connection defaults are
//! declared up front, every record lands in the flat device group and in
//! `_meta.hostvars`, and recognized environment / role / location values
//! additionally place the host in the matching category group. Unknown
//! category values keep a host out of the category groups only; it is
//! never dropped from the inventory itself.

use std::collections::BTreeMap;

use serde::Serialize;

use aapkit_common::device::DeviceRecord;

pub mod source;

const DEFAULT_TYPE: &str = "firewall";
const DEFAULT_ENVIRONMENT: &str = "production";
const DEFAULT_LOCATION: &str = "dc1";
const DEFAULT_VDOM: &str = "root";
const DEFAULT_MODEL: &str = "FortiGate";
const DEFAULT_FIRMWARE: &str = "unknown";

/// The complete tree, serialized field-for-field in the group order the
/// orchestration platform expects.
#[derive(Debug, Clone, Serialize)]
pub struct Inventory {
    #[serde(rename = "_meta")]
    pub meta: Meta,
    pub all: AllGroup,
    pub fortinet: DeviceGroup,
    pub production: HostGroup,
    pub staging: HostGroup,
    pub development: HostGroup,
    pub firewalls: HostGroup,
    pub routers: HostGroup,
    pub datacenter_primary: HostGroup,
    pub datacenter_secondary: HostGroup,
    pub cloud_aws: HostGroup,
    pub cloud_azure: HostGroup,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub hostvars: BTreeMap<String, HostVars>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllGroup {
    pub children: Vec<String>,
}

/// The flat device group every host belongs to, carrying the shared
/// connection defaults.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceGroup {
    pub hosts: Vec<String>,
    pub vars: ConnectionVars,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HostGroup {
    pub hosts: Vec<String>,
}

/// Connection defaults for every fortinet device. The credential
/// expressions stay templated; the platform resolves them at job time.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionVars {
    pub ansible_connection: String,
    pub ansible_network_os: String,
    pub ansible_httpapi_use_ssl: bool,
    pub ansible_httpapi_validate_certs: bool,
    pub ansible_httpapi_port: u16,
    pub ansible_httpapi_timeout: u32,
    pub ansible_user: String,
    pub ansible_password: String,
    pub vdom: String,
}

impl Default for ConnectionVars {
    fn default() -> Self {
        Self {
            ansible_connection: "httpapi".to_string(),
            ansible_network_os: "fortios".to_string(),
            ansible_httpapi_use_ssl: true,
            ansible_httpapi_validate_certs: false,
            ansible_httpapi_port: 443,
            ansible_httpapi_timeout: 30,
            ansible_user: r#"{{ fortinet_username | default("admin") }}"#.to_string(),
            ansible_password: "{{ fortinet_password }}".to_string(),
            vdom: DEFAULT_VDOM.to_string(),
        }
    }
}

/// Flat per-host attribute mapping, complete for every known host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostVars {
    pub ansible_host: String,
    pub device_type: String,
    pub environment: String,
    pub location: String,
    pub vdom: String,
    pub device_model: String,
    pub firmware_version: String,
}

impl HostVars {
    /// Flattens a record, substituting the declared defaults for absent
    /// fields.
    fn from_record(record: &DeviceRecord) -> Self {
        Self {
            ansible_host: record.ip_address.clone().unwrap_or_default(),
            device_type: or_default(&record.device_type, DEFAULT_TYPE),
            environment: or_default(&record.environment, DEFAULT_ENVIRONMENT),
            location: or_default(&record.location, DEFAULT_LOCATION),
            vdom: or_default(&record.vdom, DEFAULT_VDOM),
            device_model: or_default(&record.model, DEFAULT_MODEL),
            firmware_version: or_default(&record.firmware, DEFAULT_FIRMWARE),
        }
    }
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

/// Builds the complete tree from the given records.
pub fn build(records: &[DeviceRecord]) -> Inventory {
    let mut inv = Inventory::empty();

    for record in records {
        let vars = HostVars::from_record(record);
        let hostname = record.hostname.clone();

        inv.fortinet.hosts.push(hostname.clone());

        match vars.environment.as_str() {
            "production" => inv.production.hosts.push(hostname.clone()),
            "staging" => inv.staging.hosts.push(hostname.clone()),
            "development" => inv.development.hosts.push(hostname.clone()),
            _ => {}
        }

        match vars.device_type.as_str() {
            "firewall" => inv.firewalls.hosts.push(hostname.clone()),
            "router" => inv.routers.hosts.push(hostname.clone()),
            _ => {}
        }

        match vars.location.as_str() {
            "dc1" => inv.datacenter_primary.hosts.push(hostname.clone()),
            "dc2" => inv.datacenter_secondary.hosts.push(hostname.clone()),
            "aws" => inv.cloud_aws.hosts.push(hostname.clone()),
            "azure" => inv.cloud_azure.hosts.push(hostname.clone()),
            _ => {}
        }

        inv.meta.hostvars.insert(hostname, vars);
    }

    inv
}

impl Inventory {
    /// The fixed group set with no hosts yet.
    fn empty() -> Self {
        Self {
            meta: Meta {
                hostvars: BTreeMap::new(),
            },
            all: AllGroup {
                children: vec!["fortinet".to_string()],
            },
            fortinet: DeviceGroup {
                hosts: Vec::new(),
                vars: ConnectionVars::default(),
            },
            production: HostGroup::default(),
            staging: HostGroup::default(),
            development: HostGroup::default(),
            firewalls: HostGroup::default(),
            routers: HostGroup::default(),
            datacenter_primary: HostGroup::default(),
            datacenter_secondary: HostGroup::default(),
            cloud_aws: HostGroup::default(),
            cloud_azure: HostGroup::default(),
        }
    }

    /// Variables for one host, if it is known.
    pub fn host_vars(&self, hostname: &str) -> Option<&HostVars> {
        self.meta.hostvars.get(hostname)
    }
}
