//! # Device Record Model
//!
//! The input shape for the inventory generator.
//!
//! Records arrive either from the `AAP_FORTINET_INVENTORY` JSON payload or
//! from the built-in fallback list. Only the hostname is required; every
//! other field has a declared default substituted while the hostvars entry
//! is built, so a sparse payload still yields a complete inventory.

use serde::{Deserialize, Serialize};

/// One managed network device, as supplied by the inventory source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub hostname: String,

    #[serde(default)]
    pub ip_address: Option<String>,

    /// Device role, `firewall` or `router`. Unrecognized values keep the
    /// host out of the role groups but never out of the inventory.
    #[serde(default, rename = "type")]
    pub device_type: Option<String>,

    #[serde(default)]
    pub environment: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub vdom: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub firmware: Option<String>,
}

impl DeviceRecord {
    /// A record carrying nothing but its hostname.
    pub fn named(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            ip_address: None,
            device_type: None,
            environment: None,
            location: None,
            vdom: None,
            model: None,
            firmware: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_full_record() {
        let raw = r#"{
            "hostname": "fw-prod-01",
            "ip_address": "192.168.1.10",
            "type": "firewall",
            "environment": "production",
            "location": "dc1",
            "vdom": "root",
            "model": "FortiGate-100F",
            "firmware": "7.0.0"
        }"#;

        let record: DeviceRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.hostname, "fw-prod-01");
        assert_eq!(record.device_type.as_deref(), Some("firewall"));
        assert_eq!(record.model.as_deref(), Some("FortiGate-100F"));
    }

    #[test]
    fn hostname_alone_is_enough() {
        let record: DeviceRecord = serde_json::from_str(r#"{"hostname": "fw-x"}"#).unwrap();
        assert_eq!(record, DeviceRecord::named("fw-x"));
    }

    #[test]
    fn hostname_is_required() {
        let result = serde_json::from_str::<DeviceRecord>(r#"{"ip_address": "10.0.0.1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let raw = r#"{"hostname": "fw-x", "serial": "FG100F0000000001"}"#;
        let record: DeviceRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.hostname, "fw-x");
    }
}
