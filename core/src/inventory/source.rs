//! # Device Sources
//!
//! Where the records come from: the JSON payload injected by the
//! platform when present and parseable, the built-in example devices
//! otherwise.
//!
//! A malformed payload falls back to the example list without failing the
//! run; the parse error is only visible at debug level, because anything
//! written to the inventory contract is treated as authoritative by the
//! caller.

use std::env;

use tracing::debug;

use aapkit_common::device::DeviceRecord;

/// Environment variable carrying the injected JSON device array.
pub const INVENTORY_ENV: &str = "AAP_FORTINET_INVENTORY";

/// One built-in device plus the variable that may override its address.
#[derive(Debug, Clone)]
pub struct FallbackDevice {
    pub record: DeviceRecord,
    pub ip_env: &'static str,
}

impl FallbackDevice {
    fn new(record: DeviceRecord, ip_env: &'static str) -> Self {
        Self { record, ip_env }
    }

    /// Applies the per-device address override, if set.
    fn resolve(self) -> DeviceRecord {
        let mut record = self.record;
        if let Ok(ip) = env::var(self.ip_env) {
            record.ip_address = Some(ip);
        }
        record
    }
}

/// Resolves the device records for this invocation.
pub fn device_records() -> Vec<DeviceRecord> {
    if let Ok(raw) = env::var(INVENTORY_ENV) {
        match serde_json::from_str::<Vec<DeviceRecord>>(&raw) {
            Ok(records) => return records,
            Err(err) => debug!("ignoring malformed {INVENTORY_ENV} payload: {err}"),
        }
    }

    fallback_devices()
        .into_iter()
        .map(FallbackDevice::resolve)
        .collect()
}

/// The example devices used when the platform injects nothing.
pub fn fallback_devices() -> Vec<FallbackDevice> {
    vec![
        FallbackDevice::new(
            DeviceRecord {
                hostname: "fw-prod-01".to_string(),
                ip_address: Some("192.168.1.10".to_string()),
                device_type: Some("firewall".to_string()),
                environment: Some("production".to_string()),
                location: Some("dc1".to_string()),
                vdom: Some("root".to_string()),
                model: Some("FortiGate-100F".to_string()),
                firmware: Some("7.0.0".to_string()),
            },
            "FORTINET_PROD_FW01_IP",
        ),
        FallbackDevice::new(
            DeviceRecord {
                hostname: "fw-prod-02".to_string(),
                ip_address: Some("192.168.1.11".to_string()),
                device_type: Some("firewall".to_string()),
                environment: Some("production".to_string()),
                location: Some("dc2".to_string()),
                vdom: Some("root".to_string()),
                model: Some("FortiGate-100F".to_string()),
                firmware: Some("7.0.0".to_string()),
            },
            "FORTINET_PROD_FW02_IP",
        ),
        FallbackDevice::new(
            DeviceRecord {
                hostname: "fw-staging-01".to_string(),
                ip_address: Some("192.168.2.10".to_string()),
                device_type: Some("firewall".to_string()),
                environment: Some("staging".to_string()),
                location: Some("dc1".to_string()),
                vdom: Some("root".to_string()),
                model: Some("FortiGate-60F".to_string()),
                firmware: Some("6.4.8".to_string()),
            },
            "FORTINET_STAGING_FW01_IP",
        ),
    ]
}
