//! # Network Snapshot
//!
//! The materialized input handed over by the collaborators: one block per
//! source. A source that failed or timed out still yields a block, with its
//! `error` set next to whatever partial results it gathered.

use serde::{Deserialize, Serialize};

use crate::config::ScanRequest;
use crate::discovery::{DiscoveryDeviceRecord, DiscoveryServiceRecord};
use crate::network::host::ReachabilityResult;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<ScanRequest>,
    #[serde(default)]
    pub scan: ScanReport,
    #[serde(default)]
    pub mdns: ServiceReport,
    #[serde(default)]
    pub ssdp: DeviceReport,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanReport {
    #[serde(default)]
    pub hosts: Vec<ReachabilityResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceReport {
    #[serde(default)]
    pub services: Vec<DiscoveryServiceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceReport {
    #[serde(default)]
    pub devices: Vec<DiscoveryDeviceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NetworkSnapshot {
    /// `(source, message)` for every source that reported a failure.
    pub fn collaborator_errors(&self) -> Vec<(&'static str, &str)> {
        [
            ("scan", self.scan.error.as_deref()),
            ("mdns", self.mdns.error.as_deref()),
            ("ssdp", self.ssdp.error.as_deref()),
        ]
        .into_iter()
        .filter_map(|(source, error)| error.map(|message| (source, message)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.scan.hosts.is_empty() && self.mdns.services.is_empty() && self.ssdp.devices.is_empty()
    }
}
