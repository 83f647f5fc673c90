//! # Device Aggregator
//!
//! Merges discovery records that resolve to the same address into one
//! [`AggregatedDevice`].
//!
//! Records whose address cannot be resolved are dropped; one incomplete record
//! never aborts the rest of the batch. The output is ordered by numeric IPv4
//! value so repeated runs over the same input compare equal.

use std::collections::{BTreeSet, HashMap};

use lanmap_common::discovery::{
    self, DiscoveryDeviceRecord, DiscoveryProtocol, DiscoveryRecord, DiscoveryServiceRecord,
};
use lanmap_common::network::ip;
use lanmap_common::utils::text::non_blank;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::resolver;

/// Which discovery families contributed to a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimaryProtocol {
    ServiceOnly,
    DeviceOnly,
    Both,
}

impl From<DiscoveryProtocol> for PrimaryProtocol {
    fn from(protocol: DiscoveryProtocol) -> Self {
        match protocol {
            DiscoveryProtocol::Mdns => Self::ServiceOnly,
            DiscoveryProtocol::Upnp => Self::DeviceOnly,
        }
    }
}

/// Every discovery record sharing one resolved address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedDevice {
    pub ip_address: String,
    pub hostnames: Vec<String>,
    pub service_records: Vec<DiscoveryServiceRecord>,
    pub device_records: Vec<DiscoveryDeviceRecord>,
    pub display_name: String,
    pub primary_protocol: PrimaryProtocol,
    pub ports: Vec<u16>,
    pub network_interfaces: Vec<String>,
}

impl AggregatedDevice {
    pub fn manufacturer(&self) -> Option<&str> {
        self.device_records
            .iter()
            .find_map(|record| non_blank(record.manufacturer.as_deref()))
    }

    pub fn device_kind(&self) -> Option<&str> {
        self.device_records.iter().find_map(|record| record.kind())
    }
}

/// A device while records are still being merged into it.
struct PendingDevice {
    ip_address: String,
    hostnames: Vec<String>,
    service_records: Vec<DiscoveryServiceRecord>,
    device_records: Vec<DiscoveryDeviceRecord>,
    primary_protocol: PrimaryProtocol,
    ports: BTreeSet<u16>,
    network_interfaces: Vec<String>,
}

type NameSource = fn(&PendingDevice) -> Option<&str>;

/// Display name candidates, highest precedence first.
const DISPLAY_NAME_SOURCES: &[(&str, NameSource)] = &[
    ("friendly_name", friendly_name),
    ("service_name", service_name),
    ("hostname", first_hostname),
    ("ip_address", ip_address),
];

fn friendly_name(device: &PendingDevice) -> Option<&str> {
    device
        .device_records
        .iter()
        .find_map(|record| non_blank(record.friendly_name.as_deref()))
}

fn service_name(device: &PendingDevice) -> Option<&str> {
    device.service_records.iter().find_map(|record| {
        non_blank(record.service_name.as_deref()).or_else(|| non_blank(record.name.as_deref()))
    })
}

fn first_hostname(device: &PendingDevice) -> Option<&str> {
    device.hostnames.first().map(String::as_str)
}

fn ip_address(device: &PendingDevice) -> Option<&str> {
    non_blank(Some(device.ip_address.as_str()))
}

impl PendingDevice {
    fn new(ip_address: String, protocol: DiscoveryProtocol) -> Self {
        Self {
            ip_address,
            hostnames: Vec::new(),
            service_records: Vec::new(),
            device_records: Vec::new(),
            primary_protocol: protocol.into(),
            ports: BTreeSet::new(),
            network_interfaces: Vec::new(),
        }
    }

    fn absorb(&mut self, record: DiscoveryRecord<'_>) {
        match record {
            DiscoveryRecord::Service(service) => {
                if let Some(hostname) = non_blank(service.hostname.as_deref()) {
                    push_unique(&mut self.hostnames, hostname);
                }
                if let Some(port) = service.port() {
                    self.ports.insert(port);
                }
                if let Some(interface) = non_blank(service.network_interface.as_deref()) {
                    push_unique(&mut self.network_interfaces, interface);
                }
                self.service_records.push(service.clone());
            }
            DiscoveryRecord::Device(device) => {
                self.device_records.push(device.clone());
            }
        }

        if PrimaryProtocol::from(record.protocol()) != self.primary_protocol {
            self.primary_protocol = PrimaryProtocol::Both;
        }
    }

    fn display_name(&self) -> String {
        DISPLAY_NAME_SOURCES
            .iter()
            .find_map(|(source, candidate)| {
                let name = candidate(self)?;
                trace!(ip = %self.ip_address, source = *source, name, "display name resolved");
                Some(name)
            })
            .unwrap_or(self.ip_address.as_str())
            .to_string()
    }

    fn finish(self) -> AggregatedDevice {
        let display_name = self.display_name();
        AggregatedDevice {
            ip_address: self.ip_address,
            hostnames: self.hostnames,
            service_records: self.service_records,
            device_records: self.device_records,
            display_name,
            primary_protocol: self.primary_protocol,
            ports: self.ports.into_iter().collect(),
            network_interfaces: self.network_interfaces,
        }
    }
}

/// Merges both record families into devices keyed by resolved address.
///
/// Service records are merged before device records, each family in input
/// order. The result is sorted by numeric IPv4 value.
pub fn aggregate(
    services: &[DiscoveryServiceRecord],
    devices: &[DiscoveryDeviceRecord],
) -> Vec<AggregatedDevice> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut pending: Vec<PendingDevice> = Vec::new();
    let mut dropped: usize = 0;

    for record in discovery::records(services, devices) {
        let Some(ip_address) = resolver::resolve(record) else {
            dropped += 1;
            debug!(protocol = ?record.protocol(), "dropping record without a resolvable address");
            continue;
        };

        let slot = *index.entry(ip_address.clone()).or_insert_with(|| {
            pending.push(PendingDevice::new(ip_address, record.protocol()));
            pending.len() - 1
        });
        pending[slot].absorb(record);
    }

    let mut aggregated: Vec<AggregatedDevice> =
        pending.into_iter().map(PendingDevice::finish).collect();
    aggregated.sort_by(|a, b| ip::compare_addresses(&a.ip_address, &b.ip_address));

    debug!(
        services = services.len(),
        devices = devices.len(),
        dropped,
        aggregated = aggregated.len(),
        "aggregated discovery records"
    );

    aggregated
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
