//! # Network Mapping Service
//!
//! Implements the "map the network" use case over a collected snapshot.
//!
//! The scan and discovery collaborators have already run by the time a
//! [`NetworkSnapshot`] exists; this service only reconciles what they found.

use lanmap_common::network::host::ReachabilityResult;
use lanmap_common::network::mac;
use lanmap_common::snapshot::NetworkSnapshot;
use lanmap_common::vendors::VendorRepository;
use serde::Serialize;
use tracing::{debug, info};

use crate::aggregate::{self, AggregatedDevice};
use crate::topology::{self, TopologyGraph, TopologyOptions};

/// Aggregated devices together with the graph built from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMap {
    pub devices: Vec<AggregatedDevice>,
    pub topology: TopologyGraph,
}

/// Application service for network mapping.
///
/// Orchestrates the pipeline by:
/// 1. filling missing host vendors from the [`VendorRepository`].
/// 2. merging discovery records into devices.
/// 3. building the topology graph.
pub struct DiscoveryService {
    vendor_repo: Option<Box<dyn VendorRepository>>,
}

impl DiscoveryService {
    pub fn new(vendor_repo: Box<dyn VendorRepository>) -> Self {
        Self {
            vendor_repo: Some(vendor_repo),
        }
    }

    pub fn without_vendors() -> Self {
        Self { vendor_repo: None }
    }

    pub fn map_network(&self, snapshot: &NetworkSnapshot, options: TopologyOptions) -> NetworkMap {
        let mut hosts = snapshot.scan.hosts.clone();
        self.enrich_vendors(&mut hosts);

        let devices = if options.include_discovery {
            aggregate::aggregate(&snapshot.mdns.services, &snapshot.ssdp.devices)
        } else {
            Vec::new()
        };
        let topology = topology::build_from_devices(&hosts, &devices);

        info!(
            "Mapped {} hosts across {} subnets",
            topology.summary.host_count, topology.summary.subnet_count
        );

        NetworkMap { devices, topology }
    }

    /// Fills in vendors the scanner left empty. Existing values are kept.
    fn enrich_vendors(&self, hosts: &mut [ReachabilityResult]) {
        let Some(repo) = &self.vendor_repo else {
            return;
        };
        for host in hosts.iter_mut().filter(|host| host.vendor.is_none()) {
            let Some(mac) = host.mac_address.as_deref().and_then(mac::parse_mac) else {
                continue;
            };
            if let Some(vendor) = repo.get_vendor(mac) {
                debug!(ip = %host.ip_address, %vendor, "vendor resolved");
                host.vendor = Some(vendor);
            }
        }
    }
}
