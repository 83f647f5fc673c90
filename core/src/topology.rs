//! # Topology Graph Builder
//!
//! Turns a reachability sweep plus discovery records into a tree:
//!
//! ```text
//! root ─┬─ subnet 192.168.1.0/24 ─┬─ host 192.168.1.9 ─┬─ mdns _smb._tcp
//!       │                         │                    └─ upnp uuid:...
//!       │                         └─ host 192.168.1.40
//!       └─ subnet 10.0.0.0/24 ...
//! ```
//!
//! Node ids are composites of kind and key, and nodes are emitted in first
//! encounter order, so identical input always yields an identical graph. The
//! builder never fails: malformed addresses become singleton subnets and
//! unresolvable records are dropped by the aggregator.

use std::collections::{HashMap, HashSet};

use lanmap_common::discovery::{DiscoveryDeviceRecord, DiscoveryProtocol, DiscoveryServiceRecord};
use lanmap_common::network::host::ReachabilityResult;
use lanmap_common::network::{ip, subnet};
use lanmap_common::utils::text::non_blank;
use tracing::{debug, trace};

use crate::aggregate::{self, AggregatedDevice};

mod model;

pub use model::{
    LinkKind, NodeKind, TopologyGraph, TopologyLink, TopologyNode, TopologyOptions,
    TopologySummary,
};

pub const ROOT_ID: &str = "root";
const ROOT_LABEL: &str = "Network";
const CLUSTER_PREFIX: u8 = 24;

/// Builds the graph from raw discovery records.
pub fn build(
    hosts: &[ReachabilityResult],
    services: &[DiscoveryServiceRecord],
    devices: &[DiscoveryDeviceRecord],
    options: TopologyOptions,
) -> TopologyGraph {
    let discovered: Vec<AggregatedDevice> = if options.include_discovery {
        aggregate::aggregate(services, devices)
    } else {
        Vec::new()
    };
    build_from_devices(hosts, &discovered)
}

/// Builds the graph from devices that were already aggregated.
pub fn build_from_devices(
    hosts: &[ReachabilityResult],
    discovered: &[AggregatedDevice],
) -> TopologyGraph {
    let mut builder = GraphBuilder::new(discovered);

    for host in hosts {
        let addr = host.ip_address.trim();
        if addr.is_empty() {
            debug!("skipping reachability result without an address");
            continue;
        }
        builder.ensure_host(addr, Some(host));
    }

    for device in discovered {
        let host_id = builder.ensure_host(&device.ip_address, None);
        for record in &device.service_records {
            builder.add_service_leaf(&host_id, &device.ip_address, record);
        }
        for record in &device.device_records {
            builder.add_device_leaf(&host_id, &device.ip_address, record);
        }
    }

    builder.finish()
}

/// The `/24` block an address belongs to.
///
/// Addresses that do not parse as IPv4 fall back to their first three dotted
/// parts, and anything shorter is its own cluster.
pub fn cluster_key(addr: &str) -> String {
    if let Some(ipv4) = ip::parse_ipv4(addr) {
        return subnet::subnet_key(ipv4, CLUSTER_PREFIX);
    }
    let parts: Vec<&str> = addr.split('.').collect();
    if parts.len() >= 3 {
        return format!("{}.{}.{}.0/{CLUSTER_PREFIX}", parts[0], parts[1], parts[2]);
    }
    addr.to_string()
}

fn subnet_id(key: &str) -> String {
    format!("subnet:{key}")
}

fn host_id(addr: &str) -> String {
    format!("host:{addr}")
}

fn service_leaf_id(addr: &str, record: &DiscoveryServiceRecord) -> String {
    let port = record
        .port()
        .map_or_else(|| "-".to_string(), |port| port.to_string());
    format!("mdns:{addr}:{}:{port}", record.service_type)
}

fn device_leaf_id(addr: &str, record: &DiscoveryDeviceRecord) -> String {
    format!("upnp:{addr}:{}", record.usn)
}

struct GraphBuilder<'a> {
    nodes: Vec<TopologyNode>,
    links: Vec<TopologyLink>,
    node_ids: HashSet<String>,
    edges: HashSet<(String, String)>,
    reachable: HashSet<String>,
    discovered: HashMap<&'a str, &'a AggregatedDevice>,
    summary: TopologySummary,
}

impl<'a> GraphBuilder<'a> {
    fn new(discovered: &'a [AggregatedDevice]) -> Self {
        let mut builder = Self {
            nodes: Vec::new(),
            links: Vec::new(),
            node_ids: HashSet::new(),
            edges: HashSet::new(),
            reachable: HashSet::new(),
            discovered: discovered
                .iter()
                .map(|device| (device.ip_address.as_str(), device))
                .collect(),
            summary: TopologySummary::default(),
        };
        builder.insert_node(TopologyNode::new(ROOT_ID, NodeKind::Root, ROOT_LABEL));
        builder
    }

    /// Adds `node` unless its id is taken; returns whether it was added.
    fn insert_node(&mut self, node: TopologyNode) -> bool {
        if !self.node_ids.insert(node.id.clone()) {
            return false;
        }
        trace!(id = %node.id, kind = ?node.kind, "node");
        self.nodes.push(node);
        true
    }

    fn link(&mut self, source: &str, target: &str, kind: LinkKind) {
        if !self.edges.insert((source.to_string(), target.to_string())) {
            return;
        }
        self.links.push(TopologyLink {
            source: source.to_string(),
            target: target.to_string(),
            kind,
        });
    }

    fn ensure_subnet(&mut self, addr: &str) -> String {
        let key = cluster_key(addr);
        let id = subnet_id(&key);
        if self.insert_node(TopologyNode::new(id.clone(), NodeKind::Subnet, key)) {
            self.summary.subnet_count += 1;
            self.link(ROOT_ID, &id, LinkKind::Membership);
        }
        id
    }

    fn ensure_host(&mut self, addr: &str, scanned: Option<&ReachabilityResult>) -> String {
        let id = host_id(addr);
        if self.node_ids.contains(&id) {
            return id;
        }

        let subnet = self.ensure_subnet(addr);
        let node = self.host_node(&id, addr, scanned);
        self.insert_node(node);
        self.link(&subnet, &id, LinkKind::Membership);

        self.summary.host_count += 1;
        if scanned.is_some() {
            self.reachable.insert(addr.to_string());
        } else {
            self.summary.discovery_only_hosts += 1;
            debug!(ip = addr, "host seen only by discovery");
        }
        id
    }

    /// Reachability data first, gaps filled from discovery.
    fn host_node(&self, id: &str, addr: &str, scanned: Option<&ReachabilityResult>) -> TopologyNode {
        let device = self.discovered.get(addr).copied();

        let hostname = scanned
            .and_then(|host| host.hostname())
            .or_else(|| device.and_then(|d| d.hostnames.first().map(String::as_str)))
            .map(str::to_string);
        let label = hostname
            .clone()
            .or_else(|| device.map(|d| d.display_name.clone()))
            .unwrap_or_else(|| addr.to_string());

        let mut node = TopologyNode::new(id, NodeKind::Host, label);
        node.ip_address = Some(addr.to_string());
        node.hostname = hostname;
        node.mac_address = scanned.and_then(|host| host.mac_address.clone());
        node.vendor = scanned
            .and_then(|host| host.vendor.clone())
            .or_else(|| device.and_then(|d| d.manufacturer().map(str::to_string)));
        node.device_type = scanned
            .and_then(|host| host.device_type.clone())
            .or_else(|| device.and_then(|d| d.device_kind().map(str::to_string)));
        node.reachable = Some(scanned.is_some());
        node.roundtrip_time_ms = scanned.map(|host| host.roundtrip_time_ms);
        node
    }

    fn add_service_leaf(&mut self, host: &str, addr: &str, record: &DiscoveryServiceRecord) {
        let label = [record.service_name.as_deref(), record.name.as_deref()]
            .into_iter()
            .find_map(non_blank)
            .unwrap_or(&record.service_type);

        let mut node = TopologyNode::new(service_leaf_id(addr, record), NodeKind::Service, label);
        node.ip_address = Some(addr.to_string());
        node.hostname = record.hostname.clone();
        node.service_type = Some(record.service_type.clone());
        node.port = record.port();
        node.protocol = Some(DiscoveryProtocol::Mdns);

        let id = node.id.clone();
        if self.insert_node(node) {
            self.summary.mdns_services += 1;
            self.link(host, &id, LinkKind::Service);
        }
    }

    fn add_device_leaf(&mut self, host: &str, addr: &str, record: &DiscoveryDeviceRecord) {
        let label = [record.friendly_name.as_deref(), record.model_name.as_deref(), record.kind()]
            .into_iter()
            .find_map(non_blank)
            .unwrap_or(&record.usn);

        let mut node = TopologyNode::new(device_leaf_id(addr, record), NodeKind::Service, label);
        node.ip_address = Some(addr.to_string());
        node.vendor = record.manufacturer.clone();
        node.device_type = record.kind().map(str::to_string);
        node.protocol = Some(DiscoveryProtocol::Upnp);

        let id = node.id.clone();
        if self.insert_node(node) {
            self.summary.upnp_devices += 1;
            self.link(host, &id, LinkKind::Service);
        }
    }

    fn finish(mut self) -> TopologyGraph {
        self.summary.total_nodes = self.nodes.len();
        self.summary.total_links = self.links.len();
        debug!(
            hosts = self.summary.host_count,
            reachable = self.reachable.len(),
            discovery_only = self.summary.discovery_only_hosts,
            subnets = self.summary.subnet_count,
            nodes = self.summary.total_nodes,
            links = self.summary.total_links,
            "topology built"
        );
        TopologyGraph {
            nodes: self.nodes,
            links: self.links,
            summary: self.summary,
        }
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
