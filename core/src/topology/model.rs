use std::collections::HashMap;

use lanmap_common::config::ScanRequest;
use lanmap_common::discovery::DiscoveryProtocol;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Subnet,
    Host,
    Service,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Subnet to root, host to subnet.
    Membership,
    /// Discovered service or device to its host.
    Service,
}

/// A vertex of the topology graph.
///
/// Only the fields relevant to `kind` are populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Discovery family of a service leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<DiscoveryProtocol>,
    /// `false` for hosts only seen by discovery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reachable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roundtrip_time_ms: Option<f64>,
}

impl TopologyNode {
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            ip_address: None,
            hostname: None,
            mac_address: None,
            vendor: None,
            device_type: None,
            service_type: None,
            port: None,
            protocol: None,
            reachable: None,
            roundtrip_time_ms: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyLink {
    pub source: String,
    pub target: String,
    pub kind: LinkKind,
}

/// Tallies gathered while the graph is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologySummary {
    pub host_count: usize,
    pub discovery_only_hosts: usize,
    pub subnet_count: usize,
    pub mdns_services: usize,
    pub upnp_devices: usize,
    pub total_nodes: usize,
    pub total_links: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyGraph {
    pub nodes: Vec<TopologyNode>,
    pub links: Vec<TopologyLink>,
    pub summary: TopologySummary,
}

impl TopologyGraph {
    pub fn node(&self, id: &str) -> Option<&TopologyNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Direct children of `id`, in link order.
    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a TopologyNode> + 'a {
        self.links
            .iter()
            .filter(move |link| link.source == id)
            .filter_map(|link| self.node(&link.target))
    }

    /// Every node's children, in link order, built in one pass over the graph.
    ///
    /// Use this over repeated [`TopologyGraph::children`] calls when walking
    /// the whole tree.
    pub fn child_index(&self) -> HashMap<&str, Vec<&TopologyNode>> {
        let by_id: HashMap<&str, &TopologyNode> =
            self.nodes.iter().map(|node| (node.id.as_str(), node)).collect();

        let mut index: HashMap<&str, Vec<&TopologyNode>> = HashMap::new();
        for link in &self.links {
            if let Some(target) = by_id.get(link.target.as_str()) {
                index.entry(link.source.as_str()).or_default().push(target);
            }
        }
        index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyOptions {
    /// Fold mDNS/UPnP records into the graph; off means reachability only.
    pub include_discovery: bool,
}

impl Default for TopologyOptions {
    fn default() -> Self {
        Self {
            include_discovery: true,
        }
    }
}

impl From<&ScanRequest> for TopologyOptions {
    fn from(request: &ScanRequest) -> Self {
        Self {
            include_discovery: request.include_discovery,
        }
    }
}
