use std::collections::HashSet;

use lanmap_core::aggregate::aggregate;
use lanmap_core::topology::{
    self, LinkKind, NodeKind, ROOT_ID, TopologyGraph, TopologyOptions, build, build_from_devices,
};

use crate::fixtures::{self, host};

fn home_lab_graph(options: TopologyOptions) -> TopologyGraph {
    let snapshot = fixtures::home_lab();
    build(
        &snapshot.scan.hosts,
        &snapshot.mdns.services,
        &snapshot.ssdp.devices,
        options,
    )
}

#[test]
fn home_lab_summary() {
    let graph = home_lab_graph(TopologyOptions::default());
    let summary = graph.summary;

    assert_eq!(summary.host_count, 8);
    assert_eq!(summary.discovery_only_hosts, 4);
    assert_eq!(summary.subnet_count, 3);
    assert_eq!(summary.mdns_services, 4);
    assert_eq!(summary.upnp_devices, 3);
    assert_eq!(summary.total_nodes, 19);
    assert_eq!(summary.total_links, 18);
    assert_eq!(summary.total_nodes, graph.nodes.len());
    assert_eq!(summary.total_links, graph.links.len());
}

#[test]
fn graph_is_a_tree_under_root() {
    let graph = home_lab_graph(TopologyOptions::default());

    assert_eq!(graph.nodes[0].id, ROOT_ID);
    assert_eq!(graph.nodes[0].kind, NodeKind::Root);

    let ids: HashSet<&str> = graph.nodes.iter().map(|node| node.id.as_str()).collect();
    assert_eq!(ids.len(), graph.nodes.len());

    for link in &graph.links {
        assert!(ids.contains(link.source.as_str()), "dangling source {}", link.source);
        assert!(ids.contains(link.target.as_str()), "dangling target {}", link.target);

        let source = graph.node(&link.source).unwrap();
        let target = graph.node(&link.target).unwrap();
        let expected = match (source.kind, target.kind) {
            (NodeKind::Root, NodeKind::Subnet) => LinkKind::Membership,
            (NodeKind::Subnet, NodeKind::Host) => LinkKind::Membership,
            (NodeKind::Host, NodeKind::Service) => LinkKind::Service,
            other => panic!("unexpected link {other:?}"),
        };
        assert_eq!(link.kind, expected);
    }
}

#[test]
fn subnets_follow_first_encounter() {
    let graph = home_lab_graph(TopologyOptions::default());
    let subnets: Vec<&str> = graph
        .children(ROOT_ID)
        .map(|node| node.label.as_str())
        .collect();
    assert_eq!(subnets, vec!["192.168.1.0/24", "10.0.0.0/24", "169.254.3.0/24"]);

    let lan: Vec<&str> = graph
        .children("subnet:192.168.1.0/24")
        .map(|node| node.id.as_str())
        .collect();
    assert_eq!(
        lan,
        vec![
            "host:192.168.1.1",
            "host:192.168.1.9",
            "host:192.168.1.20",
            "host:192.168.1.30",
            "host:192.168.1.40",
        ]
    );
}

#[test]
fn host_nodes_blend_both_sources() {
    let graph = home_lab_graph(TopologyOptions::default());

    let router = graph.node("host:192.168.1.1").unwrap();
    assert_eq!(router.label, "router.lan");
    assert_eq!(router.reachable, Some(true));
    assert_eq!(router.roundtrip_time_ms, Some(1.2));

    let nas = graph.node("host:192.168.1.9").unwrap();
    assert_eq!(nas.label, "nas.local");
    assert_eq!(nas.vendor.as_deref(), Some("Synology"));
    assert_eq!(nas.mac_address.as_deref(), Some("00-11-32-12-34-56"));

    let tv = graph.node("host:192.168.1.40").unwrap();
    assert_eq!(tv.label, "Living Room TV");
    assert_eq!(tv.reachable, Some(false));

    let pi = graph.node("host:10.0.0.5").unwrap();
    assert_eq!(pi.vendor.as_deref(), Some("Raspberry Pi Trading"));
}

#[test]
fn service_leaves() {
    let graph = home_lab_graph(TopologyOptions::default());

    let nas_leaves: Vec<&str> = graph
        .children("host:192.168.1.9")
        .map(|node| node.id.as_str())
        .collect();
    assert_eq!(
        nas_leaves,
        vec![
            "mdns:192.168.1.9:_smb._tcp:445",
            "mdns:192.168.1.9:_http._tcp:5000",
            "upnp:192.168.1.9:uuid:nas-1",
        ]
    );

    let smb = graph.node("mdns:192.168.1.9:_smb._tcp:445").unwrap();
    assert_eq!(smb.label, "NAS01");
    let http = graph.node("mdns:192.168.1.9:_http._tcp:5000").unwrap();
    assert_eq!(http.label, "_http._tcp");
    let cam = graph.node("upnp:10.0.0.7:uuid:cam").unwrap();
    assert_eq!(cam.label, "Cam 3");
    assert!(graph.node("mdns:169.254.3.3:_companion-link._tcp:-").is_some());
}

#[test]
fn reachability_only() {
    let graph = home_lab_graph(TopologyOptions {
        include_discovery: false,
    });

    assert_eq!(graph.summary.host_count, 4);
    assert_eq!(graph.summary.discovery_only_hosts, 0);
    assert_eq!(graph.summary.subnet_count, 2);
    assert!(graph.nodes.iter().all(|node| node.kind != NodeKind::Service));
}

#[test]
fn same_input_same_graph() {
    let first = home_lab_graph(TopologyOptions::default());
    let second = home_lab_graph(TopologyOptions::default());
    assert_eq!(first, second);
    assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
}

#[test]
fn prebuilt_devices_give_the_same_graph() {
    let snapshot = fixtures::home_lab();
    let devices = aggregate(&snapshot.mdns.services, &snapshot.ssdp.devices);

    let direct = home_lab_graph(TopologyOptions::default());
    let prebuilt = build_from_devices(&snapshot.scan.hosts, &devices);
    assert_eq!(direct, prebuilt);
}

#[test]
fn large_sweep_clusters() {
    let hosts: Vec<_> = (1..=254)
        .map(|last| host(&format!("10.20.{}.{last}", last % 4), 1.0))
        .collect();
    let graph = build(&hosts, &[], &[], TopologyOptions::default());

    assert_eq!(graph.summary.host_count, 254);
    assert_eq!(graph.summary.subnet_count, 4);
    assert_eq!(topology::cluster_key("10.20.3.77"), "10.20.3.0/24");
}
