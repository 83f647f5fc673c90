use std::path::Path;

use colored::*;
use lanmap_common::config::Config;
use lanmap_common::network::mac;
use lanmap_common::snapshot::NetworkSnapshot;
use lanmap_core::discovery::{DiscoveryService, NetworkMap};
use lanmap_core::topology::{self, TopologyGraph, TopologyNode, TopologyOptions};
use lanmap_core::vendors::MacOuiRepo;

use crate::commands::input;
use crate::mprint;
use crate::terminal::format::{self, Detail};
use crate::terminal::{colors, print};

pub fn topology(snapshot: &Path, no_discovery: bool, cfg: &Config) -> anyhow::Result<()> {
    let snapshot = input::load_snapshot(snapshot)?;
    let options = options_for(&snapshot, no_discovery);

    let service = if cfg.no_vendors {
        DiscoveryService::without_vendors()
    } else {
        DiscoveryService::new(Box::new(MacOuiRepo))
    };
    let mut map: NetworkMap = service.map_network(&snapshot, options);

    if cfg.json {
        if cfg.redact {
            redact_macs(&mut map.topology);
        }
        println!("{}", serde_json::to_string_pretty(&map.topology)?);
        return Ok(());
    }

    if let Some(cidr) = snapshot.request.as_ref().and_then(|req| req.cidr.as_deref()) {
        print::header(&format!("topology of {cidr}"), cfg.quiet);
    } else {
        print::header("network topology", cfg.quiet);
    }

    if map.topology.summary.host_count == 0 {
        print::no_results("hosts");
        return Ok(());
    }

    if cfg.quiet < 2 {
        print_tree(&map.topology, cfg);
    }
    print_summary(&map.topology, cfg);
    Ok(())
}

/// `--no-discovery` wins, otherwise the hint recorded with the snapshot.
fn options_for(snapshot: &NetworkSnapshot, no_discovery: bool) -> TopologyOptions {
    let mut options = snapshot
        .request
        .as_ref()
        .map(TopologyOptions::from)
        .unwrap_or_default();
    if no_discovery {
        options.include_discovery = false;
    }
    options
}

fn redact_macs(graph: &mut TopologyGraph) {
    for node in &mut graph.nodes {
        node.mac_address = node
            .mac_address
            .as_deref()
            .and_then(mac::parse_mac)
            .map(|parsed| mac::redact_mac(&parsed));
    }
}

fn print_tree(graph: &TopologyGraph, cfg: &Config) {
    let index = graph.child_index();
    let children = |id: &str| index.get(id).map(Vec::as_slice).unwrap_or_default();

    let subnets = children(topology::ROOT_ID);
    for (idx, subnet) in subnets.iter().enumerate() {
        print::tree_head(idx, &subnet.label);

        let hosts = children(subnet.id.as_str());
        for (host_idx, host) in hosts.iter().enumerate() {
            let last = host_idx + 1 == hosts.len();
            print::tree_line(" ", last, &host_line(host, cfg));

            let leaves = children(host.id.as_str());
            let indent = print::tree_indent(" ", last);
            for (leaf_idx, leaf) in leaves.iter().enumerate() {
                print::tree_line(&indent, leaf_idx + 1 == leaves.len(), &leaf_line(leaf));
            }
        }

        if idx + 1 != subnets.len() {
            mprint!();
        }
    }
}

fn host_line(host: &TopologyNode, cfg: &Config) -> String {
    let addr = host.ip_address.as_deref().unwrap_or(&host.id);
    let mut line = format!("{}", addr.color(colors::IPV4_ADDR));
    if host.label != addr {
        line.push_str(&format!(" {}", host.label.color(colors::PRIMARY)));
    }

    let mut details: Vec<Detail> = Vec::new();
    details.extend(format::mac_to_detail(host.mac_address.as_deref(), cfg));
    details.extend(format::vendor_to_detail(host.vendor.as_deref()));
    details.extend(format::rtt_to_detail(host.roundtrip_time_ms));
    for (key, value) in details {
        line.push_str(&format!(" {}{} {}", key.color(colors::SEPARATOR), ":".color(colors::SEPARATOR), value));
    }

    if host.reachable == Some(false) {
        line.push_str(&format!(" {}", "(discovery only)".color(colors::OFFLINE)));
    }
    line
}

fn leaf_line(leaf: &TopologyNode) -> String {
    let family = leaf
        .protocol
        .map(|protocol| format!("{protocol:?}").to_lowercase())
        .unwrap_or_default();
    let mut line = format!("{} {}", family.color(colors::SERVICE), leaf.label);
    if let Some(service_type) = &leaf.service_type {
        line.push_str(&format!(" {}", service_type.color(colors::SEPARATOR)));
    }
    if let Some(port) = leaf.port {
        line.push_str(&format!("{}{}", ":".color(colors::SEPARATOR), port.to_string().color(colors::ACCENT)));
    }
    line
}

fn print_summary(graph: &TopologyGraph, cfg: &Config) {
    let summary = &graph.summary;
    let hosts: ColoredString = format!("{} hosts", summary.host_count).bold().green();
    let subnets: ColoredString = format!("{} subnets", summary.subnet_count).bold().yellow();
    let output: String = format!("Topology Complete: {hosts} in {subnets}");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::set_key_width(["Discovery only", "mDNS services", "UPnP devices"]);
            print::aligned_line("Discovery only", summary.discovery_only_hosts.to_string());
            print::aligned_line("mDNS services", summary.mdns_services.to_string());
            print::aligned_line("UPnP devices", summary.upnp_devices.to_string());
            print::end_of_program();
        }
        _ => {
            mprint!();
            print::print_status(output);
        }
    }
}
