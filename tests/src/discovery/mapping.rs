use lanmap_core::discovery::DiscoveryService;
use lanmap_core::topology::TopologyOptions;

use crate::fixtures::{self, FixedVendors};

fn vendors() -> FixedVendors {
    FixedVendors(vec![
        ([0x00, 0x11, 0x32], "Synology Incorporated"),
        ([0xa4, 0x2b, 0xb0], "TP-LINK TECHNOLOGIES CO.,LTD."),
        ([0xb8, 0x27, 0xeb], "Raspberry Pi Foundation"),
    ])
}

#[test]
fn vendors_fill_gaps_only() {
    let service = DiscoveryService::new(Box::new(vendors()));
    let map = service.map_network(&fixtures::home_lab(), TopologyOptions::default());
    let graph = &map.topology;

    let router = graph.node("host:192.168.1.1").unwrap();
    assert_eq!(router.vendor.as_deref(), Some("TP-LINK TECHNOLOGIES CO.,LTD."));

    // OUI lookup of the scanned MAC beats the UPnP manufacturer.
    let nas = graph.node("host:192.168.1.9").unwrap();
    assert_eq!(nas.vendor.as_deref(), Some("Synology Incorporated"));

    let pi = graph.node("host:10.0.0.5").unwrap();
    assert_eq!(pi.vendor.as_deref(), Some("Raspberry Pi Trading"));

    let plain = graph.node("host:192.168.1.20").unwrap();
    assert_eq!(plain.vendor, None);
}

#[test]
fn snapshot_is_left_untouched() {
    let snapshot = fixtures::home_lab();
    let before = snapshot.clone();

    DiscoveryService::new(Box::new(vendors())).map_network(&snapshot, TopologyOptions::default());

    assert_eq!(snapshot, before);
}

#[test]
fn map_serializes_both_halves() -> anyhow::Result<()> {
    let snapshot = fixtures::home_lab();
    let options = snapshot
        .request
        .as_ref()
        .map(TopologyOptions::from)
        .unwrap_or_default();
    let map = DiscoveryService::without_vendors().map_network(&snapshot, options);

    let json = serde_json::to_value(&map)?;
    assert_eq!(json["devices"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["topology"]["summary"]["hostCount"], 8);
    assert_eq!(json["topology"]["summary"]["discoveryOnlyHosts"], 4);
    assert_eq!(json["topology"]["nodes"][0]["kind"], "root");
    Ok(())
}

#[test]
fn collaborator_errors_do_not_block_mapping() {
    let snapshot = fixtures::home_lab();
    assert_eq!(
        snapshot.collaborator_errors(),
        vec![("mdns", "browse timed out after 4000ms")]
    );

    let map = DiscoveryService::without_vendors().map_network(&snapshot, TopologyOptions::default());
    assert_eq!(map.topology.summary.mdns_services, 4);
}
