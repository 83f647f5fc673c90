use lanmap_core::aggregate::{AggregatedDevice, PrimaryProtocol, aggregate};

use crate::fixtures::{self, device, service};

fn find<'a>(devices: &'a [AggregatedDevice], addr: &str) -> &'a AggregatedDevice {
    devices
        .iter()
        .find(|device| device.ip_address == addr)
        .unwrap_or_else(|| panic!("no device at {addr}"))
}

#[test]
fn home_lab_devices() {
    let snapshot = fixtures::home_lab();
    let devices = aggregate(&snapshot.mdns.services, &snapshot.ssdp.devices);

    let addrs: Vec<&str> = devices.iter().map(|d| d.ip_address.as_str()).collect();
    assert_eq!(
        addrs,
        vec!["10.0.0.7", "169.254.3.3", "192.168.1.9", "192.168.1.30", "192.168.1.40"]
    );
}

#[test]
fn nas_is_merged_across_families() {
    let snapshot = fixtures::home_lab();
    let devices = aggregate(&snapshot.mdns.services, &snapshot.ssdp.devices);
    let nas = find(&devices, "192.168.1.9");

    assert_eq!(nas.primary_protocol, PrimaryProtocol::Both);
    assert_eq!(nas.display_name, "Synology DS920+");
    assert_eq!(nas.hostnames, vec!["nas.local"]);
    assert_eq!(nas.ports, vec![445, 5000]);
    assert_eq!(nas.network_interfaces, vec!["en0", "en1"]);
    assert_eq!(nas.service_records.len(), 2);
    assert_eq!(nas.device_records.len(), 1);
    assert_eq!(nas.manufacturer(), Some("Synology"));
}

#[test]
fn single_family_devices() {
    let snapshot = fixtures::home_lab();
    let devices = aggregate(&snapshot.mdns.services, &snapshot.ssdp.devices);

    let printer = find(&devices, "192.168.1.30");
    assert_eq!(printer.primary_protocol, PrimaryProtocol::ServiceOnly);
    assert_eq!(printer.display_name, "Office Printer");
    assert_eq!(printer.service_records[0].txt_records["ty"], "LaserJet Pro");

    let tv = find(&devices, "192.168.1.40");
    assert_eq!(tv.primary_protocol, PrimaryProtocol::DeviceOnly);
    assert_eq!(tv.device_kind(), Some("urn:dial-multiscreen-org:service:dial:1"));

    let cam = find(&devices, "10.0.0.7");
    assert_eq!(cam.display_name, "10.0.0.7");

    let link_local = find(&devices, "169.254.3.3");
    assert!(link_local.ports.is_empty());
}

#[test]
fn merge_order_does_not_matter_for_membership() {
    let services = vec![
        service("_smb._tcp", &["10.0.0.2"], 445),
        service("_afp._tcp", &["10.0.0.2"], 548),
    ];
    let devices = vec![device("uuid:a", "http://10.0.0.2/")];

    let forward = aggregate(&services, &devices);
    let reversed: Vec<_> = services.iter().rev().cloned().collect();
    let backward = aggregate(&reversed, &devices);

    assert_eq!(forward.len(), 1);
    assert_eq!(backward.len(), 1);
    assert_eq!(forward[0].ports, backward[0].ports);
    assert_eq!(forward[0].primary_protocol, backward[0].primary_protocol);
}

#[test]
fn json_round_trip_keeps_wire_names() -> anyhow::Result<()> {
    let snapshot = fixtures::home_lab();
    let devices = aggregate(&snapshot.mdns.services, &snapshot.ssdp.devices);

    let json = serde_json::to_value(&devices)?;
    let nas = &json[2];
    assert_eq!(nas["ipAddress"], "192.168.1.9");
    assert_eq!(nas["primaryProtocol"], "both");
    assert_eq!(nas["displayName"], "Synology DS920+");
    assert_eq!(json[1]["primaryProtocol"], "serviceOnly");
    assert_eq!(json[0]["primaryProtocol"], "deviceOnly");
    Ok(())
}
