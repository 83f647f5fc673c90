use lanmap_common::discovery::{DiscoveryDeviceRecord, DiscoveryServiceRecord};
use lanmap_common::network::host::ReachabilityResult;
use lanmap_common::snapshot::NetworkSnapshot;
use lanmap_common::vendors::VendorRepository;
use pnet::datalink::MacAddr;

const HOME_LAB: &str = include_str!("../data/home_lab.json");

/// A mixed snapshot: four scanned hosts, five mDNS and four SSDP records.
pub fn home_lab() -> NetworkSnapshot {
    serde_json::from_str(HOME_LAB).expect("home_lab.json is a valid snapshot")
}

pub fn host(addr: &str, rtt_ms: f64) -> ReachabilityResult {
    ReachabilityResult {
        roundtrip_time_ms: rtt_ms,
        ..ReachabilityResult::new(addr)
    }
}

pub fn service(service_type: &str, addrs: &[&str], port: u16) -> DiscoveryServiceRecord {
    DiscoveryServiceRecord {
        ip_addresses: addrs.iter().map(|addr| addr.to_string()).collect(),
        port: Some(port),
        ..DiscoveryServiceRecord::new(service_type)
    }
}

pub fn device(usn: &str, location: &str) -> DiscoveryDeviceRecord {
    DiscoveryDeviceRecord {
        location: Some(location.to_string()),
        ..DiscoveryDeviceRecord::new(usn)
    }
}

/// Answers for a fixed set of OUIs, like the bundled database would.
pub struct FixedVendors(pub Vec<([u8; 3], &'static str)>);

impl VendorRepository for FixedVendors {
    fn get_vendor(&self, mac: MacAddr) -> Option<String> {
        let prefix = [mac.0, mac.1, mac.2];
        self.0
            .iter()
            .find(|(oui, _)| *oui == prefix)
            .map(|(_, vendor)| vendor.to_string())
    }
}
