use colored::*;
use lanmap_common::config::Config;
use lanmap_common::network::mac;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn ip_to_detail(addr: &str) -> Detail {
    ("IPv4".to_string(), addr.color(colors::IPV4_ADDR))
}

/// MAC as given by the scanner, or with the device half masked.
pub fn mac_to_detail(raw: Option<&str>, cfg: &Config) -> Option<Detail> {
    let raw = raw?;
    let shown = match mac::parse_mac(raw) {
        Some(parsed) if cfg.redact => mac::redact_mac(&parsed),
        Some(parsed) => parsed.to_string(),
        None if cfg.redact => return None,
        None => raw.to_string(),
    };
    Some(("MAC".to_string(), shown.color(colors::MAC_ADDR)))
}

pub fn vendor_to_detail(vendor: Option<&str>) -> Option<Detail> {
    vendor.map(|vendor| ("Vendor".to_string(), vendor.color(colors::VENDOR)))
}

pub fn list_to_detail(key: &str, items: &[String]) -> Option<Detail> {
    if items.is_empty() {
        return None;
    }
    Some((key.to_string(), items.join(", ").color(colors::TEXT_DEFAULT)))
}

pub fn ports_to_detail(ports: &[u16]) -> Option<Detail> {
    let ports: Vec<String> = ports.iter().map(u16::to_string).collect();
    list_to_detail("Ports", &ports)
}

pub fn rtt_to_detail(rtt_ms: Option<f64>) -> Option<Detail> {
    rtt_ms.map(|rtt| ("RTT".to_string(), format!("{rtt:.1}ms").color(colors::ACCENT)))
}
