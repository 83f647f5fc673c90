use std::str::FromStr;

use pnet::datalink::MacAddr;

/// Parses a MAC address written with `:` or `-` separators.
///
/// Scanners disagree on the separator and on letter case; the result renders
/// canonically as lowercase, colon separated.
pub fn parse_mac(raw: &str) -> Option<MacAddr> {
    let normalized: String = raw.trim().replace('-', ":");
    MacAddr::from_str(&normalized).ok()
}

/// Masks the device-specific half of a MAC, keeping the OUI visible.
pub fn redact_mac(mac: &MacAddr) -> String {
    format!("{:02x}:{:02x}:{:02x}:xx:xx:xx", mac.0, mac.1, mac.2)
}
