//! Address helpers shared by the resolver, the aggregator and the topology builder.
//!
//! Discovery collaborators hand addresses over as plain strings, and not all of
//! them are IPv4. These helpers work on the string form and never fail.

use std::cmp::Ordering;
use std::net::Ipv4Addr;

use super::subnet;

const LINK_LOCAL_PREFIX: &str = "169.254.";

/// Returns `true` when `addr` looks like `a.b.c.d` with 1-3 digits per part.
///
/// This is a syntax check only, `999.1.1.1` passes.
pub fn is_dotted_quad(addr: &str) -> bool {
    let parts: Vec<&str> = addr.split('.').collect();
    parts.len() == 4
        && parts
            .iter()
            .all(|part| (1..=3).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit()))
}

pub fn is_link_local(addr: &str) -> bool {
    addr.starts_with(LINK_LOCAL_PREFIX)
}

/// Per-octet numeric key of a dotted quad, `None` for anything else.
pub fn octet_key(addr: &str) -> Option<[u32; 4]> {
    if !is_dotted_quad(addr) {
        return None;
    }
    let mut key = [0u32; 4];
    for (slot, part) in key.iter_mut().zip(addr.split('.')) {
        *slot = part.parse().ok()?;
    }
    Some(key)
}

/// Orders addresses numerically per octet.
///
/// Anything that is not a dotted quad sorts after every dotted quad, and those
/// compare lexically among themselves.
pub fn compare_addresses(a: &str, b: &str) -> Ordering {
    match (octet_key(a), octet_key(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// IPv4 parse with the subnet calculator's octet rules, so `192.168.001.010`
/// is `192.168.1.10`. Leading/trailing whitespace is tolerated.
pub fn parse_ipv4(addr: &str) -> Option<Ipv4Addr> {
    subnet::parse_octets(addr.trim()).ok()
}
