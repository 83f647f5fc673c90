//! # Address Resolver
//!
//! Picks the canonical address of a discovery record.
//!
//! Service advertisements carry address lists directly, so the first routable
//! looking IPv4 entry wins. Device advertisements point at a description
//! document, and the host of that URL is the authoritative address; the raw
//! `ip_address` field is only a fallback.

use lanmap_common::discovery::{DiscoveryDeviceRecord, DiscoveryRecord, DiscoveryServiceRecord};
use lanmap_common::network::ip;
use url::Url;

/// Resolves a record of either family.
pub fn resolve(record: DiscoveryRecord<'_>) -> Option<String> {
    match record {
        DiscoveryRecord::Service(service) => resolve_service_address(service),
        DiscoveryRecord::Device(device) => resolve_device_address(device),
    }
}

/// First non link-local dotted quad, else the first entry of any form.
///
/// Only `169.254.` is excluded. Blank entries are skipped.
pub fn resolve_service_address(record: &DiscoveryServiceRecord) -> Option<String> {
    let mut candidates = record
        .ip_addresses
        .iter()
        .map(|addr| addr.trim())
        .filter(|addr| !addr.is_empty());

    let first = candidates.clone().next()?;

    candidates
        .find(|addr| ip::is_dotted_quad(addr) && !ip::is_link_local(addr))
        .or(Some(first))
        .map(str::to_string)
}

/// Host of the description URL, else the explicit `ip_address`.
pub fn resolve_device_address(record: &DiscoveryDeviceRecord) -> Option<String> {
    record
        .description_url()
        .and_then(url_host)
        .or_else(|| {
            record
                .ip_address
                .as_deref()
                .map(str::trim)
                .filter(|addr| !addr.is_empty())
                .map(str::to_string)
        })
}

fn url_host(location: &str) -> Option<String> {
    let url = Url::parse(location.trim()).ok()?;
    url.host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_string)
}
