//! # Discovery Records
//!
//! The two discovery protocol families are kept as distinct schemas:
//!
//! * [`DiscoveryServiceRecord`]: service advertisements carrying direct IP lists.
//! * [`DiscoveryDeviceRecord`]: device advertisements pointing at a description URL.
//!
//! Code that treats both uniformly goes through the [`DiscoveryRecord`] sum type
//! instead of a merged "flexible" record.

mod device;
mod service;

pub use device::DiscoveryDeviceRecord;
pub use service::DiscoveryServiceRecord;

/// Borrowed view over a record of either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryRecord<'a> {
    Service(&'a DiscoveryServiceRecord),
    Device(&'a DiscoveryDeviceRecord),
}

impl DiscoveryRecord<'_> {
    pub fn protocol(&self) -> DiscoveryProtocol {
        match self {
            Self::Service(_) => DiscoveryProtocol::Mdns,
            Self::Device(_) => DiscoveryProtocol::Upnp,
        }
    }
}

/// Which family a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryProtocol {
    Mdns,
    Upnp,
}

/// All service records followed by all device records, each in input order.
pub fn records<'a>(
    services: &'a [DiscoveryServiceRecord],
    devices: &'a [DiscoveryDeviceRecord],
) -> impl Iterator<Item = DiscoveryRecord<'a>> {
    services
        .iter()
        .map(DiscoveryRecord::Service)
        .chain(devices.iter().map(DiscoveryRecord::Device))
}
