//! Reconciliation engine of `lanmap`.
//!
//! Takes what the reachability sweep and the mDNS/SSDP listeners reported
//! and turns it into one device list and one topology graph.

pub mod aggregate;
pub mod discovery;
pub mod resolver;
pub mod topology;
pub mod vendors;

pub use aggregate::{AggregatedDevice, PrimaryProtocol, aggregate};
pub use discovery::{DiscoveryService, NetworkMap};
pub use topology::{TopologyGraph, TopologyOptions};
