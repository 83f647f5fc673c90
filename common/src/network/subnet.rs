//! # IPv4 Subnet Arithmetic
//!
//! CIDR breakdown on top of [`Ipv4Network`]: masks, network and broadcast
//! addresses, usable host range and host counts.
//!
//! Used standalone (see [`parse_and_compute`]) and by the topology builder to
//! cluster hosts into `/24` blocks (see [`subnet_key`]). Both go through
//! [`parse_octets`], so an address means the same thing to either.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;
use serde::{Deserialize, Serialize};

use crate::error::{CidrError, CidrFault};

pub const MAX_PREFIX: u8 = 32;

/// Everything there is to know about a CIDR block, rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetResult {
    pub cidr: String,
    pub network_address: String,
    pub broadcast_address: String,
    pub first_usable: String,
    pub last_usable: String,
    pub subnet_mask: String,
    pub wildcard_mask: String,
    pub total_hosts: u64,
    pub usable_hosts: u64,
}

/// An IPv4 address together with its prefix length.
///
/// The address is kept as given; [`Ipv4Subnet::network`] yields the block start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Subnet {
    block: Ipv4Network,
}

impl Ipv4Subnet {
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Self, CidrError> {
        let block = Ipv4Network::new(addr, prefix).map_err(|_| {
            CidrError::invalid(
                &format!("{addr}/{prefix}"),
                CidrFault::PrefixOutOfRange(prefix.to_string()),
            )
        })?;
        Ok(Self { block })
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.block.ip()
    }

    pub fn prefix(&self) -> u8 {
        self.block.prefix()
    }

    pub fn mask(&self) -> Ipv4Addr {
        self.block.mask()
    }

    pub fn wildcard(&self) -> Ipv4Addr {
        !self.block.mask()
    }

    pub fn network(&self) -> Ipv4Addr {
        self.block.network()
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.block.broadcast()
    }

    pub fn total_hosts(&self) -> u64 {
        // `size()` is a u32 and cannot hold the whole address space.
        match self.prefix() {
            0 => 1u64 << MAX_PREFIX,
            _ => u64::from(self.block.size()),
        }
    }

    /// First usable, last usable and the usable count.
    ///
    /// `/31` and `/32` burn no addresses for network/broadcast.
    pub fn usable_range(&self) -> (Ipv4Addr, Ipv4Addr, u64) {
        let network = self.network();
        let broadcast = self.broadcast();
        let total = self.total_hosts();

        if self.prefix() >= MAX_PREFIX - 1 {
            return (network, broadcast, total);
        }

        (
            Ipv4Addr::from(u32::from(network) + 1),
            Ipv4Addr::from(u32::from(broadcast) - 1),
            total - 2,
        )
    }

    pub fn summarize(&self) -> SubnetResult {
        let (first, last, usable) = self.usable_range();
        SubnetResult {
            cidr: self.to_string(),
            network_address: self.network().to_string(),
            broadcast_address: self.broadcast().to_string(),
            first_usable: first.to_string(),
            last_usable: last.to_string(),
            subnet_mask: self.mask().to_string(),
            wildcard_mask: self.wildcard().to_string(),
            total_hosts: self.total_hosts(),
            usable_hosts: usable,
        }
    }
}

impl fmt::Display for Ipv4Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr(), self.prefix())
    }
}

impl FromStr for Ipv4Subnet {
    type Err = CidrError;

    /// Parses `"<ipv4>/<prefix>"`.
    ///
    /// Octets are plain decimal digits, so `+1` or `0x10` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let fail = |reason: CidrFault| CidrError::invalid(input, reason);

        let (ip_str, prefix_str) = input
            .split_once('/')
            .ok_or_else(|| fail(CidrFault::MissingPrefix))?;

        let addr = parse_octets(ip_str).map_err(fail)?;

        let prefix = parse_bounded(prefix_str, u32::from(MAX_PREFIX))
            .map_err(|bound| match bound {
                Bound::NotNumeric => CidrFault::NonNumericPrefix(prefix_str.to_string()),
                Bound::Exceeded => CidrFault::PrefixOutOfRange(prefix_str.to_string()),
            })
            .map_err(fail)? as u8;

        Self::new(addr, prefix).map_err(|_| fail(CidrFault::PrefixOutOfRange(prefix_str.to_string())))
    }
}

enum Bound {
    NotNumeric,
    Exceeded,
}

fn parse_bounded(s: &str, max: u32) -> Result<u32, Bound> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Bound::NotNumeric);
    }
    // All digits, so a parse failure can only be an overflow.
    match s.parse::<u32>() {
        Ok(value) if value <= max => Ok(value),
        _ => Err(Bound::Exceeded),
    }
}

/// Parses the address half of a CIDR: four decimal octets, zero padding allowed.
pub fn parse_octets(s: &str) -> Result<Ipv4Addr, CidrFault> {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return Err(CidrFault::OctetCount(parts.len()));
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        *octet = parse_bounded(part, u32::from(u8::MAX)).map_err(|bound| match bound {
            Bound::NotNumeric => CidrFault::NonNumericOctet(part.to_string()),
            Bound::Exceeded => CidrFault::OctetOutOfRange(part.to_string()),
        })? as u8;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Parses a CIDR string and computes its [`SubnetResult`].
pub fn parse_and_compute(cidr: &str) -> Result<SubnetResult, CidrError> {
    let subnet: Ipv4Subnet = cidr.parse()?;
    Ok(subnet.summarize())
}

/// The block containing `ip`, rendered as `"{network}/{prefix}"`.
///
/// Prefixes past 32 are clamped.
pub fn subnet_key(ip: Ipv4Addr, prefix: u8) -> String {
    let prefix = prefix.min(MAX_PREFIX);
    Ipv4Network::new(ip, prefix)
        .map(|block| format!("{}/{prefix}", block.network()))
        .unwrap_or_else(|_| format!("{ip}/{MAX_PREFIX}"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
