//! Network block: a base address plus prefix length.

use super::ipv4::{check_prefix_length, parse_dotted_quad, parse_prefix_length, MAX_LENGTH};
use crate::error::{AddressError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// IPv4 network block in CIDR notation.
///
/// The base address is kept as supplied; host bits are only masked out when
/// deriving the network and broadcast addresses. Blocks only come from the
/// validating constructors, so the prefix length is always within 0..=32:
///
/// ```compile_fail
/// use ip_range_inventory::models::NetworkBlock;
/// let block = NetworkBlock { addr: std::net::Ipv4Addr::UNSPECIFIED, prefix_len: 40 };
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct NetworkBlock {
    addr: Ipv4Addr,
    prefix_len: u8,
}

/// Size figures of a block, as shown next to a range.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetInfo {
    /// Usable host addresses (network and broadcast excluded).
    pub total_ips: u64,
    pub host_bits: u8,
    /// Dotted subnet mask, e.g. `255.255.255.0`.
    pub subnet_mask: String,
}

impl NetworkBlock {
    /// Build a block from dotted-quad text and a numeric prefix length.
    pub fn new(network: &str, prefix_len: u32) -> Result<NetworkBlock> {
        let addr = parse_dotted_quad(network)?;
        let prefix_len = check_prefix_length(prefix_len)?;
        Ok(NetworkBlock { addr, prefix_len })
    }

    /// Build a block when the prefix length is stored as text.
    pub fn from_parts(network: &str, cidr: &str) -> Result<NetworkBlock> {
        let addr = parse_dotted_quad(network)?;
        let prefix_len = parse_prefix_length(cidr)?;
        Ok(NetworkBlock { addr, prefix_len })
    }

    /// Base address as supplied by the caller.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Prefix length, 0..=32.
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn host_bits(&self) -> u8 {
        MAX_LENGTH - self.prefix_len
    }

    fn mask(&self) -> u32 {
        let right_len = self.host_bits();
        ((u64::from(u32::MAX) >> right_len) << right_len) as u32
    }

    /// Lowest address in the block (host bits cleared).
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask())
    }

    /// Highest address in the block (host bits set).
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask())
    }

    /// Every address in the block, 2^host_bits.
    pub fn total_addresses(&self) -> u64 {
        1u64 << self.host_bits()
    }

    /// Addresses left once network and broadcast are removed; 0 for /31 and /32.
    pub fn usable_host_count(&self) -> u64 {
        self.total_addresses().saturating_sub(2)
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.network() <= addr && addr <= self.broadcast()
    }

    pub fn subnet_info(&self) -> SubnetInfo {
        SubnetInfo {
            total_ips: self.usable_host_count(),
            host_bits: self.host_bits(),
            subnet_mask: Ipv4Addr::from(self.mask()).to_string(),
        }
    }
}

impl FromStr for NetworkBlock {
    type Err = AddressError;

    /// Parse `a.b.c.d/nn`.
    fn from_str(addr_cidr: &str) -> Result<NetworkBlock> {
        let (network, cidr) = addr_cidr
            .split_once('/')
            .ok_or_else(|| AddressError::InvalidAddress(addr_cidr.to_string()))?;
        NetworkBlock::from_parts(network, cidr)
    }
}

impl fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl Serialize for NetworkBlock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkBlock {
    fn deserialize<D>(deserializer: D) -> std::result::Result<NetworkBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkBlock::from_str(&s).map_err(de::Error::custom)
    }
}
