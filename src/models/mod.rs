//! Domain models for IP range inventory.
//!
//! This module contains the core data structures used throughout the crate:
//! - IPv4 helpers - dotted-quad parsing, integer conversion, masks
//! - [`NetworkBlock`] - base address plus prefix length
//! - [`AddressRecord`] - one tracked address and its metadata
//! - [`IpRange`] - an operator-defined range with its label and flags

mod address;
mod ipv4;
mod network_block;
mod range;

// Re-export public types
pub use address::{AddressRecord, AddressStatus, HasIp};
pub use ipv4::{
    broadcast_addr, check_prefix_length, cut_addr, get_cidr_mask, ip_to_u32, is_valid_ipv4,
    parse_dotted_quad, parse_prefix_length, subnet_mask, u32_to_ip, MAX_LENGTH,
};
pub use network_block::{NetworkBlock, SubnetInfo};
pub use range::{IpRange, RangeLabel};
