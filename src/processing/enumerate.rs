//! Usable host enumeration for a network block.
//!
//! Host addresses are produced lazily, network+1 up to broadcast-1, so large
//! blocks only cost what the caller actually consumes.

use crate::error::{AddressError, Result};
use crate::models::{AddressRecord, NetworkBlock};
use std::net::Ipv4Addr;

/// Default ceiling for [`materialize`]: the usable hosts of a /8.
pub const DEFAULT_MATERIALIZE_LIMIT: u64 = 16_777_214;

/// Lazy, ascending iterator over the usable hosts of a block.
///
/// Cloning yields an independent iterator from the current position, so a
/// fresh clone taken before iteration restarts the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAddresses {
    // Half-open [front, back) over the 32-bit space, held in u64 so that
    // /0 (2^32 - 2 hosts) needs no wraparound.
    front: u64,
    back: u64,
}

impl HostAddresses {
    pub fn new(block: &NetworkBlock) -> HostAddresses {
        let first = u64::from(u32::from(block.network())) + 1;
        HostAddresses {
            front: first,
            back: first + block.usable_host_count(),
        }
    }

    /// Number of addresses not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.back - self.front
    }
}

impl Iterator for HostAddresses {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        if self.front >= self.back {
            return None;
        }
        let bits = self.front as u32;
        self.front += 1;
        Some(Ipv4Addr::from(bits))
    }

    fn nth(&mut self, n: usize) -> Option<Ipv4Addr> {
        self.front = self.front.saturating_add(n as u64).min(self.back);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for HostAddresses {
    fn next_back(&mut self) -> Option<Ipv4Addr> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(Ipv4Addr::from(self.back as u32))
    }
}

impl NetworkBlock {
    /// Lazy iterator over the usable host addresses, ascending.
    pub fn hosts(&self) -> HostAddresses {
        HostAddresses::new(self)
    }
}

/// Lazy sequence of freshly seeded [`AddressRecord`]s.
#[derive(Debug, Clone)]
pub struct AddressRecords {
    hosts: HostAddresses,
}

impl AddressRecords {
    pub fn remaining(&self) -> u64 {
        self.hosts.remaining()
    }
}

impl Iterator for AddressRecords {
    type Item = AddressRecord;

    fn next(&mut self) -> Option<AddressRecord> {
        self.hosts.next().map(AddressRecord::available)
    }

    fn nth(&mut self, n: usize) -> Option<AddressRecord> {
        self.hosts.nth(n).map(AddressRecord::available)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.hosts.size_hint()
    }
}

impl DoubleEndedIterator for AddressRecords {
    fn next_back(&mut self) -> Option<AddressRecord> {
        self.hosts.next_back().map(AddressRecord::available)
    }
}

/// Enumerate the usable hosts of `network`/`prefix_len` as available records.
///
/// Host bits set in `network` are masked out. /31 and /32 yield nothing.
///
/// # Examples
/// ```
/// use ip_range_inventory::processing::enumerate;
/// let ips: Vec<String> = enumerate("10.0.1.0", 30).unwrap().map(|r| r.ip).collect();
/// assert_eq!(ips, vec!["10.0.1.1", "10.0.1.2"]);
/// ```
pub fn enumerate(network: &str, prefix_len: u32) -> Result<AddressRecords> {
    let block = NetworkBlock::new(network, prefix_len)?;
    Ok(enumerate_block(&block))
}

pub fn enumerate_block(block: &NetworkBlock) -> AddressRecords {
    let hosts = block.hosts();
    log::debug!(
        "enumerate {block} network={} broadcast={} hosts={}",
        block.network(),
        block.broadcast(),
        hosts.remaining()
    );
    AddressRecords { hosts }
}

/// Collect every record of `block`, refusing blocks above `limit` hosts.
///
/// The size check happens before anything is allocated.
pub fn materialize(block: &NetworkBlock, limit: u64) -> Result<Vec<AddressRecord>> {
    let requested = block.usable_host_count();
    if requested > limit {
        log::warn!("refusing to materialize {block}: {requested} hosts > limit {limit}");
        return Err(AddressError::AddressSpaceTooLarge { requested, limit });
    }
    let records: Vec<AddressRecord> = enumerate_block(block).collect();
    log::trace!("materialized {} records for {block}", records.len());
    Ok(records)
}
