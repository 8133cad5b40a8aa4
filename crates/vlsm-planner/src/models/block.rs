//! IPv4 network block model

use crate::{Error, Result};
use ipnet::Ipv4Net;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Highest address in the IPv4 space as a 64-bit integer
pub(crate) const ADDRESS_SPACE_END: u64 = u32::MAX as u64;

/// A contiguous IPv4 address block
///
/// The block starts at `start` and spans `2^(32 - prefix_len)` addresses.
/// Blocks produced by the allocator use the allocation cursor as their start
/// address, so `start` is not guaranteed to sit on its prefix boundary; see
/// [`NetworkBlock::is_aligned`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NetworkBlock {
    start: Ipv4Addr,
    prefix_len: u8,
}

impl NetworkBlock {
    /// Create a block starting at `start`
    ///
    /// Fails if the prefix is longer than 32 bits or the block would run
    /// past 255.255.255.255.
    pub fn new(start: Ipv4Addr, prefix_len: u8) -> Result<Self> {
        if prefix_len > 32 {
            return Err(Error::InvalidBase(format!(
                "prefix length {} exceeds 32",
                prefix_len
            )));
        }

        let block = Self { start, prefix_len };
        if block.last_u64() > ADDRESS_SPACE_END {
            return Err(Error::InvalidBase(format!(
                "{}/{} runs past the end of the IPv4 address space",
                start, prefix_len
            )));
        }

        Ok(block)
    }

    /// Build a candidate block from a 64-bit cursor
    ///
    /// Returns `None` when the block cannot be represented in the IPv4 space.
    pub(crate) fn from_cursor(cursor: u64, prefix_len: u8) -> Option<Self> {
        let start = u32::try_from(cursor).ok()?;
        Self::new(Ipv4Addr::from(start), prefix_len).ok()
    }

    /// Network address (the first address of the block)
    pub fn network(&self) -> Ipv4Addr {
        self.start
    }

    /// Broadcast address (the last address of the block)
    pub fn broadcast(&self) -> Ipv4Addr {
        // Construction guarantees the last address fits in 32 bits
        Ipv4Addr::from(self.last_u64() as u32)
    }

    /// Prefix length in bits
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Total number of addresses in the block
    pub fn num_addresses(&self) -> u64 {
        1u64 << (32 - u32::from(self.prefix_len))
    }

    /// Subnet mask for the prefix length
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.host_bits())
    }

    /// Host mask for the prefix length
    pub fn hostmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.host_bits())
    }

    /// Number of usable host addresses
    ///
    /// Network and broadcast addresses are reserved below /31. A /31 or /32
    /// reports every address.
    pub fn usable_host_count(&self) -> u64 {
        if self.prefix_len < 31 {
            self.num_addresses() - 2
        } else {
            self.num_addresses()
        }
    }

    /// First and last usable host addresses, `None` for /31 and /32
    pub fn usable_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        if self.prefix_len >= 31 {
            return None;
        }

        let first = u32::from(self.network()) + 1;
        let last = u32::from(self.broadcast()) - 1;
        Some((Ipv4Addr::from(first), Ipv4Addr::from(last)))
    }

    /// Whether the start address sits on the prefix boundary
    pub fn is_aligned(&self) -> bool {
        u32::from(self.start) & self.host_bits() == 0
    }

    /// Whether `other` lies entirely within this block's address range
    pub fn contains(&self, other: &NetworkBlock) -> bool {
        other.first_u64() >= self.first_u64() && other.last_u64() <= self.last_u64()
    }

    /// Containing CIDR network as `ipnet` sees it (host bits masked off)
    pub fn to_ipnet(&self) -> Ipv4Net {
        // prefix_len <= 32 is checked at construction
        Ipv4Net::new_assert(self.start, self.prefix_len).trunc()
    }

    pub(crate) fn first_u64(&self) -> u64 {
        u64::from(u32::from(self.start))
    }

    pub(crate) fn last_u64(&self) -> u64 {
        self.first_u64() + self.num_addresses() - 1
    }

    fn host_bits(&self) -> u32 {
        (self.num_addresses() - 1) as u32
    }
}

impl From<Ipv4Net> for NetworkBlock {
    /// Host bits are masked off, matching non-strict CIDR parsing
    fn from(net: Ipv4Net) -> Self {
        Self {
            start: net.network(),
            prefix_len: net.prefix_len(),
        }
    }
}

impl FromStr for NetworkBlock {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let net = Ipv4Net::from_str(s.trim())
            .map_err(|e| Error::InvalidBase(format!("'{}': {}", s.trim(), e)))?;
        Ok(Self::from(net))
    }
}

impl fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.prefix_len)
    }
}
