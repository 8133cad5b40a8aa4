//! Host count to prefix length sizing
//!
//! Picks the smallest block whose usable capacity covers a host count.
//! Usable capacity reserves the network and broadcast addresses, so a single
//! host still needs a /30.

use crate::{Error, Result};

/// Longest prefix considered when sizing
pub const MAX_PREFIX: u8 = 32;

/// Shortest prefix considered when sizing; /0 is never produced
pub const MIN_PREFIX: u8 = 1;

/// Usable host capacity of a prefix, reserving network and broadcast
///
/// Saturates at zero for /31 and /32.
pub fn usable_hosts(prefix_len: u8) -> u64 {
    let bits = 32 - u32::from(prefix_len.min(MAX_PREFIX));
    (1u64 << bits).saturating_sub(2)
}

/// Largest prefix length whose usable capacity is at least `required_hosts`
///
/// Searches from /32 down to /1. Counts above `2^31 - 2` cannot be met and
/// yield [`Error::UnsatisfiableRequirement`].
pub fn prefix_for(required_hosts: u64) -> Result<u8> {
    (MIN_PREFIX..=MAX_PREFIX)
        .rev()
        .find(|&prefix| usable_hosts(prefix) >= required_hosts)
        .ok_or(Error::UnsatisfiableRequirement {
            hosts: required_hosts,
        })
}
