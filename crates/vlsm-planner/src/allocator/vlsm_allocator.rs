//! Largest-first VLSM allocator
//!
//! Packs host requirements into a base block back to back. Requirements are
//! sorted by host count, largest first, and each one takes the smallest block
//! that fits starting at a running cursor. The cursor is never realigned;
//! a block that starts off its prefix boundary is kept and flagged.

use super::validate;
use crate::models::{AllocatedSubnet, AllocationPlan, HostRequirement, NetworkBlock};
use crate::sizing::prefix_for;
use crate::{Error, Result};
use tracing::{debug, warn};

/// Allocator for a single base block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VlsmAllocator {
    /// Block being partitioned
    base: NetworkBlock,
}

impl VlsmAllocator {
    /// Create a new allocator for the given base block
    pub fn new(base: NetworkBlock) -> Self {
        Self { base }
    }

    /// Get the base block
    pub fn base(&self) -> NetworkBlock {
        self.base
    }

    /// Allocate subnets for `requirements`, largest first
    ///
    /// The sort is stable, so equal host counts keep their input order.
    pub fn allocate(&self, requirements: &[HostRequirement]) -> Result<AllocationPlan> {
        let mut ordered: Vec<(usize, HostRequirement)> =
            requirements.iter().copied().enumerate().collect();
        ordered.sort_by(|(_, a), (_, b)| b.cmp(a));

        self.pack_positions(&ordered)
    }

    /// Allocate subnets in exactly the order given, without sorting
    pub fn pack(&self, requirements: &[HostRequirement]) -> Result<AllocationPlan> {
        let ordered: Vec<(usize, HostRequirement)> =
            requirements.iter().copied().enumerate().collect();

        self.pack_positions(&ordered)
    }

    fn pack_positions(&self, ordered: &[(usize, HostRequirement)]) -> Result<AllocationPlan> {
        if ordered.is_empty() {
            return Err(Error::NoRequirements);
        }

        let mut subnets = Vec::with_capacity(ordered.len());
        let mut cursor = u64::from(u32::from(self.base.network()));

        for (offset, &(input_position, requirement)) in ordered.iter().enumerate() {
            let index = offset + 1;
            let prefix_len = prefix_for(requirement.hosts())?;

            let out_of_range = || Error::OutOfRange {
                position: index,
                hosts: requirement.hosts(),
                prefix_len,
                start: cursor,
                base: self.base.to_ipnet(),
            };

            let block = NetworkBlock::from_cursor(cursor, prefix_len).ok_or_else(out_of_range)?;
            validate(&block, &self.base).map_err(|_| out_of_range())?;

            if !block.is_aligned() {
                warn!(
                    subnet = index,
                    block = %block,
                    containing = %block.to_ipnet(),
                    "Allocated block is not aligned to its prefix boundary"
                );
            }

            debug!(
                subnet = index,
                hosts = requirement.hosts(),
                block = %block,
                usable = block.usable_host_count(),
                "Allocated subnet"
            );

            subnets.push(AllocatedSubnet {
                index,
                input_position,
                requirement,
                block,
            });
            cursor = block.last_u64() + 1;
        }

        Ok(AllocationPlan::new(self.base, subnets))
    }
}

/// Allocate `requirements` out of `base`, largest first
pub fn allocate(base: &NetworkBlock, requirements: &[HostRequirement]) -> Result<AllocationPlan> {
    VlsmAllocator::new(*base).allocate(requirements)
}
