//! Allocation plan models

use super::{HostRequirement, NetworkBlock};
use serde::Serialize;

/// One subnet carved out of the base block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllocatedSubnet {
    /// 1-based position in allocation order
    pub index: usize,
    /// 0-based position of the requirement in the caller's input
    pub input_position: usize,
    /// Requirement this subnet satisfies
    pub requirement: HostRequirement,
    /// Allocated address block
    pub block: NetworkBlock,
}

impl AllocatedSubnet {
    /// Usable addresses beyond what the requirement asked for
    pub fn spare_hosts(&self) -> u64 {
        self.block
            .usable_host_count()
            .saturating_sub(self.requirement.hosts())
    }

    /// Whether the block starts on its prefix boundary
    pub fn is_aligned(&self) -> bool {
        self.block.is_aligned()
    }
}

/// Ordered VLSM allocation over a base block
///
/// Subnets are stored in allocation order and are contiguous: each block
/// starts at the address following the previous block's broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationPlan {
    base: NetworkBlock,
    subnets: Vec<AllocatedSubnet>,
}

impl AllocationPlan {
    pub(crate) fn new(base: NetworkBlock, subnets: Vec<AllocatedSubnet>) -> Self {
        Self { base, subnets }
    }

    /// Base block the plan partitions
    pub fn base(&self) -> &NetworkBlock {
        &self.base
    }

    /// Allocated subnets in allocation order
    pub fn subnets(&self) -> &[AllocatedSubnet] {
        &self.subnets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AllocatedSubnet> {
        self.subnets.iter()
    }

    pub fn len(&self) -> usize {
        self.subnets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subnets.is_empty()
    }

    /// Addresses consumed by all subnets
    pub fn allocated_addresses(&self) -> u64 {
        self.subnets.iter().map(|s| s.block.num_addresses()).sum()
    }

    /// Addresses of the base block left after the last subnet
    pub fn remaining_addresses(&self) -> u64 {
        self.base
            .num_addresses()
            .saturating_sub(self.allocated_addresses())
    }

    /// Usable addresses handed out but not requested
    pub fn wasted_addresses(&self) -> u64 {
        self.subnets.iter().map(AllocatedSubnet::spare_hosts).sum()
    }

    /// Fraction of the base block consumed, in `0.0..=1.0`
    pub fn utilization(&self) -> f64 {
        self.allocated_addresses() as f64 / self.base.num_addresses() as f64
    }

    /// Subnets whose start address is off their prefix boundary
    pub fn misaligned(&self) -> impl Iterator<Item = &AllocatedSubnet> {
        self.subnets.iter().filter(|s| !s.is_aligned())
    }

    /// Check that adjacent blocks touch with no gap or overlap
    pub fn is_contiguous(&self) -> bool {
        self.subnets
            .windows(2)
            .all(|pair| pair[0].block.last_u64() + 1 == pair[1].block.first_u64())
    }
}

impl<'a> IntoIterator for &'a AllocationPlan {
    type Item = &'a AllocatedSubnet;
    type IntoIter = std::slice::Iter<'a, AllocatedSubnet>;

    fn into_iter(self) -> Self::IntoIter {
        self.subnets.iter()
    }
}
