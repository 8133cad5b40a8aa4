//! Human-readable subnet facts
//!
//! Pure formatting over allocated blocks. Nothing here takes part in
//! allocation.

use crate::models::{AllocatedSubnet, AllocationPlan};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Placeholder shown when a block has no usable host range
pub const NOT_APPLICABLE: &str = "N/A";

/// Render an address as four zero-padded 8-bit groups
///
/// `192.168.1.0` becomes `11000000.10101000.00000001.00000000`.
pub fn to_binary(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("{:08b}", octet))
        .collect::<Vec<_>>()
        .join(".")
}

/// Printable facts about one allocated subnet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetReport {
    pub index: usize,
    pub cidr: String,
    pub required_hosts: u64,
    pub usable_hosts: u64,
    pub first_usable: String,
    pub last_usable: String,
    pub broadcast: String,
    pub netmask: String,
    pub wildcard_mask: String,
    pub network_binary: String,
    pub netmask_binary: String,
    pub broadcast_binary: String,
    pub aligned: bool,
}

impl SubnetReport {
    pub fn from_subnet(subnet: &AllocatedSubnet) -> Self {
        let block = &subnet.block;
        let (first_usable, last_usable) = match block.usable_range() {
            Some((first, last)) => (first.to_string(), last.to_string()),
            None => (NOT_APPLICABLE.to_string(), NOT_APPLICABLE.to_string()),
        };

        Self {
            index: subnet.index,
            cidr: block.to_string(),
            required_hosts: subnet.requirement.hosts(),
            usable_hosts: block.usable_host_count(),
            first_usable,
            last_usable,
            broadcast: block.broadcast().to_string(),
            netmask: block.netmask().to_string(),
            wildcard_mask: block.hostmask().to_string(),
            network_binary: to_binary(block.network()),
            netmask_binary: to_binary(block.netmask()),
            broadcast_binary: to_binary(block.broadcast()),
            aligned: block.is_aligned(),
        }
    }

    /// `first - last` usable range, or `N/A - N/A`
    pub fn range(&self) -> String {
        format!("{} - {}", self.first_usable, self.last_usable)
    }
}

impl fmt::Display for SubnetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Subnet {}: {}", self.index, self.cidr)?;
        writeln!(f, "Usable Hosts: {}", self.usable_hosts)?;
        writeln!(f, "Range: {}", self.range())?;
        writeln!(f, "Broadcast: {}", self.broadcast)?;
        writeln!(f, "Subnet Mask: {}", self.netmask)?;
        writeln!(f, "IP Address (binary): {}", self.network_binary)?;
        writeln!(f, "Subnet Mask (binary): {}", self.netmask_binary)?;
        write!(f, "Broadcast Address (binary): {}", self.broadcast_binary)
    }
}

/// Printable summary of a whole plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    pub base: String,
    pub total_subnets: usize,
    pub allocated_addresses: u64,
    pub remaining_addresses: u64,
    pub wasted_addresses: u64,
    pub utilization: f64,
    pub subnets: Vec<SubnetReport>,
}

impl PlanReport {
    pub fn from_plan(plan: &AllocationPlan) -> Self {
        Self {
            base: plan.base().to_string(),
            total_subnets: plan.len(),
            allocated_addresses: plan.allocated_addresses(),
            remaining_addresses: plan.remaining_addresses(),
            wasted_addresses: plan.wasted_addresses(),
            utilization: plan.utilization(),
            subnets: plan.iter().map(SubnetReport::from_subnet).collect(),
        }
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total subnets allocated: {}", self.total_subnets)?;
        for subnet in &self.subnets {
            writeln!(f)?;
            writeln!(f, "{}", subnet)?;
        }
        Ok(())
    }
}
