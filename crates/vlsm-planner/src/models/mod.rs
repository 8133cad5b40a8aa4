//! Data models for VLSM planning

mod block;
mod plan;
mod requirement;

pub use block::NetworkBlock;
pub use plan::{AllocatedSubnet, AllocationPlan};
pub use requirement::{requirements, HostRequirement};
