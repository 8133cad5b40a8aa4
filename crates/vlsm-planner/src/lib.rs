//! VLSM Planner
//!
//! Partitions an IPv4 base block into variable-length subnets:
//! - Host count to prefix sizing
//! - Largest-first contiguous packing with range validation
//! - Subnet reports (ranges, masks, binary forms)
//! - Topology rendering (Graphviz DOT, text tree)
//!
//! ```
//! use std::str::FromStr;
//! use vlsm_planner::{allocate, requirements, NetworkBlock};
//!
//! let base = NetworkBlock::from_str("10.0.0.0/24").unwrap();
//! let plan = allocate(&base, &requirements([50, 20, 5]).unwrap()).unwrap();
//!
//! let cidrs: Vec<String> = plan.iter().map(|s| s.block.to_string()).collect();
//! assert_eq!(cidrs, ["10.0.0.0/26", "10.0.0.64/27", "10.0.0.96/29"]);
//! ```

pub mod allocator;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod sizing;
pub mod topology;

// Re-export core types
pub use allocator::{allocate, validate, VlsmAllocator};
pub use error::{Error, Result};
pub use input::{parse_base, parse_requirements};
pub use models::{requirements, AllocatedSubnet, AllocationPlan, HostRequirement, NetworkBlock};
pub use report::{to_binary, PlanReport, SubnetReport};
pub use sizing::prefix_for;
pub use topology::{DotRenderer, TopologyRenderer, TreeRenderer};
