//! Error types for VLSM planning

use crate::models::NetworkBlock;
use ipnet::Ipv4Net;
use thiserror::Error;

/// Result type for planner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Planner errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Input errors
    #[error("Invalid base network: {0}")]
    InvalidBase(String),

    #[error("No valid host counts entered")]
    NoRequirements,

    #[error("Invalid host requirement: {0}")]
    InvalidRequirement(String),

    // Allocation errors
    #[error(
        "Subnet {position} for {hosts} hosts (/{prefix_len} starting at {}) \
         is out of base network range {base}",
        display_start(.start)
    )]
    OutOfRange {
        /// 1-based position in allocation order
        position: usize,
        /// Requested host count
        hosts: u64,
        /// Prefix computed for the request
        prefix_len: u8,
        /// Attempted start address as an integer; may lie past 255.255.255.255
        start: u64,
        /// Base block being partitioned
        base: Ipv4Net,
    },

    #[error("Block {block} does not lie within base network {base}")]
    NotContained {
        block: NetworkBlock,
        base: NetworkBlock,
    },

    #[error("No prefix between /1 and /31 can hold {hosts} hosts")]
    UnsatisfiableRequirement { hosts: u64 },

    // Presentation errors
    #[error("Render error: {0}")]
    Render(String),
}

fn display_start(start: &u64) -> String {
    match u32::try_from(*start) {
        Ok(addr) => std::net::Ipv4Addr::from(addr).to_string(),
        Err(_) => "end of address space".to_string(),
    }
}

impl From<ipnet::AddrParseError> for Error {
    fn from(e: ipnet::AddrParseError) -> Self {
        Error::InvalidBase(e.to_string())
    }
}

impl From<ipnet::PrefixLenError> for Error {
    fn from(e: ipnet::PrefixLenError) -> Self {
        Error::InvalidBase(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Render(e.to_string())
    }
}
