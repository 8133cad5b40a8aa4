//! Host-count requirements

use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Number of hosts a single subnet must accommodate
///
/// Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HostRequirement(u64);

impl HostRequirement {
    /// Create a requirement, rejecting a zero host count
    pub fn new(hosts: u64) -> Result<Self> {
        if hosts == 0 {
            return Err(Error::InvalidRequirement(
                "host count must be greater than zero".to_string(),
            ));
        }
        Ok(Self(hosts))
    }

    /// Required host count
    pub fn hosts(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for HostRequirement {
    type Error = Error;

    fn try_from(hosts: u64) -> Result<Self> {
        Self::new(hosts)
    }
}

impl fmt::Display for HostRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build a requirement list from raw host counts
pub fn requirements<I>(hosts: I) -> Result<Vec<HostRequirement>>
where
    I: IntoIterator<Item = u64>,
{
    hosts.into_iter().map(HostRequirement::try_from).collect()
}
