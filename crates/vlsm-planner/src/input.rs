//! Validation of raw user input
//!
//! Turns the text a user types into a base block and a requirement list.
//! Callers that prompt interactively loop on these until they succeed.

use crate::models::{HostRequirement, NetworkBlock};
use crate::{Error, Result};
use std::str::FromStr;
use tracing::debug;

/// Parse a base network in CIDR notation
///
/// Host bits are masked off, so `10.0.0.7/24` yields `10.0.0.0/24`.
pub fn parse_base(input: &str) -> Result<NetworkBlock> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::InvalidBase("no CIDR block entered".to_string()));
    }
    NetworkBlock::from_str(input)
}

/// Parse a comma separated list of host counts
///
/// Tokens that are not plain positive integers are skipped. An input with no
/// usable token is rejected.
pub fn parse_requirements(input: &str) -> Result<Vec<HostRequirement>> {
    let requirements: Vec<HostRequirement> = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let parsed = token
                .bytes()
                .all(|b| b.is_ascii_digit())
                .then(|| token.parse::<u64>().ok())
                .flatten()
                .and_then(|hosts| HostRequirement::try_from(hosts).ok());

            if parsed.is_none() {
                debug!(token, "Skipping invalid host count");
            }
            parsed
        })
        .collect();

    if requirements.is_empty() {
        return Err(Error::NoRequirements);
    }

    Ok(requirements)
}
