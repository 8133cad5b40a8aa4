//! Prefix command implementation

use crate::{output, Result};
use clap::Args;
use comfy_table::Table;
use std::net::Ipv4Addr;
use vlsm_planner::sizing::usable_hosts;
use vlsm_planner::{prefix_for, HostRequirement, NetworkBlock};

#[derive(Debug, Clone, Args)]
pub struct PrefixArgs {
    /// Host counts to size (e.g., 50 20 5)
    #[arg(required = true, num_args = 1..)]
    pub hosts: Vec<u64>,
}

/// Sizing result for one host count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRow {
    pub hosts: u64,
    pub prefix_len: u8,
    pub netmask: Ipv4Addr,
    pub usable_hosts: u64,
}

/// Size a single host count
pub fn size(hosts: u64) -> Result<PrefixRow> {
    let requirement = HostRequirement::new(hosts)?;
    let prefix_len = prefix_for(requirement.hosts())?;
    let netmask = NetworkBlock::new(Ipv4Addr::UNSPECIFIED, prefix_len)?.netmask();

    Ok(PrefixRow {
        hosts,
        prefix_len,
        netmask,
        usable_hosts: usable_hosts(prefix_len),
    })
}

pub fn execute(args: PrefixArgs) -> Result<()> {
    let rows = args
        .hosts
        .iter()
        .map(|&hosts| size(hosts))
        .collect::<Result<Vec<_>>>()?;

    let mut table = Table::new();
    table.set_header(vec!["Hosts", "Prefix", "Subnet Mask", "Usable Hosts"]);
    for row in &rows {
        table.add_row(vec![
            row.hosts.to_string(),
            format!("/{}", row.prefix_len),
            row.netmask.to_string(),
            row.usable_hosts.to_string(),
        ]);
    }

    output::section("Prefix sizing");
    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_size() {
        let row = size(50).unwrap();
        assert_eq!(row.prefix_len, 26);
        assert_eq!(row.netmask, Ipv4Addr::new(255, 255, 255, 192));
        assert_eq!(row.usable_hosts, 62);
    }

    #[test]
    fn test_size_rejects_zero_and_oversized() {
        assert!(matches!(
            size(0),
            Err(CliError::Planner(vlsm_planner::Error::InvalidRequirement(_)))
        ));
        assert!(matches!(
            size(1 << 31),
            Err(CliError::Planner(
                vlsm_planner::Error::UnsatisfiableRequirement { .. }
            ))
        ));
    }
}
