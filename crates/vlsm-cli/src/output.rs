//! Terminal output for plans and command status
//!
//! Plans, tables and diagrams go to stdout. Warnings and the final error go
//! to stderr.

use colored::Colorize;
use console::{style, Emoji};
use std::fmt::Display;
use std::path::Path;
use vlsm_planner::AllocatedSubnet;

static SAVED: Emoji = Emoji("✅", "ok");
static CAUTION: Emoji = Emoji("⚠️ ", "!");
static FAILED: Emoji = Emoji("❌", "x");

/// Underlined section title
pub fn section(title: &str) {
    println!("\n{}\n", title.bold().underline());
}

/// One `Label: value` summary line
pub fn field(label: &str, value: impl Display) {
    println!("{}: {}", label.bold(), value);
}

/// Confirm that `what` was written to `path`
pub fn saved(what: &str, path: &Path) {
    println!("{} {}", style(SAVED).green(), saved_message(what, path).green());
}

/// Warn that a subnet does not start on its prefix boundary
pub fn misaligned(subnet: &AllocatedSubnet) {
    caution(&misalignment_message(subnet));
}

/// Ask for an answer again after `reason` rejected it
pub fn rejected(reason: &dyn Display) {
    caution(&format!("Invalid input: {}. Please try again.", reason));
}

/// Report the error that ended the command
pub fn failure(err: &dyn Display) {
    eprintln!("{} {}", style(FAILED).red(), format!("Error: {}", err).red());
}

fn caution(message: &str) {
    eprintln!("{} {}", style(CAUTION).yellow(), message.yellow());
}

fn saved_message(what: &str, path: &Path) -> String {
    format!("{} written to {}", what, path.display())
}

fn misalignment_message(subnet: &AllocatedSubnet) -> String {
    format!(
        "Subnet {} ({}) does not start on a /{} boundary; its containing network is {}",
        subnet.index,
        subnet.block,
        subnet.block.prefix_len(),
        subnet.block.to_ipnet()
    )
}
