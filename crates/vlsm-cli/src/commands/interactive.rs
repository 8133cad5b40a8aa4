//! Interactive prompting
//!
//! Asks for a base network and host counts, re-prompting until each answer
//! parses, then prints the plan like the `plan` command.

use super::plan::{build_plan, show_plan, PlanOptions};
use crate::config::{CliConfig, GraphKind, OutputFormat};
use crate::{output, CliError, Result};
use clap::Args;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use vlsm_planner::{parse_base, parse_requirements};

#[derive(Debug, Clone, Default, Args)]
pub struct InteractiveArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Topology diagram to draw after the plan
    #[arg(short, long, value_enum)]
    pub graph: Option<GraphKind>,
}

pub fn execute(args: InteractiveArgs, config: &CliConfig) -> Result<()> {
    let options = PlanOptions::resolve(args.format, args.graph, None, false, config)?;

    output::section("VLSM Subnet Planner");

    let base = prompt_until("Enter base CIDR block (e.g., 10.0.0.0/24)", parse_base)?;
    let requirements = prompt_until(
        "Enter required hosts per subnet separated by commas (e.g., 50,20,5)",
        parse_requirements,
    )?;

    let plan = build_plan(base, &requirements, false)?;
    show_plan(&plan, &options)
}

/// Prompt until `parse` accepts the answer
fn prompt_until<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> vlsm_planner::Result<T>,
{
    let theme = ColorfulTheme::default();
    let answers = std::iter::repeat_with(|| {
        Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .interact_text()
            .map_err(CliError::from)
    });

    first_accepted(answers, parse)
}

/// Return the first answer `parse` accepts, warning about each rejected one
fn first_accepted<T, I, F>(answers: I, parse: F) -> Result<T>
where
    I: IntoIterator<Item = Result<String>>,
    F: Fn(&str) -> vlsm_planner::Result<T>,
{
    for answer in answers {
        match parse(&answer?) {
            Ok(value) => return Ok(value),
            Err(err) => output::rejected(&err),
        }
    }
    Err(CliError::Prompt("input ended before a valid answer".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vlsm_planner::HostRequirement;

    fn answers(lines: &[&str]) -> Vec<Result<String>> {
        lines.iter().map(|line| Ok(line.to_string())).collect()
    }

    #[test]
    fn test_retries_until_base_parses() {
        let base = first_accepted(answers(&["", "10.0.0/24", "10.0.0.0/24"]), parse_base).unwrap();
        assert_eq!(base.to_string(), "10.0.0.0/24");
    }

    #[test]
    fn test_retries_until_hosts_parse() {
        let reqs = first_accepted(answers(&["abc,0", "50, 20,x,5"]), parse_requirements).unwrap();
        let hosts: Vec<u64> = reqs.iter().map(HostRequirement::hosts).collect();
        assert_eq!(hosts, vec![50, 20, 5]);
    }

    #[test]
    fn test_stops_at_first_valid_answer() {
        let base = first_accepted(answers(&["192.168.1.0/24", "10.0.0.0/8"]), parse_base).unwrap();
        assert_eq!(base.to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_exhausted_input() {
        let result = first_accepted(answers(&["nope", "still nope"]), parse_base);
        assert!(matches!(result, Err(CliError::Prompt(_))));
    }

    #[test]
    fn test_prompt_failure_propagates() {
        let failing = vec![Err(CliError::Prompt("not a terminal".to_string()))];
        let result = first_accepted(failing, parse_base);
        assert!(matches!(result, Err(CliError::Prompt(msg)) if msg == "not a terminal"));
    }
}
