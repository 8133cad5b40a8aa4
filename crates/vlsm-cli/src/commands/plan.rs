//! Plan command implementation

use crate::config::{CliConfig, GraphKind, OutputFormat};
use crate::{output, CliError, Result};
use clap::Args;
use comfy_table::{Cell, Color, Table};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use vlsm_planner::{
    parse_base, parse_requirements, AllocationPlan, DotRenderer, HostRequirement, NetworkBlock,
    PlanReport, SubnetReport, TopologyRenderer, TreeRenderer, VlsmAllocator,
};

#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    /// Base network in CIDR notation (e.g., 10.0.0.0/24)
    pub base: String,

    /// Required hosts per subnet, comma separated (e.g., 50,20,5)
    pub hosts: String,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Topology diagram to draw after the plan
    #[arg(short, long, value_enum)]
    pub graph: Option<GraphKind>,

    /// Write the diagram to a file instead of stdout (stderr for json and yaml)
    #[arg(long, value_name = "FILE")]
    pub graph_out: Option<PathBuf>,

    /// Pack subnets in the given order instead of largest first
    #[arg(long)]
    pub in_order: bool,
}

/// Presentation choices for a computed plan
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    pub format: OutputFormat,
    pub graph: GraphKind,
    pub graph_out: Option<PathBuf>,
    pub in_order: bool,
}

impl PlanOptions {
    /// Merge command line overrides with configured defaults
    pub fn resolve(
        format: Option<OutputFormat>,
        graph: Option<GraphKind>,
        graph_out: Option<PathBuf>,
        in_order: bool,
        config: &CliConfig,
    ) -> Result<Self> {
        let graph = graph.unwrap_or(config.default_graph);
        if graph_out.is_some() && graph == GraphKind::None {
            return Err(CliError::InvalidArgument(
                "--graph-out needs --graph tree or --graph dot".to_string(),
            ));
        }

        Ok(Self {
            format: format.unwrap_or(config.default_format),
            graph,
            graph_out,
            in_order,
        })
    }

    /// Whether an inline diagram has to stay off stdout so the
    /// machine-readable report there still parses
    pub fn diagram_on_stderr(&self) -> bool {
        self.graph != GraphKind::None
            && self.graph_out.is_none()
            && self.format.is_machine_readable()
    }
}

pub fn execute(args: PlanArgs, config: &CliConfig) -> Result<()> {
    let options = PlanOptions::resolve(
        args.format,
        args.graph,
        args.graph_out,
        args.in_order,
        config,
    )?;

    let base = parse_base(&args.base)?;
    let requirements = parse_requirements(&args.hosts)?;

    let plan = build_plan(base, &requirements, options.in_order)?;
    show_plan(&plan, &options)
}

/// Run the allocator for the chosen packing order
pub fn build_plan(
    base: NetworkBlock,
    requirements: &[HostRequirement],
    in_order: bool,
) -> Result<AllocationPlan> {
    let allocator = VlsmAllocator::new(base);
    let plan = if in_order {
        allocator.pack(requirements)?
    } else {
        allocator.allocate(requirements)?
    };

    tracing::info!(base = %allocator.base(), subnets = plan.len(), "Allocation complete");
    Ok(plan)
}

/// Print a plan and its diagram
pub fn show_plan(plan: &AllocationPlan, options: &PlanOptions) -> Result<()> {
    let report = PlanReport::from_plan(plan);

    match options.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Table => print_table(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&report)?),
    }

    plan.misaligned().for_each(output::misaligned);

    render_graph(plan, options)
}

fn print_text(report: &PlanReport) {
    output::section(&format!("Total subnets allocated: {}", report.total_subnets));
    for subnet in &report.subnets {
        println!("{}\n", subnet);
    }
    print_summary(report);
}

fn print_table(report: &PlanReport) {
    let mut table = Table::new();
    table.set_header(vec![
        "#",
        "Subnet",
        "Required",
        "Usable",
        "Range",
        "Broadcast",
        "Mask",
        "Wildcard",
    ]);

    for subnet in &report.subnets {
        table.add_row(vec![
            Cell::new(subnet.index),
            cidr_cell(subnet),
            Cell::new(subnet.required_hosts),
            Cell::new(subnet.usable_hosts),
            Cell::new(subnet.range()),
            Cell::new(&subnet.broadcast),
            Cell::new(&subnet.netmask),
            Cell::new(&subnet.wildcard_mask),
        ]);
    }

    output::section(&format!("Allocation plan for {}", report.base));
    println!("{table}");
    print_summary(report);
}

fn cidr_cell(subnet: &SubnetReport) -> Cell {
    let cell = Cell::new(&subnet.cidr);
    if subnet.aligned {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Yellow)
    }
}

fn print_summary(report: &PlanReport) {
    output::field("Base network", &report.base);
    output::field(
        "Allocated addresses",
        format!(
            "{} ({:.1}%)",
            report.allocated_addresses,
            report.utilization * 100.0
        ),
    );
    output::field("Remaining addresses", report.remaining_addresses);
    output::field("Unrequested usable hosts", report.wasted_addresses);
}

fn render_graph(plan: &AllocationPlan, options: &PlanOptions) -> Result<()> {
    match &options.graph_out {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            render_to(plan, options.graph, writer)?;
            if !options.format.is_machine_readable() {
                output::saved("Topology", path);
            }
        }
        None if options.diagram_on_stderr() => {
            render_to(plan, options.graph, io::stderr().lock())?
        }
        None => render_to(plan, options.graph, io::stdout().lock())?,
    }
    Ok(())
}

fn render_to<W: io::Write>(plan: &AllocationPlan, graph: GraphKind, writer: W) -> Result<()> {
    match graph {
        GraphKind::None => {}
        GraphKind::Tree => TreeRenderer::new(writer).render(plan)?,
        GraphKind::Dot => DotRenderer::new(writer).render(plan)?,
    }
    Ok(())
}
