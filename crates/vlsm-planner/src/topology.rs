//! Allocation topology rendering
//!
//! Draws the plan as a one-to-many graph: the base block as the root with an
//! edge to every allocated subnet. Renderers own their writer and produce
//! output as a side effect.

use crate::models::AllocationPlan;
use crate::report::SubnetReport;
use crate::Result;
use std::io::Write;

/// Title used for rendered graphs
pub const GRAPH_TITLE: &str = "Subnet Allocation Topology";

/// Renders an allocation plan
pub trait TopologyRenderer {
    /// Render the plan together with its base block
    fn render(&mut self, plan: &AllocationPlan) -> Result<()>;
}

fn base_label(plan: &AllocationPlan) -> String {
    format!("Base: {}", plan.base())
}

fn subnet_lines(report: &SubnetReport) -> [String; 4] {
    [
        report.cidr.clone(),
        format!("Hosts: {}", report.usable_hosts),
        format!("Range: {}", report.range()),
        format!("Broadcast: {}", report.broadcast),
    ]
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Graphviz DOT renderer
#[derive(Debug)]
pub struct DotRenderer<W: Write> {
    writer: W,
}

impl<W: Write> DotRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TopologyRenderer for DotRenderer<W> {
    fn render(&mut self, plan: &AllocationPlan) -> Result<()> {
        let w = &mut self.writer;

        writeln!(w, "digraph vlsm {{")?;
        writeln!(w, "    label=\"{}\";", GRAPH_TITLE)?;
        writeln!(w, "    labelloc=t;")?;
        writeln!(
            w,
            "    node [shape=box, style=\"rounded,filled\", fillcolor=lightblue, fontname=\"Helvetica-Bold\"];"
        )?;
        writeln!(w, "    base [label=\"{}\"];", escape_dot(&base_label(plan)))?;

        for subnet in plan {
            let report = SubnetReport::from_subnet(subnet);
            let label = subnet_lines(&report)
                .iter()
                .map(|line| escape_dot(line))
                .collect::<Vec<_>>()
                .join("\\n");
            writeln!(w, "    subnet_{} [label=\"{}\"];", subnet.index, label)?;
            writeln!(w, "    base -> subnet_{};", subnet.index)?;
        }

        writeln!(w, "}}")?;
        w.flush()?;
        Ok(())
    }
}

/// Plain text tree renderer
#[derive(Debug)]
pub struct TreeRenderer<W: Write> {
    writer: W,
}

impl<W: Write> TreeRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TopologyRenderer for TreeRenderer<W> {
    fn render(&mut self, plan: &AllocationPlan) -> Result<()> {
        let w = &mut self.writer;

        writeln!(w, "{}", GRAPH_TITLE)?;
        writeln!(w, "{}", base_label(plan))?;

        let count = plan.len();
        for (i, subnet) in plan.iter().enumerate() {
            let last = i + 1 == count;
            let (branch, indent) = if last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };

            let report = SubnetReport::from_subnet(subnet);
            let [cidr, details @ ..] = subnet_lines(&report);
            writeln!(w, "{}{}", branch, cidr)?;
            for line in details {
                writeln!(w, "{}{}", indent, line)?;
            }
        }

        w.flush()?;
        Ok(())
    }
}
