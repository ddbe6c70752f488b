//! Text rendering of a build: header, per-step trace and final tree.

use std::io::{self, Write};

use spanning_core::{Outcome, SpanningTree, Step, TreeEdge};

/// How much of the trace to print.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TraceMode {
    /// Header, every step, disconnection notice and final tree.
    #[default]
    Full,
    /// Header, disconnection notice and final tree only.
    Summary,
}

/// Writes the report for `tree` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// use spanning_cli::cli::{TraceMode, render_report};
/// use spanning_core::{Edge, build};
///
/// let tree = build(2, &[Edge::new(0, 1, 3.0)], 0)?;
/// let mut out = Vec::new();
/// render_report(&tree, TraceMode::Summary, &mut out)?;
/// let text = String::from_utf8(out)?;
/// assert!(text.contains("  0 --3--> 1\n"));
/// assert!(text.ends_with("Total tree cost: 3\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_report(tree: &SpanningTree, mode: TraceMode, mut writer: impl Write) -> io::Result<()> {
    render_header(tree, &mut writer)?;
    if mode == TraceMode::Full {
        for step in tree.steps() {
            render_step(step, &mut writer)?;
        }
    }
    if let Outcome::Disconnected { reached } = tree.outcome() {
        writeln!(
            writer,
            "The graph is NOT connected: only {reached} of {} vertices are reachable from vertex {}; the algorithm stops.",
            tree.vertex_count(),
            tree.start()
        )?;
    }
    render_final(tree, &mut writer)
}

fn render_header(tree: &SpanningTree, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "=== Prim's Minimum Spanning Tree Simulator ===")?;
    writeln!(writer, "Number of vertices: {}", tree.vertex_count())?;
    writeln!(
        writer,
        "Vertices are numbered 0 to {}",
        tree.vertex_count().saturating_sub(1)
    )?;
    writeln!(writer, "Starting from vertex {}", tree.start())?;
    writeln!(writer)
}

fn render_step(step: &Step, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "Step {}:", step.index())?;
    writeln!(
        writer,
        "  -> Vertex {} joins the tree (incremental cost = {})",
        step.vertex(),
        step.cost()
    )?;
    writeln!(
        writer,
        "  Candidates (edges from tree vertices to the remaining ones):"
    )?;
    for candidate in step.candidates() {
        writeln!(
            writer,
            "    ({} --{}--> {})",
            candidate.from(),
            candidate.weight(),
            candidate.to()
        )?;
    }
    writeln!(writer, "  Current Minimum Spanning Tree edges:")?;
    render_edges(step.tree(), "    ", writer)?;
    writeln!(writer, "  Accumulated total cost: {}", step.running_total())?;
    writeln!(writer)
}

fn render_final(tree: &SpanningTree, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "=== Final result ===")?;
    writeln!(writer, "Minimum Spanning Tree edges:")?;
    render_edges(tree.edges(), "  ", writer)?;
    writeln!(writer, "Total tree cost: {}", tree.total_weight())
}

fn render_edges(edges: &[TreeEdge], indent: &str, writer: &mut impl Write) -> io::Result<()> {
    for edge in edges {
        writeln!(
            writer,
            "{indent}{} --{}--> {}",
            edge.parent(),
            edge.weight(),
            edge.child()
        )?;
    }
    Ok(())
}
