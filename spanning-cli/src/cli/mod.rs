//! Command-line interface orchestration for the Prim step simulator.
//!
//! The `run` command reads a graph from the console or an edge-list file,
//! builds the spanning tree, prints the step trace and optionally writes
//! Graphviz views of the result.

mod commands;
mod input;
mod render;
mod visualize;

pub use commands::{Cli, CliError, Command, DEFAULT_VIEW_DIR, ExecutionSummary, RunCommand, run_cli};
pub use input::{
    ConsoleReader, EdgeLineError, GraphInput, InputError, parse_edge_line, parse_edge_list,
    resolve_start,
};
pub use render::{TraceMode, render_report};
#[cfg(feature = "graphviz")]
pub use visualize::DotVisualizer;
pub use visualize::{
    GraphView, NoopVisualizer, VisualizationOutcome, VisualizeError, Visualizer, render_outcome,
    visualizer,
};

#[cfg(test)]
mod test_helpers;
