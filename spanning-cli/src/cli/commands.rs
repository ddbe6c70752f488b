//! Command implementations and argument parsing for the spanning CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use spanning_core::{MstError, SpanningTree, build};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use super::input::{ConsoleReader, GraphInput, InputError, parse_edge_list, resolve_start};
use super::render::{TraceMode, render_report};
use super::visualize::{
    GraphView, VisualizationOutcome, VisualizeError, render_outcome, visualizer,
};

/// Directory the interactive flow writes views into.
pub const DEFAULT_VIEW_DIR: &str = "spanning-views";

const VIEW_QUESTION: &str = "Do you want to draw the graph and its Minimum Spanning Tree? (y/n): ";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanning",
    about = "Step through Prim's minimum spanning tree algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build the tree and print every step.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone, Default)]
pub struct RunCommand {
    /// Edge-list file (first line: vertex count, then `u v weight` per
    /// line). Prompts on the console when omitted.
    #[arg(long)]
    pub edges: Option<PathBuf>,

    /// Start vertex. Out-of-range values fall back to 0.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub start: Option<usize>,

    /// Write Graphviz views of the graph and its tree into this directory.
    #[arg(long, value_name = "DIR")]
    pub visualize: Option<PathBuf>,

    /// Print only the header and the final tree.
    #[arg(long)]
    pub no_trace: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The edge-list file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Open {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading the graph failed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The builder rejected the graph.
    #[error(transparent)]
    Core(#[from] MstError),
    /// Writing the views failed.
    #[error(transparent)]
    Visualize(#[from] VisualizeError),
    /// Writing the report failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// The graph as read.
    pub graph: GraphInput,
    /// The tree and its step trace.
    pub tree: SpanningTree,
    /// What the visualizer produced, when views were requested.
    pub visualization: Option<VisualizationOutcome>,
}

/// Executes the CLI command represented by `cli`.
///
/// Prompts are read from `input` and everything shown to the user,
/// prompts included, is written to `output`.
///
/// # Errors
/// Returns [`CliError`] when reading, building or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanning_cli::cli::{Cli, Command, RunCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Run(RunCommand::default()),
/// };
/// let answers = "3\n2\n0 1 2\n1 2 5\n\nn\n";
/// let mut screen = Vec::new();
/// let summary = run_cli(cli, answers.as_bytes(), &mut screen)?;
/// assert_eq!(summary.tree.total_weight(), 7.0);
/// assert!(String::from_utf8(screen)?.contains("Total tree cost: 7"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, input, output),
    fields(command = field::Empty),
)]
pub fn run_cli<R: BufRead, W: Write>(
    cli: Cli,
    input: R,
    output: W,
) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run, input, output)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command, input, output),
    fields(source = field::Empty, vertices = field::Empty, start = field::Empty),
)]
pub(super) fn run_command<R: BufRead, W: Write>(
    command: RunCommand,
    input: R,
    mut output: W,
) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let mode = if command.no_trace {
        TraceMode::Summary
    } else {
        TraceMode::Full
    };

    let summary = match command.edges {
        Some(path) => {
            span.record("source", field::display("file"));
            let graph = read_edge_file(&path)?;
            let start = resolve_start(command.start, graph.vertex_count);
            let tree = build_tree(&graph, start)?;
            render_report(&tree, mode, &mut output).map_err(CliError::Output)?;
            finish(graph, tree, command.visualize, &mut output)?
        }
        None => {
            span.record("source", field::display("console"));
            let mut console = ConsoleReader::new(input, &mut output);
            let graph = console.read_graph()?;
            let start = match command.start {
                Some(requested) => resolve_start(Some(requested), graph.vertex_count),
                None => console.read_start(graph.vertex_count)?,
            };
            let tree = build_tree(&graph, start)?;
            writeln!(console.writer()).map_err(CliError::Output)?;
            render_report(&tree, mode, console.writer()).map_err(CliError::Output)?;

            let out_dir = match command.visualize {
                Some(dir) => Some(dir),
                None => {
                    writeln!(console.writer()).map_err(CliError::Output)?;
                    console
                        .confirm(VIEW_QUESTION)?
                        .then(|| PathBuf::from(DEFAULT_VIEW_DIR))
                }
            };
            finish(graph, tree, out_dir, console.writer())?
        }
    };

    info!(
        reached = summary.tree.reached(),
        total_weight = summary.tree.total_weight(),
        "command completed"
    );
    Ok(summary)
}

fn build_tree(graph: &GraphInput, start: usize) -> Result<SpanningTree, CliError> {
    let span = Span::current();
    span.record("vertices", graph.vertex_count);
    span.record("start", start);
    Ok(build(graph.vertex_count, &graph.edges, start)?)
}

fn finish(
    graph: GraphInput,
    tree: SpanningTree,
    out_dir: Option<PathBuf>,
    mut writer: impl Write,
) -> Result<ExecutionSummary, CliError> {
    let visualization = match out_dir {
        Some(dir) => {
            let outcome = visualizer(&dir).render(&GraphView::new(&graph.edges, &tree))?;
            if let VisualizationOutcome::Skipped { reason } = &outcome {
                warn!(reason = reason.as_str(), "visualization skipped");
            }
            render_outcome(&outcome, &mut writer).map_err(CliError::Output)?;
            Some(outcome)
        }
        None => None,
    };
    writer.flush().map_err(CliError::Output)?;
    Ok(ExecutionSummary {
        graph,
        tree,
        visualization,
    })
}

pub(super) fn read_edge_file(path: &Path) -> Result<GraphInput, CliError> {
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_edge_list(BufReader::new(file))?)
}
