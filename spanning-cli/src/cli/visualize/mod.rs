//! Optional graphical views of the input graph and its spanning tree.
//!
//! Rendering is a capability selected at build time. With the `graphviz`
//! feature the CLI writes two Graphviz documents; without it a
//! [`NoopVisualizer`] reports that the step was skipped and the run carries
//! on.

#[cfg(feature = "graphviz")]
mod graphviz;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use spanning_core::{Edge, SpanningTree};
use thiserror::Error;

#[cfg(feature = "graphviz")]
pub use self::graphviz::DotVisualizer;

/// Everything a visualizer needs: the vertex count, the edges as entered
/// and the final parent pointers.
#[derive(Clone, Copy, Debug)]
pub struct GraphView<'a> {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges as entered, duplicates included.
    pub edges: &'a [Edge],
    /// Parent of every vertex in the spanning tree.
    pub parents: &'a [Option<usize>],
}

impl<'a> GraphView<'a> {
    /// Builds a view over `edges` and the parent pointers of `tree`.
    #[must_use]
    pub fn new(edges: &'a [Edge], tree: &'a SpanningTree) -> Self {
        Self {
            vertex_count: tree.vertex_count(),
            edges,
            parents: tree.parents(),
        }
    }

    /// Returns `true` when `left`–`right` is a parent link in either
    /// direction.
    #[must_use]
    pub fn is_tree_edge(&self, left: usize, right: usize) -> bool {
        let points_to = |child: usize, parent: usize| {
            self.parents.get(child).copied().flatten() == Some(parent)
        };
        points_to(left, right) || points_to(right, left)
    }
}

/// What a visualizer produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisualizationOutcome {
    /// Both views were written.
    Written {
        /// Full graph with edge weights.
        graph: PathBuf,
        /// Full graph with the tree edges emphasised.
        tree: PathBuf,
    },
    /// Rendering is unavailable in this build.
    Skipped {
        /// Why the views were not produced.
        reason: String,
    },
}

/// Errors raised while writing views.
#[derive(Debug, Error)]
pub enum VisualizeError {
    /// The output directory could not be created.
    #[error("failed to create `{path}`: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A view could not be written.
    #[error("failed to write `{path}`: {source}")]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A generated Graphviz identifier was rejected.
    #[error("invalid Graphviz identifier `{id}`")]
    InvalidId {
        /// The rejected identifier.
        id: String,
    },
    /// The view's edges could not be collapsed into a graph.
    #[error(transparent)]
    Graph(#[from] spanning_core::MstError),
}

/// Renders a [`GraphView`].
pub trait Visualizer {
    /// Produces the two views, or reports why it cannot.
    ///
    /// # Errors
    /// Returns [`VisualizeError`] when output cannot be written.
    fn render(&self, view: &GraphView<'_>) -> Result<VisualizationOutcome, VisualizeError>;
}

/// Visualizer used when no rendering backend is compiled in.
#[derive(Clone, Debug)]
pub struct NoopVisualizer {
    reason: String,
}

impl NoopVisualizer {
    /// Creates a visualizer that always skips with `reason`.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Visualizer for NoopVisualizer {
    fn render(&self, _view: &GraphView<'_>) -> Result<VisualizationOutcome, VisualizeError> {
        Ok(VisualizationOutcome::Skipped {
            reason: self.reason.clone(),
        })
    }
}

/// Returns the best visualizer available in this build, writing into
/// `out_dir` when it writes anything at all.
#[cfg(feature = "graphviz")]
#[must_use]
pub fn visualizer(out_dir: &Path) -> Box<dyn Visualizer> {
    Box::new(DotVisualizer::new(out_dir))
}

/// Returns the best visualizer available in this build, writing into
/// `out_dir` when it writes anything at all.
#[cfg(not(feature = "graphviz"))]
#[must_use]
pub fn visualizer(_out_dir: &Path) -> Box<dyn Visualizer> {
    Box::new(NoopVisualizer::new(
        "this build does not include the `graphviz` feature",
    ))
}

/// Writes a human-readable notice describing `outcome`.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_outcome(outcome: &VisualizationOutcome, mut writer: impl Write) -> io::Result<()> {
    match outcome {
        VisualizationOutcome::Written { graph, tree } => {
            writeln!(writer, "Original graph written to {}", graph.display())?;
            writeln!(writer, "Minimum Spanning Tree written to {}", tree.display())?;
            writeln!(
                writer,
                "Render them with, for example: neato -Tsvg {} -o graph.svg",
                graph.display()
            )
        }
        VisualizationOutcome::Skipped { reason } => {
            writeln!(writer)?;
            writeln!(writer, "[NOTICE] Could not draw the graph: {reason}.")?;
            writeln!(
                writer,
                "         To enable drawing, rebuild with: cargo build --features graphviz"
            )
        }
    }
}
