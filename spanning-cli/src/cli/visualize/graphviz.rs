//! Graphviz (`dot` language) views built with the [`dot`] crate.
//!
//! Parallel edges are collapsed to their cheapest weight first, the same way
//! the builder sees them, so each drawn edge carries the weight Prim used.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use dot::{Edges, GraphWalk, Id, Kind, LabelText, Labeller, Nodes, Style};
use spanning_core::AdjacencyMatrix;
use tracing::{info, instrument};

use super::{GraphView, VisualizationOutcome, VisualizeError, Visualizer};

/// File name of the full-graph view.
pub(super) const GRAPH_FILE: &str = "graph.dot";
/// File name of the tree view.
pub(super) const TREE_FILE: &str = "mst.dot";

/// Writes `graph.dot` and `mst.dot` into a directory.
#[derive(Clone, Debug)]
pub struct DotVisualizer {
    out_dir: PathBuf,
}

impl DotVisualizer {
    /// Creates a visualizer writing into `out_dir`, created on demand.
    #[must_use]
    pub fn new(out_dir: &Path) -> Self {
        Self {
            out_dir: out_dir.to_path_buf(),
        }
    }

    fn write_view(&self, name: &str, view: &DotView) -> Result<PathBuf, VisualizeError> {
        let path = self.out_dir.join(name);
        let write_error = |source| VisualizeError::Write {
            path: path.clone(),
            source,
        };
        let file = File::create(&path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        dot::render(view, &mut writer).map_err(write_error)?;
        writer.flush().map_err(write_error)?;
        Ok(path)
    }
}

impl Visualizer for DotVisualizer {
    #[instrument(
        name = "visualize.dot",
        err,
        skip(self, view),
        fields(out_dir = %self.out_dir.display(), vertices = view.vertex_count),
    )]
    fn render(&self, view: &GraphView<'_>) -> Result<VisualizationOutcome, VisualizeError> {
        fs::create_dir_all(&self.out_dir).map_err(|source| VisualizeError::CreateDir {
            path: self.out_dir.clone(),
            source,
        })?;

        let graph = self.write_view(GRAPH_FILE, &DotView::build(view, "original", false)?)?;
        let tree = self.write_view(TREE_FILE, &DotView::build(view, "mst", true)?)?;
        info!(graph = %graph.display(), tree = %tree.display(), "views written");
        Ok(VisualizationOutcome::Written { graph, tree })
    }
}

#[derive(Clone, Debug)]
struct DotEdge {
    source: usize,
    target: usize,
    weight: f64,
    in_tree: bool,
}

/// Identifier used if a name is refused after validation.
const FALLBACK_ID: &str = "unnamed";

/// One renderable document. Names are checked against [`Id::new`] when the
/// view is built, so the [`Labeller`] callbacks always get the `Id` they ask
/// for.
struct DotView {
    graph_name: String,
    node_names: Vec<String>,
    edges: Vec<DotEdge>,
    emphasise_tree: bool,
}

impl DotView {
    fn build(view: &GraphView<'_>, name: &str, emphasise_tree: bool) -> Result<Self, VisualizeError> {
        let matrix = AdjacencyMatrix::from_edges(view.vertex_count, view.edges)?;
        let edges = (0..view.vertex_count)
            .flat_map(|source| {
                matrix
                    .neighbours(source)
                    .filter(move |&(target, _)| target > source)
                    .map(move |(target, weight)| (source, target, weight))
            })
            .map(|(source, target, weight)| DotEdge {
                source,
                target,
                weight,
                in_tree: view.is_tree_edge(source, target),
            })
            .collect();

        let node_names = (0..view.vertex_count)
            .map(|vertex| identifier(format!("v{vertex}")))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            graph_name: identifier(name.to_owned())?,
            node_names,
            edges,
            emphasise_tree,
        })
    }
}

fn identifier(name: String) -> Result<String, VisualizeError> {
    let valid = Id::new(name.as_str()).is_ok();
    if valid {
        Ok(name)
    } else {
        Err(VisualizeError::InvalidId { id: name })
    }
}

/// Builds the `Id` for an already validated name.
fn id_for(name: &str) -> Id<'_> {
    Id::new(name)
        .or_else(|()| Id::new(FALLBACK_ID))
        .unwrap_or_else(|()| unreachable!("`{FALLBACK_ID}` is a valid identifier"))
}

impl<'a> Labeller<'a, usize, DotEdge> for DotView {
    fn graph_id(&'a self) -> Id<'a> {
        id_for(&self.graph_name)
    }

    fn node_id(&'a self, node: &usize) -> Id<'a> {
        id_for(self.node_names.get(*node).map_or(FALLBACK_ID, String::as_str))
    }

    fn node_label(&'a self, node: &usize) -> LabelText<'a> {
        LabelText::label(node.to_string())
    }

    fn edge_label(&'a self, edge: &DotEdge) -> LabelText<'a> {
        LabelText::label(edge.weight.to_string())
    }

    fn edge_style(&'a self, edge: &DotEdge) -> Style {
        match (self.emphasise_tree, edge.in_tree) {
            (false, _) => Style::None,
            (true, true) => Style::Bold,
            (true, false) => Style::Dashed,
        }
    }

    fn kind(&self) -> Kind {
        Kind::Graph
    }
}

impl<'a> GraphWalk<'a, usize, DotEdge> for DotView {
    fn nodes(&'a self) -> Nodes<'a, usize> {
        (0..self.node_names.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, DotEdge> {
        Cow::Borrowed(self.edges.as_slice())
    }

    fn source(&'a self, edge: &DotEdge) -> usize {
        edge.source
    }

    fn target(&'a self, edge: &DotEdge) -> usize {
        edge.target
    }
}
