//! Prim's minimum spanning tree construction.
//!
//! The builder works on a dense [`AdjacencyMatrix`] and scans every vertex
//! (or vertex pair) at each step, which keeps the candidate enumeration in a
//! fixed pair-scan order. Every step is recorded as a [`Step`].

mod trace;

use tracing::{debug, info, instrument, warn};

use crate::{AdjacencyMatrix, Edge, MstError, Outcome, Result, SpanningTree};

pub use self::trace::{CandidateEdge, Step, TreeEdge};

/// Configures and runs Prim's algorithm.
///
/// # Examples
/// ```
/// use spanning_core::{AdjacencyMatrix, Edge, PrimBuilder};
///
/// let graph = AdjacencyMatrix::from_edges(3, &[Edge::new(0, 1, 2.0), Edge::new(1, 2, 3.0)])?;
/// let tree = PrimBuilder::new().with_start(2).build(&graph)?;
/// assert_eq!(tree.start(), 2);
/// assert_eq!(tree.parent(1), Some(2));
/// assert_eq!(tree.parent(0), Some(1));
/// # Ok::<(), spanning_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrimBuilder {
    start: usize,
}

impl PrimBuilder {
    /// Creates a builder that starts from vertex `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the start vertex.
    #[must_use]
    pub const fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Returns the configured start vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> usize { self.start }

    /// Grows the tree over `graph`, running at most one step per vertex.
    ///
    /// Reaching a point where no unselected vertex has a finite key ends the
    /// build early with [`Outcome::Disconnected`]; this is not an error.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidStart`] when the start vertex is not in
    /// `graph`.
    #[instrument(
        name = "prim.build",
        err,
        skip(self, graph),
        fields(vertices = graph.vertex_count(), start = self.start),
    )]
    pub fn build(&self, graph: &AdjacencyMatrix) -> Result<SpanningTree> {
        let node_count = graph.vertex_count();
        if self.start >= node_count {
            return Err(MstError::InvalidStart {
                start: self.start,
                node_count,
            });
        }

        let mut frontier = Frontier::new(graph, self.start);
        let mut steps = Vec::with_capacity(node_count);
        let mut outcome = Outcome::Completed;

        for index in 1..=node_count {
            let Some((vertex, cost)) = frontier.select() else {
                let reached = steps.len();
                warn!(
                    reached,
                    unreached = node_count - reached,
                    "graph is not connected from the start vertex; halting"
                );
                outcome = Outcome::Disconnected { reached };
                break;
            };

            frontier.commit(vertex);
            let candidates = frontier.candidates();
            frontier.relax(vertex);
            let tree = frontier.tree_edges();
            let running_total: f64 = tree.iter().map(TreeEdge::weight).sum();

            debug!(
                step = index,
                vertex,
                cost,
                candidates = candidates.len(),
                running_total,
                "vertex added to tree"
            );
            steps.push(Step {
                index,
                vertex,
                cost,
                candidates,
                tree,
                running_total,
                keys: frontier.keys(),
            });
        }

        let edges = frontier.tree_edges();
        let tree = SpanningTree::new(self.start, frontier.parent, edges, steps, outcome);
        info!(
            reached = tree.reached(),
            total_weight = tree.total_weight(),
            "spanning tree built"
        );
        Ok(tree)
    }
}

/// Validates the input, builds the adjacency matrix and grows the tree from
/// `start`.
///
/// # Errors
/// Returns [`MstError`] when `num_vertices == 0`, an edge references a
/// vertex outside the graph or has a non-finite weight, or `start` is out of
/// range.
pub fn build(num_vertices: usize, edges: &[Edge], start: usize) -> Result<SpanningTree> {
    let graph = AdjacencyMatrix::from_edges(num_vertices, edges)?;
    PrimBuilder::new().with_start(start).build(&graph)
}

/// Key, parent and membership state for one build.
///
/// Keys are `f64::INFINITY` until a tree vertex offers a connection.
struct Frontier<'g> {
    graph: &'g AdjacencyMatrix,
    key: Vec<f64>,
    parent: Vec<Option<usize>>,
    selected: Vec<bool>,
}

impl<'g> Frontier<'g> {
    fn new(graph: &'g AdjacencyMatrix, start: usize) -> Self {
        let node_count = graph.vertex_count();
        let mut key = vec![f64::INFINITY; node_count];
        key[start] = 0.0;
        Self {
            graph,
            key,
            parent: vec![None; node_count],
            selected: vec![false; node_count],
        }
    }

    /// Picks the unselected vertex with the smallest finite key. The scan
    /// only replaces the incumbent on strict improvement, so the lowest
    /// index wins ties.
    fn select(&self) -> Option<(usize, f64)> {
        let mut best = None;
        let mut min_key = f64::INFINITY;
        for (vertex, (&key, &selected)) in self.key.iter().zip(&self.selected).enumerate() {
            if !selected && key < min_key {
                min_key = key;
                best = Some(vertex);
            }
        }
        best.map(|vertex| (vertex, min_key))
    }

    fn commit(&mut self, vertex: usize) {
        self.selected[vertex] = true;
    }

    fn outside(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(vertex, &selected)| (!selected).then_some(vertex))
    }

    fn candidates(&self) -> Vec<CandidateEdge> {
        let inside = self
            .selected
            .iter()
            .enumerate()
            .filter_map(|(vertex, &selected)| selected.then_some(vertex));
        inside
            .flat_map(|from| {
                self.outside().filter_map(move |to| {
                    let weight = self.graph.weight(from, to)?;
                    Some(CandidateEdge { from, to, weight })
                })
            })
            .collect()
    }

    /// Strict `<` only: an equal offer never displaces an earlier parent.
    fn relax(&mut self, vertex: usize) {
        let offers: Vec<(usize, f64)> = self
            .outside()
            .filter_map(|other| Some((other, self.graph.weight(vertex, other)?)))
            .collect();
        for (other, weight) in offers {
            if weight < self.key[other] {
                self.key[other] = weight;
                self.parent[other] = Some(vertex);
            }
        }
    }

    fn tree_edges(&self) -> Vec<TreeEdge> {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| {
                let parent = (*parent)?;
                let weight = self.graph.weight(parent, child)?;
                Some(TreeEdge::new(parent, child, weight))
            })
            .collect()
    }

    fn keys(&self) -> Vec<Option<f64>> {
        self.key
            .iter()
            .map(|&key| key.is_finite().then_some(key))
            .collect()
    }
}


#[cfg(test)]
mod property;
